use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::time::Duration;
use tokio::time::Instant;

use crate::constants::error_messages;
use crate::error::Result;
use crate::logging;
use crate::types::ProbeResult;

/// Seam for issuing a single probe against a URL.
///
/// Implementations must never fail out of this call: every outcome, timeout
/// and transport fault included, comes back as a ProbeResult so the
/// dispatcher can treat all probes uniformly as values.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeResult;
}

/// Probe implementation backed by a shared reqwest client.
///
/// The client is built once per run so connection reuse is amortized across
/// all probes.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Build a prober with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let user_agent = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn probe(&self, url: &str) -> ProbeResult {
        let start = Instant::now();

        let result = match self.client.get(url).send().await {
            Ok(response) => ProbeResult::response(
                url.to_string(),
                response.status().as_u16(),
                start.elapsed().as_secs_f64(),
            ),
            Err(err) if err.is_timeout() => ProbeResult::failure(
                url.to_string(),
                error_messages::TIMEOUT.to_string(),
            ),
            Err(err) => {
                let description = std::error::Error::source(&err)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                ProbeResult::failure(url.to_string(), description)
            }
        };

        logging::log_probe_result(&result);
        result
    }
}
