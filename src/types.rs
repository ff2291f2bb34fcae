use std::fmt;

use crate::constants::http_status;

/// Outcome of a single probe against a target URL.
///
/// Exactly one of `status` and `error` is populated: a received response
/// always carries its status code, and any failure to obtain a response
/// carries a textual description instead. Failure results keep a
/// zero-duration placeholder so they never enter latency statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// The URL that was probed
    pub url: String,
    /// Whether a response was received with a status in [200, 400)
    pub success: bool,
    /// Status code of the received response, if any
    pub status: Option<u16>,
    /// Wall-clock seconds until the outcome was known (0 on failure paths)
    pub duration: f64,
    /// Description of the fault when no response was received
    pub error: Option<String>,
}

impl ProbeResult {
    /// Create a ProbeResult for a received HTTP response.
    pub fn response(url: String, status: u16, duration: f64) -> Self {
        let success =
            (http_status::SUCCESS_MIN..http_status::SUCCESS_MAX).contains(&status);
        Self {
            url,
            success,
            status: Some(status),
            duration,
            error: None,
        }
    }

    /// Create a ProbeResult for a request that produced no response
    /// (timeout, transport fault, or anything unexpected).
    pub fn failure(url: String, error: String) -> Self {
        Self {
            url,
            success: false,
            status: None,
            duration: 0.0,
            error: Some(error),
        }
    }

    /// True when no response was received at all.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// True when a response was received with a status in [400, 600).
    pub fn is_failed_status(&self) -> bool {
        matches!(
            self.status,
            Some(status)
                if (http_status::SUCCESS_MAX..http_status::FAILED_MAX).contains(&status)
        )
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.status {
            write!(f, "{} - {} - {:.3}s", status, &self.url, self.duration)
        } else if let Some(ref error) = self.error {
            write!(f, "{} - {}", &self.url, error)
        } else {
            write!(f, "{} - no outcome", &self.url)
        }
    }
}
