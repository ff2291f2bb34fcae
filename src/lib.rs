//! urlprobe — concurrent HTTP availability and latency probe.
//!
//! Given a set of target URLs, urlprobe issues a configurable number of
//! concurrent GET requests per target under a global concurrency ceiling,
//! classifies each outcome (success / failed status / transport error), and
//! reports per-host counts plus min/max/average latency.

pub mod cli;
pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod prober;
pub mod report;
pub mod stats;
pub mod targets;
pub mod types;
pub mod validator;

pub use dispatcher::Dispatcher;
pub use error::{Result, UrlProbeError};
pub use prober::{HttpProber, Probe};
pub use stats::HostStats;
pub use types::ProbeResult;
