/// Application-wide constants to avoid magic values throughout the codebase.
/// Default configuration values
pub mod defaults {
    /// Default per-request timeout in seconds
    pub const TIMEOUT_SECONDS: u64 = 10;
    /// Default ceiling for probes in flight across the whole run
    pub const CONCURRENCY: usize = 10;
    /// Default number of requests per host
    pub const COUNT: usize = 1;
}

/// HTTP status classification boundaries
pub mod http_status {
    /// Lowest status counted as a success
    pub const SUCCESS_MIN: u16 = 200;
    /// First status above the success range (exclusive bound)
    pub const SUCCESS_MAX: u16 = 400;
    /// First status above the failed range (exclusive bound)
    pub const FAILED_MAX: u16 = 600;
}

/// Error message constants
pub mod error_messages {
    /// Classification label for probes that exceed the request timeout
    pub const TIMEOUT: &str = "Timeout";
    /// Reported when validation leaves nothing to probe
    pub const NO_TARGETS: &str = "no valid targets to probe";
}
