use std::fmt;

use crate::constants::error_messages;

/// Error types for urlprobe operations
#[derive(Debug)]
pub enum UrlProbeError {
    /// IO error (host file reading, report writing)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// HTTP client construction error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// No valid targets remained after validation
    NoTargets,
}

impl fmt::Display for UrlProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlProbeError::Io(err) => write!(f, "IO error: {err}"),
            UrlProbeError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlProbeError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            UrlProbeError::Http(err) => write!(f, "HTTP error: {err}"),
            UrlProbeError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UrlProbeError::NoTargets => write!(f, "{}", error_messages::NO_TARGETS),
        }
    }
}

impl std::error::Error for UrlProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlProbeError::Io(err) => Some(err),
            UrlProbeError::Http(err) => Some(err),
            UrlProbeError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlProbeError {
    fn from(err: std::io::Error) -> Self {
        UrlProbeError::Io(err)
    }
}

impl From<reqwest::Error> for UrlProbeError {
    fn from(err: reqwest::Error) -> Self {
        UrlProbeError::Http(err)
    }
}

impl From<toml::de::Error> for UrlProbeError {
    fn from(err: toml::de::Error) -> Self {
        UrlProbeError::TomlParsing(err)
    }
}

/// Type alias for Results using UrlProbeError
pub type Result<T> = std::result::Result<T, UrlProbeError>;
