//! Configuration management
//!
//! Loading and merging of configuration from TOML files and CLI arguments.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::cli::Cli;
use crate::constants::defaults;
use crate::error::{Result, UrlProbeError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Requests to issue per host
    pub count: Option<usize>,

    /// Per-request timeout in seconds
    pub timeout: Option<u64>,

    /// Maximum probes in flight across the whole run
    pub concurrency: Option<usize>,

    /// Report destination path
    pub output: Option<String>,

    /// Suppress run header output
    pub quiet: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: Some(defaults::COUNT),
            timeout: Some(defaults::TIMEOUT_SECONDS),
            concurrency: Some(defaults::CONCURRENCY),
            output: None,
            quiet: Some(false),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlProbeError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UrlProbeError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to load `.urlprobe.toml` from the current directory, falling back
    /// to defaults.
    pub fn load_from_standard_locations() -> Self {
        Self::load_from_file(".urlprobe.toml").unwrap_or_default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence).
    pub fn merge_with_cli(&mut self, cli: &Cli) {
        if let Some(count) = cli.count {
            self.count = Some(count);
        }
        if let Some(timeout) = cli.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(concurrency) = cli.concurrency {
            self.concurrency = Some(concurrency);
        }
        if let Some(ref output) = cli.output {
            self.output = Some(output.clone());
        }
        if cli.quiet {
            self.quiet = Some(true);
        }
        if cli.verbose {
            self.verbose = Some(true);
        }
    }

    /// Validate configuration values. Runs before any network activity.
    pub fn validate(&self) -> Result<()> {
        if self.count == Some(0) {
            return Err(UrlProbeError::Config(
                "count must be a positive integer".to_string(),
            ));
        }
        if self.timeout == Some(0) {
            return Err(UrlProbeError::Config(
                "timeout must be a positive number of seconds".to_string(),
            ));
        }
        if self.concurrency == Some(0) {
            return Err(UrlProbeError::Config(
                "concurrency must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Requests per host, defaulting to 1.
    pub fn count(&self) -> usize {
        self.count.unwrap_or(defaults::COUNT)
    }

    /// Per-request timeout as a Duration.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(defaults::TIMEOUT_SECONDS))
    }

    /// Concurrency ceiling, defaulting to 10.
    pub fn concurrency(&self) -> usize {
        self.concurrency.unwrap_or(defaults::CONCURRENCY)
    }

    pub fn quiet(&self) -> bool {
        self.quiet.unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}
