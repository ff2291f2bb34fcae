use log::{debug, error, info, warn};

use crate::config::Config;
use crate::types::ProbeResult;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, target_count: usize) {
    info!(
        "Configuration: count={}, timeout={}s, concurrency={}",
        config.count(),
        config.timeout_duration().as_secs(),
        config.concurrency()
    );
    info!("Probing {target_count} target(s)");
}

/// Log individual probe outcomes for debugging
pub fn log_probe_result(result: &ProbeResult) {
    match (result.status, result.error.as_deref()) {
        (Some(status), _) if result.success => debug!("✓ {} -> {status}", result.url),
        (Some(status), _) => debug!("✗ {} -> {status}", result.url),
        (None, Some(desc)) => debug!("✗ {} -> {desc}", result.url),
        (None, None) => debug!("? {} -> unknown", result.url),
    }
}

/// Log run completion
pub fn log_run_complete(hosts: usize, probes: usize, duration_ms: u128) {
    info!("Probe run complete: {hosts} host(s), {probes} probe(s) in {duration_ms}ms");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_initialization() {
        // Logger can only be initialized once per process.
        std::panic::catch_unwind(|| init_logger(true, false)).ok();
    }

    #[test]
    fn test_log_helpers_do_not_panic() {
        let config = Config::default();
        log_config_info(&config, 3);
        log_run_complete(3, 6, 120);
        log_warning("warning");
        log_error("error", None);

        let io_error = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        log_error("error with source", Some(&io_error));

        log_probe_result(&ProbeResult::response("http://a.com".to_string(), 200, 0.1));
        log_probe_result(&ProbeResult::response("http://a.com".to_string(), 500, 0.1));
        log_probe_result(&ProbeResult::failure(
            "http://a.com".to_string(),
            "Timeout".to_string(),
        ));
    }
}
