use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use urlprobe::cli::Cli;
use urlprobe::config::Config;
use urlprobe::error::Result;
use urlprobe::stats::HostStats;
use urlprobe::{Dispatcher, HttpProber, UrlProbeError};
use urlprobe::{logging, report, stats, targets, validator};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main probe logic extracted from main() for testing
pub async fn run(cli: &Cli) -> Result<i32> {
    let config = load_and_merge_config(cli)?;
    logging::init_logger(config.verbose(), config.quiet());

    let candidates = resolve_candidates(cli)?;
    let valid_targets = validator::filter_targets(candidates);
    if valid_targets.is_empty() {
        return Err(UrlProbeError::NoTargets);
    }

    logging::log_config_info(&config, valid_targets.len());

    let count = config.count();
    if !config.quiet() {
        println!(
            "Probing {} host(s), {} request(s) each...",
            valid_targets.len(),
            count
        );
    }

    let prober = HttpProber::new(config.timeout_duration())?;
    let dispatcher = Dispatcher::new(Arc::new(prober), config.concurrency());

    let started = Instant::now();
    let batches = dispatcher.run(&valid_targets, count).await;
    let probe_total: usize = batches.iter().map(|(_, results)| results.len()).sum();
    logging::log_run_complete(batches.len(), probe_total, started.elapsed().as_millis());

    let per_host: Vec<(String, HostStats)> = batches
        .iter()
        .map(|(host, results)| (host.clone(), stats::aggregate(results)))
        .collect();

    let rendered = report::render(&per_host);
    report::emit(&rendered, config.output.as_deref().map(Path::new));

    // Probe failures are data, not process failures.
    Ok(0)
}

/// Load configuration and merge with CLI arguments; validation runs before
/// any network activity.
fn load_and_merge_config(cli: &Cli) -> Result<Config> {
    let mut config = if cli.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli.config {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli);
    config.validate()?;
    Ok(config)
}

/// Resolve the candidate target list from the hosts flag or the host file.
fn resolve_candidates(cli: &Cli) -> Result<Vec<String>> {
    if let Some(ref hosts) = cli.hosts {
        Ok(targets::from_hosts_arg(hosts))
    } else if let Some(ref file) = cli.file {
        targets::from_file(Path::new(file))
    } else {
        // clap's ArgGroup guarantees one of the two is present.
        Err(UrlProbeError::InvalidArgument(
            "either --hosts or --file is required".to_string(),
        ))
    }
}
