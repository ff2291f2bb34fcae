// Command-line interface definitions for urlprobe

use clap::{ArgGroup, Parser};

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("targets")
        .required(true)
        .multiple(false)
        .args(["hosts", "file"])
))]
pub struct Cli {
    // Targets
    /// Comma-separated list of target URLs
    #[arg(short = 'H', long, value_name = "URLS", help_heading = "Targets")]
    pub hosts: Option<String>,

    /// File with one URL per line ('#' starts a comment)
    #[arg(short = 'F', long, value_name = "PATH", help_heading = "Targets")]
    pub file: Option<String>,

    // Probing
    /// Requests to issue per host (default: 1)
    #[arg(short = 'C', long, value_name = "COUNT", help_heading = "Probing")]
    pub count: Option<usize>,

    /// Per-request timeout in seconds (default: 10)
    #[arg(short = 't', long, value_name = "SECONDS", help_heading = "Probing")]
    pub timeout: Option<u64>,

    /// Maximum probes in flight across the whole run (default: 10)
    #[arg(long, value_name = "COUNT", help_heading = "Probing")]
    pub concurrency: Option<usize>,

    // Output & Verbosity
    /// Write the report to this file instead of stdout
    #[arg(short = 'O', long, value_name = "PATH", help_heading = "Output & Verbosity")]
    pub output: Option<String>,

    /// Suppress run header output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}
