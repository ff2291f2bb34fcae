use std::fs;
use std::path::Path;

use crate::logging;
use crate::stats::HostStats;

const BLOCK_WIDTH: usize = 60;

/// Render per-host statistics as a human-readable text report.
///
/// One fixed-width delimited block per host, in the given order.
pub fn render(per_host: &[(String, HostStats)]) -> String {
    let mut lines = Vec::with_capacity(per_host.len() * 10);

    for (host, stats) in per_host {
        lines.push(format!("\n{}", "=".repeat(BLOCK_WIDTH)));
        lines.push(format!("Host: {host}"));
        lines.push("-".repeat(BLOCK_WIDTH));
        lines.push(format!("Success:          {}", stats.success_count));
        lines.push(format!("Failed (4xx/5xx): {}", stats.failed_count));
        lines.push(format!("Errors:           {}", stats.error_count));
        lines.push(format!("Min time:         {:.3}s", stats.min_time()));
        lines.push(format!("Max time:         {:.3}s", stats.max_time()));
        lines.push(format!("Avg time:         {:.3}s", stats.avg_time()));
        lines.push("=".repeat(BLOCK_WIDTH));
    }

    lines.join("\n")
}

/// Write the report to the given path, or print it to stdout.
///
/// A write failure degrades to stdout printing with a warning; it never
/// fails the run.
pub fn emit(report: &str, output: Option<&Path>) {
    match output {
        Some(path) => match fs::write(path, report) {
            Ok(()) => println!("Results saved to {}", path.display()),
            Err(err) => {
                logging::log_error(
                    &format!("Could not write report to '{}'", path.display()),
                    Some(&err),
                );
                eprintln!(
                    "Warning: could not write report to '{}': {err}",
                    path.display()
                );
                println!("{report}");
            }
        },
        None => println!("{report}"),
    }
}
