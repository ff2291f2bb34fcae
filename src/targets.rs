use std::fs;
use std::path::Path;

use crate::error::{Result, UrlProbeError};

/// Split a comma-separated hosts argument into candidate targets.
///
/// Entries are trimmed; empty entries are dropped.
pub fn from_hosts_arg(hosts: &str) -> Vec<String> {
    hosts
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Read candidate targets from a newline-delimited host file.
///
/// Blank lines and lines starting with `#` are ignored. A read failure is
/// fatal to the run.
pub fn from_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|err| {
        UrlProbeError::Config(format!(
            "Could not read host file '{}': {err}",
            path.display()
        ))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    type TestResult = Result<()>;

    #[test]
    fn test_from_hosts_arg__splits_and_trims() {
        let targets = from_hosts_arg("http://a.com, http://b.com ,http://c.com");

        assert_eq!(
            targets,
            vec![
                "http://a.com".to_string(),
                "http://b.com".to_string(),
                "http://c.com".to_string(),
            ]
        );
    }

    #[test]
    fn test_from_hosts_arg__drops_empty_entries() {
        let targets = from_hosts_arg("http://a.com,,http://b.com,");

        assert_eq!(
            targets,
            vec!["http://a.com".to_string(), "http://b.com".to_string()]
        );
    }

    #[test]
    fn test_from_hosts_arg__empty_string() {
        assert!(from_hosts_arg("").is_empty());
    }

    #[test]
    fn test_from_file__skips_blanks_and_comments() -> TestResult {
        let mut file = tempfile::NamedTempFile::new().map_err(UrlProbeError::Io)?;
        writeln!(file, "# header comment").map_err(UrlProbeError::Io)?;
        writeln!(file, "http://a.com").map_err(UrlProbeError::Io)?;
        writeln!(file).map_err(UrlProbeError::Io)?;
        writeln!(file, "  http://b.com  ").map_err(UrlProbeError::Io)?;
        writeln!(file, "# trailing comment").map_err(UrlProbeError::Io)?;

        let targets = from_file(file.path())?;

        assert_eq!(
            targets,
            vec!["http://a.com".to_string(), "http://b.com".to_string()]
        );
        Ok(())
    }

    #[test]
    fn test_from_file__only_comments_yields_empty_list() -> TestResult {
        let mut file = tempfile::NamedTempFile::new().map_err(UrlProbeError::Io)?;
        writeln!(file, "# one").map_err(UrlProbeError::Io)?;
        writeln!(file, "# two").map_err(UrlProbeError::Io)?;
        writeln!(file).map_err(UrlProbeError::Io)?;

        let targets = from_file(file.path())?;

        assert!(targets.is_empty());
        Ok(())
    }

    #[test]
    fn test_from_file__missing_file_is_error() {
        let result = from_file(Path::new("does-not-exist.txt"));

        assert!(matches!(result, Err(UrlProbeError::Config(_))));
    }
}
