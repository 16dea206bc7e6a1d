//! Statistics report output.

use crate::cli::StatsTarget;
use crate::error::Result;
use redactor_engine::RedactionStats;
use std::fs;
use std::io::{self, Write};
use tracing::info;

/// Write the JSON statistics report to `target`.
pub fn write_stats(stats: &RedactionStats, target: &StatsTarget) -> Result<()> {
    let json = stats.to_json()?;

    match target {
        StatsTarget::Stdout => writeln!(io::stdout().lock(), "{}", json)?,
        StatsTarget::Stderr => writeln!(io::stderr().lock(), "{}", json)?,
        StatsTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, format!("{}\n", json))?;
            info!("Statistics written to {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use redactor_engine::StatsReport;

    #[test]
    fn test_write_stats_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("stats.json");

        let mut stats = RedactionStats::new();
        stats.record_phone();
        stats.record_file();

        write_stats(&stats, &StatsTarget::File(path.clone())).unwrap();

        let report: StatsReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report, stats.report());
    }

    #[test]
    fn test_write_stats_to_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file
        let result = write_stats(
            &RedactionStats::new(),
            &StatsTarget::File(dir.path().to_path_buf()),
        );
        assert!(result.is_err());
    }
}
