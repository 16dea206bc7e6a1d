//! Batch processing of input files.

use crate::error::{CliError, Result};
use redactor_domain::traits::{AddressParser, Embedder, EntityRecognizer};
use redactor_engine::{RedactionOptions, RedactionStats, Redactor};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Extension given to redacted copies
pub const OUTPUT_EXTENSION: &str = "censored";

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files written
    pub written: Vec<PathBuf>,
    /// Files skipped after an error
    pub failed: Vec<PathBuf>,
}

/// Expand glob patterns into the files they match, in enumeration order.
///
/// Directories are skipped. Unreadable entries are logged and skipped.
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(path) => debug!("Skipping non-file {}", path.display()),
                Err(e) => warn!("Cannot read {}: {}", e.path().display(), e.error()),
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles(patterns.join(", ")));
    }
    Ok(files)
}

/// Output path for `input`: its file stem with the `.censored` extension,
/// under `output_dir`.
pub fn output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    output_dir.join(name)
}

/// Redact one file and write its censored copy.
///
/// `files_processed` is only incremented once the copy is written.
pub fn process_file<R, E, A>(
    redactor: &Redactor<R, E, A>,
    input: &Path,
    options: &RedactionOptions,
    output_dir: &Path,
    stats: &mut RedactionStats,
) -> Result<PathBuf>
where
    R: EntityRecognizer,
    E: Embedder,
    A: AddressParser,
    R::Error: Display,
    E::Error: Display,
    A::Error: Display,
{
    let text = fs::read_to_string(input)?;
    let redacted = redactor.redact(&text, options, stats)?;

    let output = output_path(output_dir, input);
    fs::write(&output, redacted)?;
    stats.record_file();

    info!("Redacted {} -> {}", input.display(), output.display());
    Ok(output)
}

/// Process every file in order, logging and skipping failures.
pub fn run_batch<R, E, A>(
    redactor: &Redactor<R, E, A>,
    inputs: &[PathBuf],
    options: &RedactionOptions,
    output_dir: &Path,
    stats: &mut RedactionStats,
) -> BatchSummary
where
    R: EntityRecognizer,
    E: Embedder,
    A: AddressParser,
    R::Error: Display,
    E::Error: Display,
    A::Error: Display,
{
    let mut summary = BatchSummary::default();

    for input in inputs {
        match process_file(redactor, input, options, output_dir, stats) {
            Ok(output) => summary.written.push(output),
            Err(e) => {
                error!("Failed to process {}: {}", input.display(), e);
                summary.failed.push(input.clone());
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_replaces_extension() {
        let out = Path::new("files");
        assert_eq!(
            output_path(out, Path::new("docs/letter.txt")),
            PathBuf::from("files/letter.censored")
        );
        assert_eq!(
            output_path(out, Path::new("notes")),
            PathBuf::from("files/notes.censored")
        );
        assert_eq!(
            output_path(out, Path::new("archive.tar.gz")),
            PathBuf::from("files/archive.tar.censored")
        );
    }

    #[test]
    fn test_expand_inputs_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = dir.path().join("*.txt").display().to_string();
        assert!(matches!(
            expand_inputs(&[pattern]),
            Err(CliError::NoInputFiles(_))
        ));
    }

    #[test]
    fn test_expand_inputs_invalid_pattern() {
        assert!(matches!(
            expand_inputs(&["[".to_string()]),
            Err(CliError::Pattern(_))
        ));
    }

    #[test]
    fn test_expand_inputs_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let pattern = dir.path().join("*.txt").display().to_string();
        let files = expand_inputs(&[pattern]).unwrap();
        assert_eq!(files, vec![dir.path().join("a.txt")]);
    }
}
