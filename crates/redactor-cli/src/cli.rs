//! Command-line argument parsing.

use crate::error::{self, CliError};
use clap::Parser;
use redactor_engine::RedactionOptions;
use std::convert::Infallible;
use std::path::PathBuf;
use std::str::FromStr;

/// Redactor - Obscure names, dates, phone numbers, addresses and concepts in
/// plain-text files.
#[derive(Debug, Parser)]
#[command(name = "redactor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Glob pattern selecting input files (repeatable)
    #[arg(long, required = true, value_name = "GLOB")]
    pub input: Vec<String>,

    /// Redact person names and e-mail local parts
    #[arg(long)]
    pub names: bool,

    /// Redact dates
    #[arg(long)]
    pub dates: bool,

    /// Redact phone numbers
    #[arg(long)]
    pub phones: bool,

    /// Redact postal addresses
    #[arg(long)]
    pub address: bool,

    /// Redact every line related to this concept (repeatable)
    #[arg(long, value_name = "PHRASE")]
    pub concept: Vec<String>,

    /// Directory that receives the .censored files
    #[arg(long, default_value = "files")]
    pub output: PathBuf,

    /// Where to write the statistics report: stdout, stderr or a file path
    #[arg(long, value_name = "TARGET")]
    pub stats: Option<StatsTarget>,

    /// Configuration file path
    #[arg(short, long, env = "REDACTOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Redaction options selected by the flags
    ///
    /// Concept phrases are taken verbatim.
    pub fn options(&self) -> RedactionOptions {
        RedactionOptions {
            names: self.names,
            dates: self.dates,
            phones: self.phones,
            address: self.address,
            concepts: self.concept.clone(),
        }
    }

    /// Redaction options, rejecting a run that would redact nothing
    pub fn validated_options(&self) -> error::Result<RedactionOptions> {
        let options = self.options();
        if !options.any_enabled() {
            return Err(CliError::InvalidInput(
                "nothing to redact: pass at least one of --names, --dates, --phones, --address or --concept".into(),
            ));
        }
        Ok(options)
    }
}

/// Destination of the statistics report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsTarget {
    /// Standard output
    Stdout,
    /// Standard error
    Stderr,
    /// A file, created or truncated
    File(PathBuf),
}

impl FromStr for StatsTarget {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "stdout" => StatsTarget::Stdout,
            "stderr" => StatsTarget::Stderr,
            path => StatsTarget::File(PathBuf::from(path)),
        })
    }
}
