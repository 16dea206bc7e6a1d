//! Redactor CLI library.
//!
//! Argument parsing, configuration loading, the batch loop and the
//! statistics writer behind the `redactor` binary.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use batch::{expand_inputs, output_path, process_file, run_batch, BatchSummary};
pub use cli::{Cli, StatsTarget};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::write_stats;
