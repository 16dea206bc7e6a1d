//! Redactor CLI - redact sensitive spans from plain-text files.

use anyhow::Context;
use clap::Parser;
use redactor_cli::{expand_inputs, run_batch, write_stats, Cli, Config};
use redactor_engine::{RedactionStats, Redactor};
use redactor_models::{HttpEntityRecognizer, OllamaEmbedder};
use std::fs;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = cli.validated_options()?;

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let inputs = expand_inputs(&cli.input)?;

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("creating output directory {}", cli.output.display()))?;

    let recognizer = if config.ner.enabled && options.needs_entities() {
        Some(HttpEntityRecognizer::with_timeout(
            &config.ner.endpoint,
            config.ner.timeout_secs,
        )?)
    } else {
        None
    };

    let embedder = if config.embedding.enabled && !options.concepts.is_empty() {
        Some(OllamaEmbedder::with_timeout(
            &config.embedding.endpoint,
            &config.embedding.model,
            config.embedding.timeout_secs,
        )?)
    } else {
        None
    };

    let redactor = Redactor::new(recognizer, embedder, config.engine)?;

    info!("Processing {} file(s)", inputs.len());
    let mut stats = RedactionStats::new();
    let summary = run_batch(&redactor, &inputs, &options, &cli.output, &mut stats);

    if let Some(target) = &cli.stats {
        if let Err(e) = write_stats(&stats, target) {
            error!("Failed to write statistics: {}", e);
        }
    }

    info!(
        "Done: {} written, {} failed, {} redactions",
        summary.written.len(),
        summary.failed.len(),
        stats.total_redacted()
    );
    for line in stats.summary().lines() {
        info!("{}", line);
    }

    Ok(())
}
