//! Postal addresses
//!
//! Three independent signals, each counted per span:
//!
//! 1. Address pattern matches, kept only when an indicator keyword appears
//!    near them
//! 2. Location entities, kept only when an address pattern matches near them
//! 3. Addresses found by an [`AddressParser`], located verbatim in the text

use super::context_window;
use crate::config::EngineConfig;
use crate::error::RedactorError;
use crate::patterns::PatternLibrary;
use crate::stats::RedactionStats;
use redactor_domain::traits::AddressParser;
use redactor_domain::{Entity, Span};
use std::fmt::Display;
use tracing::debug;

/// Spans from all three address signals
///
/// Fails only if the address parser fails.
pub fn detect<A>(
    text: &str,
    entities: &[Entity],
    patterns: &PatternLibrary,
    parser: &A,
    config: &EngineConfig,
    stats: &mut RedactionStats,
) -> Result<Vec<Span>, RedactorError>
where
    A: AddressParser,
    A::Error: Display,
{
    let mut spans = pattern_spans(text, patterns, config);
    spans.extend(entity_spans(text, entities, patterns, config));
    spans.extend(parser_spans(text, parser, config)?);

    for _ in &spans {
        stats.record_address();
    }
    Ok(spans)
}

fn pattern_spans(text: &str, patterns: &PatternLibrary, config: &EngineConfig) -> Vec<Span> {
    patterns
        .address_candidates(text)
        .into_iter()
        .filter(|span| {
            let window = context_window(text, *span, config.context_window).to_lowercase();
            config
                .address_indicators
                .iter()
                .any(|keyword| window.contains(keyword.to_lowercase().as_str()))
        })
        .collect()
}

fn entity_spans(
    text: &str,
    entities: &[Entity],
    patterns: &PatternLibrary,
    config: &EngineConfig,
) -> Vec<Span> {
    entities
        .iter()
        .filter(|e| e.label.is_location())
        .filter(|e| {
            patterns.matches_any_address(context_window(text, e.span, config.context_window))
        })
        .map(|e| e.span)
        .collect()
}

fn parser_spans<A>(text: &str, parser: &A, config: &EngineConfig) -> Result<Vec<Span>, RedactorError>
where
    A: AddressParser,
    A::Error: Display,
{
    let mut spans = Vec::new();

    for country in &config.postal_countries {
        let parsed = parser
            .parse(text, country)
            .map_err(|e| RedactorError::AddressParser(format!("{}: {}", country, e)))?;

        for address in parsed {
            // Renderings that differ from the source are dropped silently
            let Some(start) = text.find(address.full_address.as_str()) else {
                continue;
            };
            if let Some(span) = Span::new(start, start + address.full_address.len()) {
                spans.push(span);
            }
        }
        debug!("Postal parser pass for {} done ({} spans so far)", country, spans.len());
    }

    Ok(spans)
}
