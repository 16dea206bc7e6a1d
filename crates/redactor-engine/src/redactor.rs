//! Core Redactor implementation

use crate::config::{EngineConfig, RedactionOptions};
use crate::detectors::{addresses, concepts, dates, names, phones};
use crate::error::RedactorError;
use crate::patterns::PatternLibrary;
use crate::postal::PostalParser;
use crate::reconcile::RedactionPlan;
use crate::stats::RedactionStats;
use redactor_domain::traits::{AddressParser, Embedder, EntityRecognizer};
use redactor_domain::{Entity, Span};
use std::fmt::Display;
use tracing::{debug, warn};

/// Detects sensitive spans in a document and renders the redacted copy
///
/// The recognizer and embedder are optional. Without a recognizer no
/// entities are proposed; without an embedder concepts match only by
/// substring.
pub struct Redactor<R, E, A = PostalParser> {
    recognizer: Option<R>,
    embedder: Option<E>,
    address_parser: A,
    patterns: PatternLibrary,
    config: EngineConfig,
}

impl<R, E> Redactor<R, E, PostalParser>
where
    R: EntityRecognizer,
    E: Embedder,
    R::Error: Display,
    E::Error: Display,
{
    /// Create a Redactor using the built-in postal parser
    pub fn new(
        recognizer: Option<R>,
        embedder: Option<E>,
        config: EngineConfig,
    ) -> Result<Self, RedactorError> {
        Self::with_address_parser(recognizer, embedder, PostalParser::new()?, config)
    }
}

impl<R, E, A> Redactor<R, E, A>
where
    R: EntityRecognizer,
    E: Embedder,
    A: AddressParser,
    R::Error: Display,
    E::Error: Display,
    A::Error: Display,
{
    /// Create a Redactor with a custom address parser
    pub fn with_address_parser(
        recognizer: Option<R>,
        embedder: Option<E>,
        address_parser: A,
        config: EngineConfig,
    ) -> Result<Self, RedactorError> {
        config.validate().map_err(RedactorError::Config)?;

        Ok(Self {
            recognizer,
            embedder,
            address_parser,
            patterns: PatternLibrary::new()?,
            config,
        })
    }

    /// Run the entity recognizer over `text`
    ///
    /// Entities whose spans do not fit `text` are dropped.
    pub fn recognize(&self, text: &str) -> Result<Vec<Entity>, RedactorError> {
        let Some(recognizer) = &self.recognizer else {
            return Ok(Vec::new());
        };

        let entities = recognizer
            .recognize(text)
            .map_err(|e| RedactorError::Recognizer(e.to_string()))?;

        Ok(entities
            .into_iter()
            .filter(|entity| {
                let fits = entity.span.slice(text).is_some();
                if !fits {
                    warn!("Dropping {} entity at {} outside the text", entity.label, entity.span);
                }
                fits
            })
            .collect())
    }

    /// Raw spans from every enabled category, before reconciliation
    ///
    /// Counts are recorded in `stats` as detectors run and are not rolled
    /// back if a later detector fails.
    pub fn detect(
        &self,
        text: &str,
        options: &RedactionOptions,
        stats: &mut RedactionStats,
    ) -> Result<Vec<Span>, RedactorError> {
        let entities = if options.needs_entities() {
            self.recognize(text)?
        } else {
            Vec::new()
        };
        debug!("Recognized {} entities", entities.len());

        let mut spans = Vec::new();

        if options.names {
            let found = names::detect(text, &entities, &self.patterns, stats);
            debug!("Names: {} spans", found.len());
            spans.extend(found);
        }

        if options.dates {
            let found = dates::detect(text, &entities, &self.patterns, stats);
            debug!("Dates: {} spans", found.len());
            spans.extend(found);
        }

        if options.phones {
            let found = phones::detect(text, &self.patterns, stats);
            debug!("Phones: {} spans", found.len());
            spans.extend(found);
        }

        if options.address {
            let found = addresses::detect(
                text,
                &entities,
                &self.patterns,
                &self.address_parser,
                &self.config,
                stats,
            )?;
            debug!("Addresses: {} spans", found.len());
            spans.extend(found);
        }

        if !options.concepts.is_empty() {
            let found = concepts::detect(
                text,
                &options.concepts,
                self.embedder.as_ref(),
                self.config.similarity_threshold,
                stats,
            );
            debug!("Concepts: {} spans", found.len());
            spans.extend(found);
        }

        Ok(spans)
    }

    /// Detect and reconcile spans into a plan for `text`
    pub fn plan(
        &self,
        text: &str,
        options: &RedactionOptions,
        stats: &mut RedactionStats,
    ) -> Result<RedactionPlan, RedactorError> {
        let spans = self.detect(text, options, stats)?;
        let raw = spans.len();
        let plan = RedactionPlan::from_spans(spans);
        debug!("Plan keeps {} of {} spans", plan.len(), raw);
        Ok(plan)
    }

    /// Redact `text`, returning the rendered copy
    ///
    /// # Examples
    ///
    /// ```
    /// use redactor_engine::{EngineConfig, RedactionOptions, RedactionStats, Redactor};
    /// use redactor_models::{MockEmbedder, MockRecognizer};
    ///
    /// let redactor: Redactor<MockRecognizer, MockEmbedder> =
    ///     Redactor::new(None, None, EngineConfig::default()).unwrap();
    /// let options = RedactionOptions { phones: true, ..Default::default() };
    /// let mut stats = RedactionStats::new();
    ///
    /// let output = redactor.redact("Call 123-456-7890", &options, &mut stats).unwrap();
    /// assert_eq!(output, "Call ████████████");
    /// assert_eq!(stats.phones_count, 1);
    /// ```
    pub fn redact(
        &self,
        text: &str,
        options: &RedactionOptions,
        stats: &mut RedactionStats,
    ) -> Result<String, RedactorError> {
        let plan = self.plan(text, options, stats)?;
        Ok(plan.apply(text, self.config.redaction_char))
    }
}
