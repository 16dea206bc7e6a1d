//! Named entities proposed by an external recognizer

use crate::span::Span;
use std::fmt;

/// Entity category as reported by the recognizer
///
/// Only the labels the detectors act on get their own variant; anything else
/// is carried through verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    /// A person's name
    Person,
    /// A calendar date or period
    Date,
    /// Geopolitical entity (country, city, state)
    Gpe,
    /// Non-GPE location (mountain range, body of water)
    Loc,
    /// Facility (building, airport, highway)
    Fac,
    /// Any other label the recognizer emits
    Other(String),
}

impl EntityLabel {
    /// Parse a recognizer label such as `"PERSON"` or `"GPE"`
    ///
    /// Matching is case-insensitive; unknown labels become `Other`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "PERSON" | "PER" => EntityLabel::Person,
            "DATE" => EntityLabel::Date,
            "GPE" => EntityLabel::Gpe,
            "LOC" => EntityLabel::Loc,
            "FAC" => EntityLabel::Fac,
            other => EntityLabel::Other(other.to_string()),
        }
    }

    /// Canonical upper-case label
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Date => "DATE",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Fac => "FAC",
            EntityLabel::Other(label) => label,
        }
    }

    /// GPE, LOC and FAC are the location-class labels used for addresses
    pub fn is_location(&self) -> bool {
        matches!(self, EntityLabel::Gpe | EntityLabel::Loc | EntityLabel::Fac)
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled span
///
/// Detectors either accept an entity outright or ignore it; there is no
/// confidence score and no partial redaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    /// Category reported by the recognizer
    pub label: EntityLabel,
    /// Location in the original text (byte offsets)
    pub span: Span,
}

impl Entity {
    /// Create a new entity
    pub fn new(label: EntityLabel, span: Span) -> Self {
        Self { label, span }
    }

    /// Convenience constructor from raw offsets; `None` if the range is empty
    pub fn from_offsets(label: EntityLabel, start: usize, end: usize) -> Option<Self> {
        Span::new(start, end).map(|span| Self { label, span })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse() {
        assert_eq!(EntityLabel::parse("PERSON"), EntityLabel::Person);
        assert_eq!(EntityLabel::parse("person"), EntityLabel::Person);
        assert_eq!(EntityLabel::parse("GPE"), EntityLabel::Gpe);
        assert_eq!(
            EntityLabel::parse("ORG"),
            EntityLabel::Other("ORG".to_string())
        );
    }

    #[test]
    fn test_location_labels() {
        assert!(EntityLabel::Gpe.is_location());
        assert!(EntityLabel::Loc.is_location());
        assert!(EntityLabel::Fac.is_location());
        assert!(!EntityLabel::Person.is_location());
        assert!(!EntityLabel::Other("NORP".into()).is_location());
    }

    #[test]
    fn test_label_round_trip() {
        for label in ["PERSON", "DATE", "GPE", "LOC", "FAC", "MONEY"] {
            assert_eq!(EntityLabel::parse(label).as_str(), label);
        }
    }

    #[test]
    fn test_entity_from_offsets() {
        assert!(Entity::from_offsets(EntityLabel::Person, 0, 10).is_some());
        assert!(Entity::from_offsets(EntityLabel::Person, 10, 10).is_none());
    }
}
