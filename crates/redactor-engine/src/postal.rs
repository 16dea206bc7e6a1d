//! Built-in postal-address parser
//!
//! A regular-expression parser for street addresses in the United States,
//! Canada and Great Britain. Matches are rendered verbatim, so every parsed
//! address can be found again in the source text.

use crate::error::RedactorError;
use redactor_domain::traits::AddressParser;
use redactor_domain::ParsedAddress;
use regex::Regex;

const STREET_TYPES: &str = "(?i:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr|\
Court|Ct|Way|Place|Pl|Terrace|Ter|Parkway|Pkwy|Highway|Hwy|Circle|Cir|Close|Crescent|Square|Row)";

const UNIT: &str = r"(?:,?\s+(?i:Suite|Ste|Apt|Apartment|Unit|Floor|Fl|Room|Rm)\.?\s*#?[A-Za-z0-9-]+)?";

// Street number, street name words, street type, optional unit
fn street_line() -> String {
    format!(r"\b\d+[A-Za-z]?\s+(?:[A-Za-z0-9.'-]+\s+)*?{STREET_TYPES}\b\.?{UNIT}")
}

const CITY: &str = r",?\s+[A-Za-z][A-Za-z .'-]*?,?\s+";

const US_TAIL: &str = r"[A-Z]{2}\s+\d{5}(?:-\d{4})?\b";

const CA_TAIL: &str = r"(?:AB|BC|MB|NB|NL|NS|NT|NU|ON|PE|QC|SK|YT)\s+[A-Z]\d[A-Z]\s?\d[A-Z]\d\b";

const GB_TAIL: &str = r"[A-Z]{1,2}\d[A-Z\d]?\s*\d[A-Z]{2}\b";

/// Regex-based [`AddressParser`] for US, CA and GB
#[derive(Debug, Clone)]
pub struct PostalParser {
    us: Regex,
    ca: Regex,
    gb: Regex,
}

impl PostalParser {
    /// Compile the per-country patterns
    pub fn new() -> Result<Self, RedactorError> {
        let street = street_line();
        Ok(Self {
            us: Regex::new(&format!("{street}{CITY}{US_TAIL}"))?,
            ca: Regex::new(&format!("{street}{CITY}{CA_TAIL}"))?,
            gb: Regex::new(&format!("{street}{CITY}{GB_TAIL}"))?,
        })
    }

    fn pattern_for(&self, country: &str) -> Option<&Regex> {
        match country.to_ascii_uppercase().as_str() {
            "US" => Some(&self.us),
            "CA" => Some(&self.ca),
            "GB" | "UK" => Some(&self.gb),
            _ => None,
        }
    }
}

impl AddressParser for PostalParser {
    type Error = RedactorError;

    fn parse(&self, text: &str, country: &str) -> Result<Vec<ParsedAddress>, Self::Error> {
        let pattern = self.pattern_for(country).ok_or_else(|| {
            RedactorError::AddressParser(format!("Unsupported country code: {}", country))
        })?;

        Ok(pattern
            .find_iter(text)
            .map(|m| ParsedAddress::new(m.as_str(), country))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, country: &str) -> Vec<String> {
        PostalParser::new()
            .unwrap()
            .parse(text, country)
            .unwrap()
            .into_iter()
            .map(|a| a.full_address)
            .collect()
    }

    #[test]
    fn test_us_address() {
        let text = "Our office: 123 Main Street, Suite 100, New York, NY 10001. Visit us.";
        assert_eq!(
            parse(text, "US"),
            vec!["123 Main Street, Suite 100, New York, NY 10001"]
        );
    }

    #[test]
    fn test_us_zip_plus_four() {
        let text = "1600 Pennsylvania Ave, Washington, DC 20500-0003";
        assert_eq!(parse(text, "US"), vec![text]);
    }

    #[test]
    fn test_ca_address() {
        let text = "Ship to 24 Sussex Drive, Ottawa, ON K1M 1M4 by Friday";
        assert_eq!(parse(text, "CA"), vec!["24 Sussex Drive, Ottawa, ON K1M 1M4"]);
        assert!(parse(text, "US").is_empty());
    }

    #[test]
    fn test_gb_address() {
        let text = "Write to 221B Baker Street, London NW1 6XE.";
        assert_eq!(parse(text, "GB"), vec!["221B Baker Street, London NW1 6XE"]);
    }

    #[test]
    fn test_country_code_case_insensitive() {
        let text = "24 Sussex Drive, Ottawa, ON K1M 1M4";
        assert_eq!(parse(text, "ca").len(), 1);
    }

    #[test]
    fn test_unsupported_country() {
        let parser = PostalParser::new().unwrap();
        let result = parser.parse("anything", "FR");
        assert!(matches!(result, Err(RedactorError::AddressParser(_))));
    }

    #[test]
    fn test_rendering_is_verbatim() {
        let text = "Home:  7   Elm  Rd ,  Springfield ,  IL   62704";
        for address in parse(text, "US") {
            assert!(text.contains(&address));
        }
    }

    #[test]
    fn test_known_countries_accept_empty_text() {
        let parser = PostalParser::new().unwrap();
        for country in ["US", "CA", "GB", "UK"] {
            assert!(parser.parse("", country).unwrap().is_empty());
        }
    }
}
