//! Compiled regular expressions for pattern-based detection
//!
//! All matchers are compiled once by [`PatternLibrary::new`] and are pure
//! functions of the input text afterwards.

use crate::error::RedactorError;
use redactor_domain::Span;
use regex::Regex;

const MONTH: &str = "(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|\
Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";

// Optional country code, area code bare or in parens, then groups joined by
// - . or space. A match never starts on whitespace; the word boundary is only
// required before a bare digit group so that "(" can open a match.
const PHONE: &str = r"(?:(?:\+|\b)\d{1,3}[-.\s]?)?(?:\(\d{1,4}\)|\b\d{1,4})[-.\s]?\d{2,5}(?:[-.\s]?\d{2,4}){1,4}\b";

const EMAIL: &str = r"\b([a-zA-Z0-9._'-]+)@([\w.-]+\.[a-zA-Z]{2,})\b";

const STREET_ADDRESS: &str = r"(?i)\b\d+\s+[A-Za-z\s]+(?:Street|St\.?|Avenue|Ave\.?|Road|Rd\.?|Boulevard|Blvd\.?|Lane|Ln\.?|Drive|Dr\.?|Court|Ct\.?|Circle|Cir\.?|Trail|Trl\.?|Way|Place|Pl\.?|Terrace|Ter\.?|Plaza|Highway|Hwy\.?|Parkway|Pkwy\.?)(?:[,\s]+(?:Suite|Ste\.?|Floor|Fl\.?|Unit|Apt\.?|Apartment|Room|Rm\.?)?\s*[#]?\d*[A-Za-z]?)?\s*[,\s]*(?:[A-Za-z\s]+[,\s]+[A-Z]{2}\s*\d{5}(?:-\d{4})?)?";

const PO_BOX: &str = r"(?i)\b(?:P\.?\s*O\.?\s*Box|PO\s*Box)\s+\d+";

const ZIP_CODE: &str = r"\b[A-Z]{2}\s*\d{5}(?:-\d{4})?\b";

const UNIT: &str = r"(?i)\b(?:Suite|Ste\.?|Floor|Fl\.?|Unit|Apt\.?|Apartment|Room|Rm\.?)\s*[#]?\d+[A-Za-z]?\b";

const ORDINAL_FLOOR: &str = r"(?i)\b\d+(?:st|nd|rd|th)\s+(?:Floor|Fl\.?)";

/// Date formats, most specific first
fn date_pattern() -> String {
    let forms = [
        // 2024-01-31, 2024/01/31, 2024.01.31
        r"\d{4}[-/.]\d{2}[-/.]\d{2}".to_string(),
        // 31-01-2024 or 01-31-2024
        r"\d{2}[-/.]\d{2}[-/.]\d{4}".to_string(),
        // 01-31-24
        r"\d{2}[-/.]\d{2}[-/.]\d{2}".to_string(),
        // 2024年01月31日
        r"\d{4}年\d{2}月\d{2}日".to_string(),
        // 31st December 2024
        format!(r"\d{{1,2}}(?:st|nd|rd|th)?\s{MONTH}\s\d{{4}}"),
        // 2024, December 31
        format!(r"\d{{4}},?\s{MONTH}\s\d{{1,2}}"),
        // December 31, 2024
        format!(r"{MONTH}\s\d{{1,2}}(?:st|nd|rd|th)?,?\s\d{{4}}"),
        // December 2024
        format!(r"{MONTH}\s\d{{4}}"),
    ];
    format!(r"\b(?:{})\b", forms.join("|"))
}

/// Compiled matchers for phones, dates, e-mail addresses and addresses
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    phone: Regex,
    date: Regex,
    email: Regex,
    address: Vec<Regex>,
}

impl PatternLibrary {
    /// Compile every pattern
    pub fn new() -> Result<Self, RedactorError> {
        let address = [STREET_ADDRESS, PO_BOX, ZIP_CODE, UNIT, ORDINAL_FLOOR]
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            phone: Regex::new(PHONE)?,
            date: Regex::new(&date_pattern())?,
            email: Regex::new(EMAIL)?,
            address,
        })
    }

    /// Phone number candidates
    pub fn phones(&self, text: &str) -> Vec<Span> {
        find_spans(&self.phone, text)
    }

    /// Date candidates
    pub fn dates(&self, text: &str) -> Vec<Span> {
        find_spans(&self.date, text)
    }

    /// E-mail addresses
    pub fn emails(&self, text: &str) -> Vec<Span> {
        find_spans(&self.email, text)
    }

    /// The e-mail matcher itself, for in-place rewriting
    pub fn email_regex(&self) -> &Regex {
        &self.email
    }

    /// Matches of every address pattern, pattern by pattern
    ///
    /// Different patterns may report the same or overlapping ranges.
    pub fn address_candidates(&self, text: &str) -> Vec<Span> {
        self.address
            .iter()
            .flat_map(|re| find_spans(re, text))
            .collect()
    }

    /// True if any address pattern matches somewhere in `text`
    pub fn matches_any_address(&self, text: &str) -> bool {
        self.address.iter().any(|re| re.is_match(text))
    }
}

fn find_spans(re: &Regex, text: &str) -> Vec<Span> {
    re.find_iter(text)
        .filter_map(|m| Span::new(m.start(), m.end()))
        .collect()
}
