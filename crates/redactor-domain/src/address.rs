//! Postal addresses rendered by an address parser

/// A postal address found by an [`AddressParser`](crate::traits::AddressParser)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    /// Canonical rendering of the address
    ///
    /// The address detector looks this string up verbatim in the source
    /// text; a rendering that normalizes whitespace or punctuation will not
    /// be found and is dropped.
    pub full_address: String,
    /// ISO 3166-1 alpha-2 code of the country the parser ran for
    pub country: String,
}

impl ParsedAddress {
    /// Create a new parsed address
    pub fn new(full_address: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            full_address: full_address.into(),
            country: country.into(),
        }
    }
}
