//! # Identifier Newtypes
//!
//! Domain identifiers used when talking to the device registry. Each is a
//! distinct type, so a labeler name cannot be passed where a product code is
//! expected.
//!
//! ## Validation
//!
//! - [`CountryCode`]: exactly two ASCII letters, stored upper-case.
//! - [`ProductCode`]: any non-empty string after trimming. The registry's
//!   classification codes are otherwise treated as opaque.
//! - [`LabelerName`]: any non-empty string after trimming.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// ISO 3166-1 alpha-2 country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, normalizing to upper case.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCountryCode`] unless the trimmed input is
    /// exactly two ASCII letters.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidCountryCode(raw));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Wrap a code taken from the compiled-in country table.
    pub(crate) fn from_table(code: &'static str) -> Self {
        Self(code.to_string())
    }

    /// Access the upper-case code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a raw registry value names this country.
    ///
    /// Registry values are compared after upper-casing; a missing value
    /// never matches.
    pub fn matches(&self, raw: Option<&str>) -> bool {
        raw.is_some_and(|value| value.to_uppercase() == self.0)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Characters with meaning in an openFDA `search` expression.
const SEARCH_SYNTAX: &[char] = &[':', '"', '(', ')', '[', ']', '+', '*'];

/// FDA medical-device product classification code (e.g. `FOZ`, `FMF`).
///
/// The code is spliced into search expressions unquoted, so it must be a
/// single term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductCode(String);

impl ProductCode {
    /// Create a product code from user input.
    ///
    /// Surrounding whitespace is removed; the remainder is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyProductCode`] if nothing remains after
    /// trimming, and [`CoreError::MalformedProductCode`] if the remainder
    /// contains whitespace or one of `: " ( ) [ ] + *`.
    pub fn new(value: impl AsRef<str>) -> Result<Self, CoreError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyProductCode);
        }
        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || SEARCH_SYNTAX.contains(&c))
        {
            return Err(CoreError::MalformedProductCode(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductCode> for String {
    fn from(code: ProductCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name printed on a device's labeling, as reported by the device
/// identification registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LabelerName(String);

impl LabelerName {
    /// Create a labeler name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyLabelerName`] for empty or whitespace-only
    /// input.
    pub fn new(value: impl AsRef<str>) -> Result<Self, CoreError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyLabelerName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LabelerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
