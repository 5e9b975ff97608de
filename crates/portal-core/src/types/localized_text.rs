//! Multilingual text values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

use super::locale::Locale;

/// A piece of text recorded in zero or more locales.
///
/// Stored as a locale-code → value map (a JSON object column). Values are
/// never resolved in place: [`LocalizedText::resolve`] produces a new
/// string, so the same entity can be rendered for several locales.
/// Codes outside [`Locale::ALL`] found in stored data are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    /// Create an empty value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a value from `(locale, text)` pairs.
    pub fn from_pairs<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Locale, V)>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(locale, value)| (locale.code().to_string(), value.into()))
                .collect(),
        )
    }

    /// Shorthand for a value carrying only the primary locale.
    pub fn primary(value: impl Into<String>) -> Self {
        Self::from_pairs([(Locale::PRIMARY, value)])
    }

    /// Return a copy with `locale` set to `value`. The receiver is untouched.
    pub fn with_locale(&self, locale: Locale, value: impl Into<String>) -> Self {
        let mut values = self.0.clone();
        values.insert(locale.code().to_string(), value.into());
        Self(values)
    }

    /// The stored value for `locale`, if present and non-empty.
    pub fn get(&self, locale: Locale) -> Option<&str> {
        self.0
            .get(locale.code())
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Resolve to a single string for `locale`.
    ///
    /// Falls back to the primary locale, then to English, then to `""`.
    /// Never fails: a missing translation is expected, not exceptional.
    pub fn resolve(&self, locale: Locale) -> String {
        self.get(locale)
            .or_else(|| self.get(Locale::Ru))
            .or_else(|| self.get(Locale::En))
            .unwrap_or_default()
            .to_string()
    }

    /// Every stored value, across all locales.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// Whether no locale carries a non-empty value.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// Case-insensitive containment against every locale value.
    ///
    /// `needle` must already be lowercased.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.values()
            .any(|value| value.to_lowercase().contains(needle))
    }

    /// The underlying locale map.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

/// Validator hook for required multilingual fields.
///
/// The primary locale must be present and non-empty. Other locales may be
/// missing; they fall back on read until populated.
pub fn validate_primary_locale(text: &LocalizedText) -> Result<(), ValidationError> {
    if text.get(Locale::PRIMARY).is_some() {
        Ok(())
    } else {
        let mut error = ValidationError::new("primary_locale");
        error.message = Some(format!("a non-empty '{}' value is required", Locale::PRIMARY).into());
        Err(error)
    }
}
