//! Typed values used by query conditions and entity columns.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::localized_text::LocalizedText;

/// A typed comparison operand for an equality condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string value.
    Text(String),
    /// An integer value.
    Integer(i64),
    /// A boolean value.
    Boolean(bool),
    /// A calendar date. Timestamp columns match on their date part.
    Date(NaiveDate),
}

impl FilterValue {
    /// Parse an integer operand. Returns `None` for non-numeric input.
    pub fn integer(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().map(Self::Integer)
    }

    /// Parse a `YYYY-MM-DD` date operand.
    pub fn date(raw: &str) -> Option<Self> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .ok()
            .map(Self::Date)
    }
}

/// A column value read from (or written to) an entity.
///
/// Nullable variants carry `Option` so the storage layer can bind a typed
/// NULL for the column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    /// `TEXT` / `VARCHAR`.
    Text(Option<String>),
    /// `INTEGER`.
    Int(Option<i32>),
    /// `BIGINT`.
    BigInt(Option<i64>),
    /// `BOOLEAN`.
    Bool(bool),
    /// `DATE`.
    Date(Option<NaiveDate>),
    /// `TIMESTAMPTZ`.
    Timestamp(Option<DateTime<Utc>>),
    /// `JSONB` locale map.
    Localized(LocalizedText),
    /// `TEXT[]`.
    Tags(Vec<String>),
}

impl ColumnValue {
    /// Whether this column value satisfies `column = operand`.
    ///
    /// Mirrors SQL semantics: NULL never equals anything and text
    /// comparison is case-sensitive.
    pub fn equals(&self, operand: &FilterValue) -> bool {
        match (self, operand) {
            (Self::Text(Some(v)), FilterValue::Text(o)) => v == o,
            (Self::Int(Some(v)), FilterValue::Integer(o)) => i64::from(*v) == *o,
            (Self::BigInt(Some(v)), FilterValue::Integer(o)) => v == o,
            (Self::Bool(v), FilterValue::Boolean(o)) => v == o,
            (Self::Date(Some(v)), FilterValue::Date(o)) => v == o,
            (Self::Timestamp(Some(v)), FilterValue::Date(o)) => v.date_naive() == *o,
            _ => false,
        }
    }

    /// Case-insensitive containment. `needle` must already be lowercased.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            Self::Text(Some(v)) => v.to_lowercase().contains(needle),
            Self::Localized(text) => text.contains_lowercase(needle),
            Self::Tags(tags) => tags.iter().any(|t| t.to_lowercase().contains(needle)),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operands() {
        assert_eq!(FilterValue::integer(" 2024 "), Some(FilterValue::Integer(2024)));
        assert_eq!(FilterValue::integer("twenty"), None);
        assert!(FilterValue::date("2025-07-01").is_some());
        assert_eq!(FilterValue::date("01.07.2025"), None);
    }

    #[test]
    fn test_equals_mirrors_sql() {
        assert!(ColumnValue::Int(Some(2024)).equals(&FilterValue::Integer(2024)));
        assert!(!ColumnValue::Int(None).equals(&FilterValue::Integer(2024)));
        assert!(!ColumnValue::Text(Some("Recommended".into()))
            .equals(&FilterValue::Text("recommended".into())));
        assert!(!ColumnValue::Bool(true).equals(&FilterValue::Text("true".into())));
    }

    #[test]
    fn test_timestamp_matches_on_date() {
        let at = NaiveDate::from_ymd_opt(2025, 7, 1)
            .and_then(|d| d.and_hms_opt(18, 30, 0))
            .map(|dt| dt.and_utc());
        let value = ColumnValue::Timestamp(at);
        assert!(value.equals(&FilterValue::date("2025-07-01").expect("date")));
        assert!(!value.equals(&FilterValue::date("2025-07-02").expect("date")));
    }
}
