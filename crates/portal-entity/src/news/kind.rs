//! News kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a news entry is a short item or a long-form article.
///
/// Stored as plain text in the `type` column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsKind {
    /// Short news item.
    #[default]
    News,
    /// Long-form article.
    Article,
}

impl NewsKind {
    /// Values accepted by the `type` filter.
    pub const VALUES: &'static [&'static str] = &["news", "article"];

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Article => "article",
        }
    }
}

impl fmt::Display for NewsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NewsKind {
    type Err = portal_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "news" => Ok(Self::News),
            "article" => Ok(Self::Article),
            _ => Err(portal_core::AppError::validation(format!(
                "Invalid news type: '{s}'"
            ))),
        }
    }
}

impl TryFrom<String> for NewsKind {
    type Error = portal_core::AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
