//! Traits every content entity implements.

use chrono::{DateTime, Utc};
use serde_json::Value;
use validator::Validate;

use crate::query::plan::Condition;
use crate::query::profile::ListingProfile;
use crate::types::filter::ColumnValue;
use crate::types::locale::Locale;
use crate::types::localized_text::LocalizedText;

/// How multilingual fields are rendered in a response.
///
/// Chosen by the route (public vs management), never guessed from data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Public views: each field resolved to one string for the locale.
    Localized(Locale),
    /// Management views: every field as its full locale map.
    AllLocales,
}

impl Presentation {
    /// Render one multilingual field.
    pub fn text(&self, text: &LocalizedText) -> Value {
        match self {
            Self::Localized(locale) => Value::String(text.resolve(*locale)),
            Self::AllLocales => serde_json::to_value(text).unwrap_or(Value::Null),
        }
    }

    /// Locale for derived strings (formatted dates, etc.).
    pub fn locale(&self) -> Locale {
        match self {
            Self::Localized(locale) => *locale,
            Self::AllLocales => Locale::PRIMARY,
        }
    }
}

/// Projection of an entity into its wire representation.
pub trait Resource {
    /// Serialize with multilingual fields rendered per `presentation`.
    fn to_resource(&self, presentation: &Presentation) -> Value;
}

/// A content type served by the generic list/detail machinery.
pub trait Content: Resource + Validate + Clone + Send + Sync + Unpin + 'static {
    /// Storage table name.
    const TABLE: &'static str;

    /// URL segment under `/api` (e.g. `partner-packages`).
    const SEGMENT: &'static str;

    /// Columns written on insert/update, excluding `id` and timestamps.
    const COLUMNS: &'static [&'static str];

    /// Row identity.
    fn id(&self) -> i64;

    /// Creation timestamp, kept across updates.
    fn created_at(&self) -> DateTime<Utc>;

    /// Read a column by name; `None` for unknown names.
    ///
    /// Covers `id`, `created_at` and `updated_at` as well as [`COLUMNS`](Self::COLUMNS).
    fn column(&self, name: &str) -> Option<ColumnValue>;

    /// Overwrite the storage-managed identity and timestamps.
    fn set_identity(&mut self, id: i64, created_at: DateTime<Utc>, updated_at: DateTime<Utc>);

    /// Search, sort and filter declarations for list endpoints.
    fn listing() -> ListingProfile;

    /// Condition a row must satisfy to be publicly visible.
    fn public_scope() -> Option<Condition> {
        None
    }

    /// Add one to the counter column `name` in place.
    ///
    /// Returns `false` when `name` is not a counter of this type.
    fn increment(&mut self, _name: &str) -> bool {
        false
    }

    /// Carry storage-managed counters over from `stored` on update.
    ///
    /// Counters are not part of [`COLUMNS`](Self::COLUMNS), so a client
    /// write never resets them.
    fn retain_counters(&mut self, _stored: &Self) {}

    /// Zero storage-managed counters before a new row is stored.
    fn reset_counters(&mut self) {}

    /// `(column, value)` pairs for a write, in [`COLUMNS`](Self::COLUMNS) order.
    fn write_columns(&self) -> Vec<(&'static str, ColumnValue)> {
        Self::COLUMNS
            .iter()
            .filter_map(|name| self.column(name).map(|value| (*name, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_modes_are_distinct() {
        let text = LocalizedText::primary("Открытие");
        assert_eq!(
            Presentation::Localized(Locale::En).text(&text),
            Value::String("Открытие".into())
        );
        assert_eq!(
            Presentation::AllLocales.text(&text),
            serde_json::json!({ "ru": "Открытие" })
        );
    }
}
