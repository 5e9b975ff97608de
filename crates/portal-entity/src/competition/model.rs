//! Competition entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use portal_core::format::format_date_range;
use portal_core::query::{EntitySearchSpec, FieldRef, FilterRegistry, ListingProfile, predicates};
use portal_core::traits::{Content, Presentation, Resource};
use portal_core::types::{ColumnValue, LocalizedText, SortDirection, validate_primary_locale};

use super::status::CompetitionStatus;
use crate::common::identity_column;

/// A competition run alongside the assembly.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate)]
#[validate(schema(function = "validate_period"))]
pub struct Competition {
    /// Row identity, assigned by storage.
    #[serde(default)]
    pub id: i64,
    /// Competition title.
    #[sqlx(json)]
    #[validate(custom(function = "validate_primary_locale"))]
    pub title: LocalizedText,
    /// Rules and description.
    #[sqlx(json)]
    #[serde(default)]
    pub description: LocalizedText,
    /// First day.
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
    /// Lifecycle status.
    #[sqlx(try_from = "String")]
    #[serde(default)]
    pub status: CompetitionStatus,
    /// Poster URL.
    #[validate(url)]
    pub image_url: Option<String>,
    /// Creation timestamp.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Competition {
    /// Human-readable period, e.g. `01.07. — 30.07.2025 г.`.
    pub fn timeline(&self, presentation: &Presentation) -> String {
        format_date_range(self.start_date, self.end_date, presentation.locale())
    }
}

fn validate_period(competition: &Competition) -> Result<(), ValidationError> {
    if competition.end_date < competition.start_date {
        return Err(ValidationError::new("end_before_start"));
    }
    Ok(())
}

impl Resource for Competition {
    fn to_resource(&self, presentation: &Presentation) -> Value {
        json!({
            "id": self.id,
            "title": presentation.text(&self.title),
            "description": presentation.text(&self.description),
            "start_date": self.start_date,
            "end_date": self.end_date,
            "timeline": self.timeline(presentation),
            "status": self.status,
            "image_url": self.image_url,
            "created_at": self.created_at,
            "updated_at": self.updated_at,
        })
    }
}

impl Content for Competition {
    const TABLE: &'static str = "competitions";
    const SEGMENT: &'static str = "competitions";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "start_date",
        "end_date",
        "status",
        "image_url",
    ];

    content_identity!();

    fn column(&self, name: &str) -> Option<ColumnValue> {
        let value = match name {
            "title" => ColumnValue::Localized(self.title.clone()),
            "description" => ColumnValue::Localized(self.description.clone()),
            "start_date" => ColumnValue::Date(Some(self.start_date)),
            "end_date" => ColumnValue::Date(Some(self.end_date)),
            "status" => ColumnValue::Text(Some(self.status.as_str().to_string())),
            "image_url" => ColumnValue::Text(self.image_url.clone()),
            _ => return identity_column(name, self.id, self.created_at, self.updated_at),
        };
        Some(value)
    }

    fn listing() -> ListingProfile {
        ListingProfile::new(
            EntitySearchSpec::new(FieldRef::plain("start_date"), SortDirection::Desc)
                .searchable([FieldRef::localized("title"), FieldRef::localized("description")])
                .sortable([FieldRef::plain("end_date"), FieldRef::localized("title")]),
            FilterRegistry::new().register(
                "status",
                predicates::one_of("status", CompetitionStatus::VALUES),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::types::Locale;

    fn competition(start: (i32, u32, u32), end: (i32, u32, u32)) -> Competition {
        serde_json::from_value(json!({
            "title": { "ru": "Конкурс молодых учёных" },
            "start_date": NaiveDate::from_ymd_opt(start.0, start.1, start.2),
            "end_date": NaiveDate::from_ymd_opt(end.0, end.1, end.2),
        }))
        .expect("deserialize")
    }

    #[test]
    fn test_timeline_follows_presentation_locale() {
        let c = competition((2025, 7, 1), (2025, 7, 30));
        assert_eq!(
            c.to_resource(&Presentation::Localized(Locale::En))["timeline"],
            "01.07 — 30.07.2025"
        );
        assert_eq!(
            c.to_resource(&Presentation::AllLocales)["timeline"],
            "01.07. — 30.07.2025 г."
        );
    }

    #[test]
    fn test_period_must_not_be_reversed() {
        assert!(competition((2025, 7, 30), (2025, 7, 1)).validate().is_err());
        assert!(competition((2025, 7, 1), (2025, 7, 1)).validate().is_ok());
    }

    #[test]
    fn test_status_defaults_to_active() {
        assert_eq!(
            competition((2025, 1, 1), (2025, 2, 1)).status,
            CompetitionStatus::Active
        );
    }
}
