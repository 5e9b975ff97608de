//! Event entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sqlx::FromRow;
use validator::Validate;

use portal_core::query::{
    Condition, EntitySearchSpec, FieldRef, FilterRegistry, ListingProfile, predicates,
};
use portal_core::traits::{Content, Presentation, Resource};
use portal_core::types::{ColumnValue, LocalizedText, SortDirection, validate_primary_locale};

use crate::common::{identity_column, published_only};

/// A programme event (session, ceremony, excursion).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate)]
pub struct Event {
    /// Row identity, assigned by storage.
    #[serde(default)]
    pub id: i64,
    /// Event title.
    #[sqlx(json)]
    #[validate(custom(function = "validate_primary_locale"))]
    pub title: LocalizedText,
    /// Longer description.
    #[sqlx(json)]
    #[serde(default)]
    pub description: LocalizedText,
    /// Venue.
    #[sqlx(json)]
    #[serde(default)]
    pub location: LocalizedText,
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Free-form tags used by the `tags` filter.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cover image URL.
    #[validate(url)]
    pub image_url: Option<String>,
    /// Whether the event is visible on the public site.
    #[serde(default)]
    pub is_published: bool,
    /// Creation timestamp.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Resource for Event {
    fn to_resource(&self, presentation: &Presentation) -> Value {
        json!({
            "id": self.id,
            "title": presentation.text(&self.title),
            "description": presentation.text(&self.description),
            "location": presentation.text(&self.location),
            "date": self.date,
            "tags": self.tags,
            "image_url": self.image_url,
            "is_published": self.is_published,
            "created_at": self.created_at,
            "updated_at": self.updated_at,
        })
    }
}

impl Content for Event {
    const TABLE: &'static str = "events";
    const SEGMENT: &'static str = "events";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "location",
        "date",
        "tags",
        "image_url",
        "is_published",
    ];

    content_identity!();

    fn column(&self, name: &str) -> Option<ColumnValue> {
        let value = match name {
            "title" => ColumnValue::Localized(self.title.clone()),
            "description" => ColumnValue::Localized(self.description.clone()),
            "location" => ColumnValue::Localized(self.location.clone()),
            "date" => ColumnValue::Date(Some(self.date)),
            "tags" => ColumnValue::Tags(self.tags.clone()),
            "image_url" => ColumnValue::Text(self.image_url.clone()),
            "is_published" => ColumnValue::Bool(self.is_published),
            _ => return identity_column(name, self.id, self.created_at, self.updated_at),
        };
        Some(value)
    }

    fn listing() -> ListingProfile {
        ListingProfile::new(
            EntitySearchSpec::new(FieldRef::plain("date"), SortDirection::Desc)
                .searchable([
                    FieldRef::localized("title"),
                    FieldRef::localized("description"),
                    FieldRef::localized("location"),
                ])
                .sortable([FieldRef::localized("title"), FieldRef::plain("created_at")]),
            FilterRegistry::new()
                .register("date", predicates::date_equals("date"))
                .register("tags", predicates::all_tags("tags")),
        )
    }

    fn public_scope() -> Option<Condition> {
        published_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::types::Locale;

    fn event() -> Event {
        Event {
            id: 3,
            title: LocalizedText::primary("Пленарное заседание").with_locale(Locale::En, "Plenary"),
            description: LocalizedText::new(),
            location: LocalizedText::primary("Большой зал"),
            date: NaiveDate::from_ymd_opt(2025, 7, 1).expect("date"),
            tags: vec!["plenary".into()],
            image_url: None,
            is_published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_public_projection_resolves_locale() {
        let resource = event().to_resource(&Presentation::Localized(Locale::En));
        assert_eq!(resource["title"], "Plenary");
        assert_eq!(resource["location"], "Большой зал");
        assert_eq!(resource["description"], "");
        assert_eq!(resource["date"], "2025-07-01");
    }

    #[test]
    fn test_missing_primary_title_fails_validation() {
        let mut event = event();
        event.title = LocalizedText::new().with_locale(Locale::En, "Plenary");
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_write_columns_follow_declaration() {
        let names: Vec<_> = event().write_columns().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, Event::COLUMNS);
    }
}
