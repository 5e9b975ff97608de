//! Award entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sqlx::FromRow;
use validator::Validate;

use portal_core::query::{EntitySearchSpec, FieldRef, FilterRegistry, ListingProfile, predicates};
use portal_core::traits::{Content, Presentation, Resource};
use portal_core::types::{ColumnValue, LocalizedText, SortDirection, validate_primary_locale};

use crate::common::identity_column;

/// An award presented at the assembly. Awards are always public.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate)]
pub struct Award {
    /// Row identity, assigned by storage.
    #[serde(default)]
    pub id: i64,
    /// Award title.
    #[sqlx(json)]
    #[validate(custom(function = "validate_primary_locale"))]
    pub title: LocalizedText,
    /// Citation.
    #[sqlx(json)]
    #[serde(default)]
    pub description: LocalizedText,
    /// Person or organization awarded.
    #[sqlx(json)]
    #[serde(default)]
    pub recipient: LocalizedText,
    /// Year the award was presented.
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
    /// Award type (`medal`, `diploma`, ...), used by the `type` filter.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 64))]
    pub kind: String,
    /// Photo URL.
    #[validate(url)]
    pub image_url: Option<String>,
    /// Creation timestamp.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Resource for Award {
    fn to_resource(&self, presentation: &Presentation) -> Value {
        json!({
            "id": self.id,
            "title": presentation.text(&self.title),
            "description": presentation.text(&self.description),
            "recipient": presentation.text(&self.recipient),
            "year": self.year,
            "type": self.kind,
            "image_url": self.image_url,
            "created_at": self.created_at,
            "updated_at": self.updated_at,
        })
    }
}

impl Content for Award {
    const TABLE: &'static str = "awards";
    const SEGMENT: &'static str = "awards";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "recipient",
        "year",
        "type",
        "image_url",
    ];

    content_identity!();

    fn column(&self, name: &str) -> Option<ColumnValue> {
        let value = match name {
            "title" => ColumnValue::Localized(self.title.clone()),
            "description" => ColumnValue::Localized(self.description.clone()),
            "recipient" => ColumnValue::Localized(self.recipient.clone()),
            "year" => ColumnValue::Int(Some(self.year)),
            "type" => ColumnValue::Text(Some(self.kind.clone())),
            "image_url" => ColumnValue::Text(self.image_url.clone()),
            _ => return identity_column(name, self.id, self.created_at, self.updated_at),
        };
        Some(value)
    }

    fn listing() -> ListingProfile {
        ListingProfile::new(
            EntitySearchSpec::new(FieldRef::plain("year"), SortDirection::Desc)
                .searchable([
                    FieldRef::localized("title"),
                    FieldRef::localized("description"),
                    FieldRef::localized("recipient"),
                ])
                .sortable([FieldRef::localized("title")]),
            FilterRegistry::new()
                .register("year", predicates::integer_equals("year"))
                .register("type", predicates::text_equals("type")),
        )
    }
}
