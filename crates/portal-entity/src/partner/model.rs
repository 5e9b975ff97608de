//! Partner entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sqlx::FromRow;
use validator::Validate;

use portal_core::query::{
    Condition, EntitySearchSpec, FieldRef, FilterRegistry, ListingProfile, predicates,
};
use portal_core::traits::{Content, Presentation, Resource};
use portal_core::types::{ColumnValue, LocalizedText, SortDirection, validate_primary_locale};

use crate::common::{active_only, default_true, identity_column};

/// A partner or sponsor organization.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate)]
pub struct Partner {
    #[serde(default)]
    pub id: i64,
    /// Organization name.
    #[sqlx(json)]
    #[validate(custom(function = "validate_primary_locale"))]
    pub name: LocalizedText,
    #[sqlx(json)]
    #[serde(default)]
    pub description: LocalizedText,
    /// Partnership tier (`general`, `official`, `media`, ...).
    #[validate(length(min = 1, max = 64))]
    pub category: String,
    #[validate(url)]
    pub logo_url: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Resource for Partner {
    fn to_resource(&self, presentation: &Presentation) -> Value {
        json!({
            "id": self.id,
            "name": presentation.text(&self.name),
            "description": presentation.text(&self.description),
            "category": self.category,
            "logo_url": self.logo_url,
            "website": self.website,
            "sort_order": self.sort_order,
            "is_active": self.is_active,
            "created_at": self.created_at,
            "updated_at": self.updated_at,
        })
    }
}

impl Content for Partner {
    const TABLE: &'static str = "partners";
    const SEGMENT: &'static str = "partners";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "description",
        "category",
        "logo_url",
        "website",
        "sort_order",
        "is_active",
    ];

    content_identity!();

    fn column(&self, name: &str) -> Option<ColumnValue> {
        let value = match name {
            "name" => ColumnValue::Localized(self.name.clone()),
            "description" => ColumnValue::Localized(self.description.clone()),
            "category" => ColumnValue::Text(Some(self.category.clone())),
            "logo_url" => ColumnValue::Text(self.logo_url.clone()),
            "website" => ColumnValue::Text(self.website.clone()),
            "sort_order" => ColumnValue::Int(Some(self.sort_order)),
            "is_active" => ColumnValue::Bool(self.is_active),
            _ => return identity_column(name, self.id, self.created_at, self.updated_at),
        };
        Some(value)
    }

    fn listing() -> ListingProfile {
        ListingProfile::new(
            EntitySearchSpec::new(FieldRef::plain("sort_order"), SortDirection::Asc)
                .searchable([FieldRef::localized("name"), FieldRef::localized("description")])
                .sortable([FieldRef::localized("name")]),
            FilterRegistry::new().register("category", predicates::text_equals("category")),
        )
    }

    fn public_scope() -> Option<Condition> {
        active_only()
    }
}
