//! Partner package entity model.

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

/// A sponsorship package a partner can buy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate)]
pub struct PartnerPackage {
    /// Row identity, assigned by storage.
    #[serde(default)]
    pub id: i64,
    /// Package title.
    #[sqlx(json)]
    #[validate(custom(function = "validate_primary_locale"))]
    pub title: LocalizedText,
    /// What the package includes.
    #[sqlx(json)]
    #[serde(default)]
    pub description: LocalizedText,
    /// Package category, used by the `category` filter.
    #[validate(length(min = 1, max = 64))]
    pub category: String,
    /// Price in whole currency units; `None` means "on request".
    #[validate(range(min = 0))]
    pub price: Option<i64>,
    /// Manual position in lists.
    #[serde(default)]
    pub sort_order: i32,
    /// Whether the package is offered publicly.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Creation timestamp.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Resource for PartnerPackage {
    fn to_resource(&self, presentation: &Presentation) -> Value {
        json!({
            "id": self.id,
            "title": presentation.text(&self.title),
            "description": presentation.text(&self.description),
            "category": self.category,
            "price": self.price,
            "sort_order": self.sort_order,
            "is_active": self.is_active,
            "created_at": self.created_at,
            "updated_at": self.updated_at,
        })
    }
}

impl Content for PartnerPackage {
    const TABLE: &'static str = "partner_packages";
    const SEGMENT: &'static str = "partner-packages";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "category",
        "price",
        "sort_order",
        "is_active",
    ];

    content_identity!();

    fn column(&self, name: &str) -> Option<ColumnValue> {
        let value = match name {
            "title" => ColumnValue::Localized(self.title.clone()),
            "description" => ColumnValue::Localized(self.description.clone()),
            "category" => ColumnValue::Text(Some(self.category.clone())),
            "price" => ColumnValue::BigInt(self.price),
            "sort_order" => ColumnValue::Int(Some(self.sort_order)),
            "is_active" => ColumnValue::Bool(self.is_active),
            _ => return identity_column(name, self.id, self.created_at, self.updated_at),
        };
        Some(value)
    }

    fn listing() -> ListingProfile {
        ListingProfile::new(
            EntitySearchSpec::new(FieldRef::plain("sort_order"), SortDirection::Asc)
                .searchable([FieldRef::localized("title"), FieldRef::localized("description")])
                .sortable([FieldRef::localized("title"), FieldRef::plain("price")]),
            FilterRegistry::new().register("category", predicates::text_equals("category")),
        )
    }

    fn public_scope() -> Option<Condition> {
        active_only()
    }
}
