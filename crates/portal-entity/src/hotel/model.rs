//! Hotel entity model.

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

/// A hotel listed for delegates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate)]
pub struct Hotel {
    /// Row identity, assigned by storage.
    #[serde(default)]
    pub id: i64,
    /// Hotel name.
    #[sqlx(json)]
    #[validate(custom(function = "validate_primary_locale"))]
    pub name: LocalizedText,
    /// Street address.
    #[sqlx(json)]
    #[serde(default)]
    pub address: LocalizedText,
    /// Description.
    #[sqlx(json)]
    #[serde(default)]
    pub description: LocalizedText,
    /// Listing category (e.g. `recommended`), used by the `category` filter.
    #[validate(length(min = 1, max = 64))]
    pub category: String,
    /// Star rating.
    #[validate(range(min = 1, max = 5))]
    pub stars: Option<i32>,
    /// Lowest nightly price.
    #[validate(range(min = 0))]
    pub price_from: Option<i32>,
    /// Hotel website.
    #[validate(url)]
    pub website: Option<String>,
    /// Photo URL.
    #[validate(url)]
    pub image_url: Option<String>,
    /// Manual position in lists.
    #[serde(default)]
    pub sort_order: i32,
    /// Whether the hotel is listed publicly.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Creation timestamp.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Resource for Hotel {
    fn to_resource(&self, presentation: &Presentation) -> Value {
        json!({
            "id": self.id,
            "name": presentation.text(&self.name),
            "address": presentation.text(&self.address),
            "description": presentation.text(&self.description),
            "category": self.category,
            "stars": self.stars,
            "price_from": self.price_from,
            "website": self.website,
            "image_url": self.image_url,
            "sort_order": self.sort_order,
            "is_active": self.is_active,
            "created_at": self.created_at,
            "updated_at": self.updated_at,
        })
    }
}

impl Content for Hotel {
    const TABLE: &'static str = "hotels";
    const SEGMENT: &'static str = "hotels";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "address",
        "description",
        "category",
        "stars",
        "price_from",
        "website",
        "image_url",
        "sort_order",
        "is_active",
    ];

    content_identity!();

    fn column(&self, name: &str) -> Option<ColumnValue> {
        let value = match name {
            "name" => ColumnValue::Localized(self.name.clone()),
            "address" => ColumnValue::Localized(self.address.clone()),
            "description" => ColumnValue::Localized(self.description.clone()),
            "category" => ColumnValue::Text(Some(self.category.clone())),
            "stars" => ColumnValue::Int(self.stars),
            "price_from" => ColumnValue::Int(self.price_from),
            "website" => ColumnValue::Text(self.website.clone()),
            "image_url" => ColumnValue::Text(self.image_url.clone()),
            "sort_order" => ColumnValue::Int(Some(self.sort_order)),
            "is_active" => ColumnValue::Bool(self.is_active),
            _ => return identity_column(name, self.id, self.created_at, self.updated_at),
        };
        Some(value)
    }

    fn listing() -> ListingProfile {
        ListingProfile::new(
            EntitySearchSpec::new(FieldRef::plain("sort_order"), SortDirection::Asc)
                .searchable([
                    FieldRef::localized("name"),
                    FieldRef::localized("address"),
                    FieldRef::localized("description"),
                ])
                .sortable([
                    FieldRef::localized("name"),
                    FieldRef::plain("stars"),
                    FieldRef::plain("price_from"),
                ]),
            FilterRegistry::new().register("category", predicates::text_equals("category")),
        )
    }

    fn public_scope() -> Option<Condition> {
        active_only()
    }
}
