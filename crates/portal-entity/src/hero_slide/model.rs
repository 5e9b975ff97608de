//! Hero slide entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sqlx::FromRow;
use validator::Validate;

use portal_core::query::{Condition, EntitySearchSpec, FieldRef, FilterRegistry, ListingProfile};
use portal_core::traits::{Content, Presentation, Resource};
use portal_core::types::{ColumnValue, LocalizedText, SortDirection, validate_primary_locale};

use crate::common::{active_only, default_true, identity_column};

/// One slide of the home page carousel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate)]
pub struct HeroSlide {
    #[serde(default)]
    pub id: i64,
    #[sqlx(json)]
    #[validate(custom(function = "validate_primary_locale"))]
    pub title: LocalizedText,
    #[sqlx(json)]
    #[serde(default)]
    pub subtitle: LocalizedText,
    #[validate(url)]
    pub image_url: Option<String>,
    /// Call-to-action target; may be a site-relative path.
    #[validate(length(max = 2048))]
    pub link_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Resource for HeroSlide {
    fn to_resource(&self, presentation: &Presentation) -> Value {
        json!({
            "id": self.id,
            "title": presentation.text(&self.title),
            "subtitle": presentation.text(&self.subtitle),
            "image_url": self.image_url,
            "link_url": self.link_url,
            "sort_order": self.sort_order,
            "is_active": self.is_active,
            "created_at": self.created_at,
            "updated_at": self.updated_at,
        })
    }
}

impl Content for HeroSlide {
    const TABLE: &'static str = "hero_slides";
    const SEGMENT: &'static str = "hero-slides";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "subtitle",
        "image_url",
        "link_url",
        "sort_order",
        "is_active",
    ];

    content_identity!();

    fn column(&self, name: &str) -> Option<ColumnValue> {
        let value = match name {
            "title" => ColumnValue::Localized(self.title.clone()),
            "subtitle" => ColumnValue::Localized(self.subtitle.clone()),
            "image_url" => ColumnValue::Text(self.image_url.clone()),
            "link_url" => ColumnValue::Text(self.link_url.clone()),
            "sort_order" => ColumnValue::Int(Some(self.sort_order)),
            "is_active" => ColumnValue::Bool(self.is_active),
            _ => return identity_column(name, self.id, self.created_at, self.updated_at),
        };
        Some(value)
    }

    // Slides are not searchable.
    fn listing() -> ListingProfile {
        ListingProfile::new(
            EntitySearchSpec::new(FieldRef::plain("sort_order"), SortDirection::Asc),
            FilterRegistry::new(),
        )
    }

    fn public_scope() -> Option<Condition> {
        active_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_searchable_fields() {
        assert!(HeroSlide::listing().spec().searchable_fields().is_empty());
    }
}
