//! Committee member entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sqlx::FromRow;
use validator::Validate;

use portal_core::query::{Condition, EntitySearchSpec, FieldRef, FilterRegistry, ListingProfile};
use portal_core::traits::{Content, Presentation, Resource};
use portal_core::types::{ColumnValue, LocalizedText, SortDirection, validate_primary_locale};

use crate::common::{active_only, default_true, identity_column};

/// A member of the organizing committee.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate)]
pub struct CommitteeMember {
    #[serde(default)]
    pub id: i64,
    /// Full name.
    #[sqlx(json)]
    #[validate(custom(function = "validate_primary_locale"))]
    pub name: LocalizedText,
    /// Role on the committee.
    #[sqlx(json)]
    #[validate(custom(function = "validate_primary_locale"))]
    pub position: LocalizedText,
    #[sqlx(json)]
    #[serde(default)]
    pub bio: LocalizedText,
    #[validate(url)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Resource for CommitteeMember {
    fn to_resource(&self, presentation: &Presentation) -> Value {
        json!({
            "id": self.id,
            "name": presentation.text(&self.name),
            "position": presentation.text(&self.position),
            "bio": presentation.text(&self.bio),
            "photo_url": self.photo_url,
            "sort_order": self.sort_order,
            "is_active": self.is_active,
            "created_at": self.created_at,
            "updated_at": self.updated_at,
        })
    }
}

impl Content for CommitteeMember {
    const TABLE: &'static str = "committee_members";
    const SEGMENT: &'static str = "committee-members";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "position",
        "bio",
        "photo_url",
        "sort_order",
        "is_active",
    ];

    content_identity!();

    fn column(&self, name: &str) -> Option<ColumnValue> {
        let value = match name {
            "name" => ColumnValue::Localized(self.name.clone()),
            "position" => ColumnValue::Localized(self.position.clone()),
            "bio" => ColumnValue::Localized(self.bio.clone()),
            "photo_url" => ColumnValue::Text(self.photo_url.clone()),
            "sort_order" => ColumnValue::Int(Some(self.sort_order)),
            "is_active" => ColumnValue::Bool(self.is_active),
            _ => return identity_column(name, self.id, self.created_at, self.updated_at),
        };
        Some(value)
    }

    fn listing() -> ListingProfile {
        ListingProfile::new(
            EntitySearchSpec::new(FieldRef::plain("sort_order"), SortDirection::Asc)
                .searchable([FieldRef::localized("name"), FieldRef::localized("position")])
                .sortable([FieldRef::localized("name")]),
            FilterRegistry::new(),
        )
    }

    fn public_scope() -> Option<Condition> {
        active_only()
    }
}
