//! News entity model.

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

use super::kind::NewsKind;
use crate::common::{identity_column, published_only};

/// A news item or article.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate)]
pub struct News {
    /// Row identity, assigned by storage.
    #[serde(default)]
    pub id: i64,
    /// Headline.
    #[sqlx(json)]
    #[validate(custom(function = "validate_primary_locale"))]
    pub title: LocalizedText,
    /// Teaser shown in lists.
    #[sqlx(json)]
    #[serde(default)]
    pub excerpt: LocalizedText,
    /// Full body.
    #[sqlx(json)]
    #[serde(default)]
    pub content: LocalizedText,
    /// News item or article.
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type", default)]
    pub kind: NewsKind,
    /// Cover image URL.
    #[validate(url)]
    pub image_url: Option<String>,
    /// Number of public detail views.
    #[serde(default)]
    pub views: i64,
    /// Publication timestamp; unpublished drafts may leave it empty.
    pub published_at: Option<DateTime<Utc>>,
    /// Whether the entry is visible on the public site.
    #[serde(default)]
    pub is_published: bool,
    /// Creation timestamp.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl News {
    /// Column incremented on each public detail view.
    pub const VIEWS_COLUMN: &'static str = "views";
}

impl Resource for News {
    fn to_resource(&self, presentation: &Presentation) -> Value {
        json!({
            "id": self.id,
            "title": presentation.text(&self.title),
            "excerpt": presentation.text(&self.excerpt),
            "content": presentation.text(&self.content),
            "type": self.kind,
            "image_url": self.image_url,
            "views": self.views,
            "published_at": self.published_at,
            "is_published": self.is_published,
            "created_at": self.created_at,
            "updated_at": self.updated_at,
        })
    }
}

impl Content for News {
    const TABLE: &'static str = "news";
    const SEGMENT: &'static str = "news";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "excerpt",
        "content",
        "type",
        "image_url",
        "published_at",
        "is_published",
    ];

    content_identity!();

    fn column(&self, name: &str) -> Option<ColumnValue> {
        let value = match name {
            "title" => ColumnValue::Localized(self.title.clone()),
            "excerpt" => ColumnValue::Localized(self.excerpt.clone()),
            "content" => ColumnValue::Localized(self.content.clone()),
            "type" => ColumnValue::Text(Some(self.kind.as_str().to_string())),
            "image_url" => ColumnValue::Text(self.image_url.clone()),
            "views" => ColumnValue::BigInt(Some(self.views)),
            "published_at" => ColumnValue::Timestamp(self.published_at),
            "is_published" => ColumnValue::Bool(self.is_published),
            _ => return identity_column(name, self.id, self.created_at, self.updated_at),
        };
        Some(value)
    }

    fn increment(&mut self, name: &str) -> bool {
        if name != Self::VIEWS_COLUMN {
            return false;
        }
        self.views += 1;
        true
    }

    fn retain_counters(&mut self, stored: &Self) {
        self.views = stored.views;
    }

    fn reset_counters(&mut self) {
        self.views = 0;
    }

    fn listing() -> ListingProfile {
        ListingProfile::new(
            EntitySearchSpec::new(FieldRef::plain("published_at"), SortDirection::Desc)
                .searchable([
                    FieldRef::localized("title"),
                    FieldRef::localized("excerpt"),
                    FieldRef::localized("content"),
                ])
                .sortable([FieldRef::plain("views"), FieldRef::localized("title")]),
            FilterRegistry::new().register("type", predicates::one_of("type", NewsKind::VALUES)),
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

    #[test]
    fn test_kind_round_trips_through_type_key() {
        let news: News = serde_json::from_value(json!({
            "title": { "ru": "Итоги форума" },
            "type": "article",
        }))
        .expect("deserialize");
        assert_eq!(news.kind, NewsKind::Article);
        assert_eq!(news.views, 0);

        let resource = news.to_resource(&Presentation::Localized(Locale::En));
        assert_eq!(resource["type"], "article");
        assert_eq!(resource["title"], "Итоги форума");
    }

    #[test]
    fn test_views_is_not_client_writable() {
        assert!(!News::COLUMNS.contains(&News::VIEWS_COLUMN));
    }

    #[test]
    fn test_only_views_is_a_counter() {
        let mut news: News = serde_json::from_value(json!({ "title": { "ru": "Анонс" } }))
            .expect("deserialize");
        assert!(news.increment("views"));
        assert!(!news.increment("title"));
        assert_eq!(news.views, 1);
    }

    #[test]
    fn test_reset_counters_zeroes_views() {
        let mut news: News = serde_json::from_value(json!({
            "title": { "ru": "Анонс" },
            "views": 1000,
        }))
        .expect("deserialize");
        news.reset_counters();
        assert_eq!(news.views, 0);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!("podcast".parse::<NewsKind>().is_err());
        assert_eq!("Article".parse::<NewsKind>().ok(), Some(NewsKind::Article));
    }
}
