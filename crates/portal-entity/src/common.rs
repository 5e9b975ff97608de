//! Pieces shared by every entity's `Content` implementation.

use chrono::{DateTime, Utc};

use portal_core::query::Condition;
use portal_core::types::{ColumnValue, FilterValue};

/// Implements the identity accessors of `Content` for a struct with
/// `id`, `created_at` and `updated_at` fields.
macro_rules! content_identity {
    () => {
        fn id(&self) -> i64 {
            self.id
        }

        fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
            self.created_at
        }

        fn set_identity(
            &mut self,
            id: i64,
            created_at: ::chrono::DateTime<::chrono::Utc>,
            updated_at: ::chrono::DateTime<::chrono::Utc>,
        ) {
            self.id = id;
            self.created_at = created_at;
            self.updated_at = updated_at;
        }
    };
}

/// Read one of the storage-managed columns.
pub(crate) fn identity_column(
    name: &str,
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Option<ColumnValue> {
    match name {
        "id" => Some(ColumnValue::BigInt(Some(id))),
        "created_at" => Some(ColumnValue::Timestamp(Some(created_at))),
        "updated_at" => Some(ColumnValue::Timestamp(Some(updated_at))),
        _ => None,
    }
}

/// Public visibility for entities with an `is_published` flag.
pub(crate) fn published_only() -> Option<Condition> {
    Some(Condition::equals("is_published", FilterValue::Boolean(true)))
}

/// Public visibility for entities with an `is_active` flag.
pub(crate) fn active_only() -> Option<Condition> {
    Some(Condition::equals("is_active", FilterValue::Boolean(true)))
}

pub(crate) fn default_true() -> bool {
    true
}
