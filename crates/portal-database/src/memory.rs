//! In-memory storage collaborator.
//!
//! Evaluates a [`QueryPlan`] against rows kept behind a `RwLock`, with the
//! same matching and ordering semantics as the SQL compilation in
//! [`query`](crate::query). Used by tests and by local runs configured
//! with the `memory` backend.
//!
//! Text ordering is by byte value, not by the database collation, so
//! localized sorts may order differently than on PostgreSQL.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use portal_core::error::AppError;
use portal_core::query::{OrderTerm, QueryPlan};
use portal_core::result::AppResult;
use portal_core::traits::{Content, ContentStore};
use portal_core::types::{ColumnValue, Locale, SortDirection};

/// Rows of one content type, keyed by id.
#[derive(Debug)]
pub struct MemoryContentStore<E> {
    rows: RwLock<BTreeMap<i64, E>>,
    next_id: AtomicI64,
}

impl<E> Default for MemoryContentStore<E> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<E: Content> MemoryContentStore<E> {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `rows` in order, assigning ids and timestamps and zeroing
    /// counters.
    pub async fn seed(&self, rows: impl IntoIterator<Item = E>) -> Vec<E> {
        let mut stored = Vec::new();
        let mut guard = self.rows.write().await;
        for mut row in rows {
            let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
            let now = Utc::now();
            row.set_identity(id, now, now);
            row.reset_counters();
            guard.insert(id, row.clone());
            stored.push(row);
        }
        stored
    }

    /// Number of stored rows, ignoring any scope.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Whether the store holds no rows.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

/// A comparable projection of a column value.
///
/// NULL sorts after every value, as in PostgreSQL.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(String),
    Int(i64),
    Bool(bool),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Null,
}

impl SortKey {
    fn of(value: Option<ColumnValue>, locale: Locale) -> Self {
        match value {
            Some(ColumnValue::Text(Some(v))) => Self::Text(v),
            Some(ColumnValue::Int(Some(v))) => Self::Int(i64::from(v)),
            Some(ColumnValue::BigInt(Some(v))) => Self::Int(v),
            Some(ColumnValue::Bool(v)) => Self::Bool(v),
            Some(ColumnValue::Date(Some(v))) => Self::Date(v),
            Some(ColumnValue::Timestamp(Some(v))) => Self::Timestamp(v),
            Some(ColumnValue::Localized(text)) => Self::Text(text.resolve(locale)),
            _ => Self::Null,
        }
    }
}

fn compare<E: Content>(a: &E, b: &E, ordering: &[OrderTerm]) -> Ordering {
    ordering
        .iter()
        .map(|term| {
            let left = SortKey::of(a.column(term.field.name), term.locale);
            let right = SortKey::of(b.column(term.field.name), term.locale);
            match term.direction {
                SortDirection::Asc => left.cmp(&right),
                SortDirection::Desc => right.cmp(&left),
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[async_trait]
impl<E: Content> ContentStore<E> for MemoryContentStore<E> {
    async fn count(&self, plan: &QueryPlan) -> AppResult<u64> {
        let rows = self.rows.read().await;
        Ok(rows.values().filter(|row| plan.matches(*row)).count() as u64)
    }

    async fn fetch(&self, plan: &QueryPlan, offset: u64, limit: u64) -> AppResult<Vec<E>> {
        let rows = self.rows.read().await;
        let mut selected: Vec<&E> = rows.values().filter(|row| plan.matches(*row)).collect();
        selected.sort_by(|a, b| compare(*a, *b, plan.ordering()));

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        debug!(table = E::TABLE, matched = selected.len(), offset, limit, "Fetching content page");

        Ok(selected
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find(&self, id: i64) -> AppResult<Option<E>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: &E) -> AppResult<E> {
        self.seed(std::iter::once(entity.clone()))
            .await
            .into_iter()
            .next()
            .ok_or_else(|| AppError::internal(format!("Insert into {} produced no row", E::TABLE)))
    }

    async fn update(&self, id: i64, entity: &E) -> AppResult<Option<E>> {
        let mut rows = self.rows.write().await;
        let Some(stored) = rows.get_mut(&id) else {
            return Ok(None);
        };
        let mut updated = entity.clone();
        updated.retain_counters(stored);
        updated.set_identity(id, stored.created_at(), Utc::now());
        *stored = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }

    async fn increment(&self, id: i64, column: &'static str) -> AppResult<bool> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.get_mut(&id) else {
            return Ok(false);
        };
        if !row.increment(column) {
            return Err(AppError::internal(format!(
                "{column} is not a counter column of {}",
                E::TABLE
            )));
        }
        Ok(true)
    }
}
