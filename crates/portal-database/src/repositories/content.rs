//! Generic content repository over PostgreSQL.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::debug;

use portal_core::error::{AppError, ErrorKind};
use portal_core::query::QueryPlan;
use portal_core::result::AppResult;
use portal_core::traits::{Content, ContentStore};

use crate::query::{push_order, push_value, push_where, quote_ident};

/// Repository for one content table.
///
/// Every statement is built from the entity's static declarations; the
/// query plan only contributes bound values.
pub struct PgContentStore<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PgContentStore<E> {
    /// Create a new repository over `pool`.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for PgContentStore<E> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<E> std::fmt::Debug for PgContentStore<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgContentStore")
            .field("table", &std::any::type_name::<E>())
            .finish()
    }
}

fn storage_error(message: String, source: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::CollaboratorUnavailable, message, source)
}

#[async_trait]
impl<E> ContentStore<E> for PgContentStore<E>
where
    E: Content + for<'r> FromRow<'r, PgRow>,
{
    async fn count(&self, plan: &QueryPlan) -> AppResult<u64> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) FROM {}", quote_ident(E::TABLE)));
        push_where(&mut builder, plan);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error(format!("Failed to count {}", E::TABLE), e))?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn fetch(&self, plan: &QueryPlan, offset: u64, limit: u64) -> AppResult<Vec<E>> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT * FROM {}", quote_ident(E::TABLE)));
        push_where(&mut builder, plan);
        push_order(&mut builder, plan);
        builder
            .push(" LIMIT ")
            .push_bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .push(" OFFSET ")
            .push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

        debug!(table = E::TABLE, sql = builder.sql(), "Fetching content page");

        builder
            .build_query_as::<E>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error(format!("Failed to list {}", E::TABLE), e))
    }

    async fn find(&self, id: i64) -> AppResult<Option<E>> {
        sqlx::query_as::<_, E>(&format!(
            "SELECT * FROM {} WHERE \"id\" = $1",
            quote_ident(E::TABLE)
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error(format!("Failed to find {} {id}", E::TABLE), e))
    }

    async fn insert(&self, entity: &E) -> AppResult<E> {
        let columns = entity.write_columns();
        let names: Vec<String> = columns.iter().map(|(name, _)| quote_ident(name)).collect();

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "INSERT INTO {} ({}) VALUES (",
            quote_ident(E::TABLE),
            names.join(", ")
        ));
        for (i, (_, value)) in columns.into_iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            push_value(&mut builder, value);
        }
        builder.push(") RETURNING *");

        builder
            .build_query_as::<E>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error(format!("Failed to insert into {}", E::TABLE), e))
    }

    async fn update(&self, id: i64, entity: &E) -> AppResult<Option<E>> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("UPDATE {} SET ", quote_ident(E::TABLE)));
        for (name, value) in entity.write_columns() {
            builder.push(format!("{} = ", quote_ident(name)));
            push_value(&mut builder, value);
            builder.push(", ");
        }
        builder
            .push("\"updated_at\" = NOW() WHERE \"id\" = ")
            .push_bind(id)
            .push(" RETURNING *");

        builder
            .build_query_as::<E>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error(format!("Failed to update {} {id}", E::TABLE), e))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query(&format!(
            "DELETE FROM {} WHERE \"id\" = $1",
            quote_ident(E::TABLE)
        ))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error(format!("Failed to delete {} {id}", E::TABLE), e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn increment(&self, id: i64, column: &'static str) -> AppResult<bool> {
        let column = quote_ident(column);
        let result = sqlx::query(&format!(
            "UPDATE {} SET {column} = {column} + 1 WHERE \"id\" = $1",
            quote_ident(E::TABLE)
        ))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error(format!("Failed to increment {} {id}", E::TABLE), e))?;
        Ok(result.rows_affected() > 0)
    }
}
