//! Content schema migrations.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use portal_core::error::{AppError, ErrorKind};
use portal_core::result::AppResult;

/// Migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply every pending migration.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!(
        known = MIGRATOR.iter().count(),
        "Applying content schema migrations"
    );

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::CollaboratorUnavailable,
            format!("Failed to apply content schema migrations: {e}"),
            e,
        )
    })?;

    info!("Content schema is up to date");
    Ok(())
}
