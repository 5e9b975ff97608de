//! PostgreSQL-backed storage collaborators.

pub mod content;

pub use content::PgContentStore;
