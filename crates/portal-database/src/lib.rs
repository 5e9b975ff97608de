//! # portal-database
//!
//! PostgreSQL connection management, migrations, and the two storage
//! collaborators behind every content type: [`PgContentStore`] compiles a
//! [`QueryPlan`](portal_core::query::QueryPlan) to SQL, and
//! [`MemoryContentStore`] evaluates it against rows held in memory.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod query;
pub mod repositories;
pub mod stores;

pub use connection::DatabasePool;
pub use memory::MemoryContentStore;
pub use repositories::PgContentStore;
pub use stores::ContentStores;
