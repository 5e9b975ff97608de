//! The full set of storage collaborators, one per content type.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use portal_core::config::{DatabaseConfig, StorageBackend};
use portal_core::result::AppResult;
use portal_core::traits::ContentStore;
use portal_entity::{
    Award, CommitteeMember, Competition, Event, HeroSlide, Hotel, News, Partner, PartnerPackage,
};

use crate::connection::DatabasePool;
use crate::memory::MemoryContentStore;
use crate::migration::run_migrations;
use crate::repositories::PgContentStore;

/// Storage for every content type, behind the collaborator trait.
#[derive(Clone)]
pub struct ContentStores {
    pub events: Arc<dyn ContentStore<Event>>,
    pub news: Arc<dyn ContentStore<News>>,
    pub hotels: Arc<dyn ContentStore<Hotel>>,
    pub partners: Arc<dyn ContentStore<Partner>>,
    pub partner_packages: Arc<dyn ContentStore<PartnerPackage>>,
    pub awards: Arc<dyn ContentStore<Award>>,
    pub competitions: Arc<dyn ContentStore<Competition>>,
    pub committee_members: Arc<dyn ContentStore<CommitteeMember>>,
    pub hero_slides: Arc<dyn ContentStore<HeroSlide>>,
}

impl ContentStores {
    /// Empty in-memory stores.
    pub fn memory() -> Self {
        Self {
            events: Arc::new(MemoryContentStore::<Event>::new()),
            news: Arc::new(MemoryContentStore::<News>::new()),
            hotels: Arc::new(MemoryContentStore::<Hotel>::new()),
            partners: Arc::new(MemoryContentStore::<Partner>::new()),
            partner_packages: Arc::new(MemoryContentStore::<PartnerPackage>::new()),
            awards: Arc::new(MemoryContentStore::<Award>::new()),
            competitions: Arc::new(MemoryContentStore::<Competition>::new()),
            committee_members: Arc::new(MemoryContentStore::<CommitteeMember>::new()),
            hero_slides: Arc::new(MemoryContentStore::<HeroSlide>::new()),
        }
    }

    /// PostgreSQL repositories sharing `pool`.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            events: Arc::new(PgContentStore::<Event>::new(pool.clone())),
            news: Arc::new(PgContentStore::<News>::new(pool.clone())),
            hotels: Arc::new(PgContentStore::<Hotel>::new(pool.clone())),
            partners: Arc::new(PgContentStore::<Partner>::new(pool.clone())),
            partner_packages: Arc::new(PgContentStore::<PartnerPackage>::new(pool.clone())),
            awards: Arc::new(PgContentStore::<Award>::new(pool.clone())),
            competitions: Arc::new(PgContentStore::<Competition>::new(pool.clone())),
            committee_members: Arc::new(PgContentStore::<CommitteeMember>::new(pool.clone())),
            hero_slides: Arc::new(PgContentStore::<HeroSlide>::new(pool)),
        }
    }

    /// Build the stores selected by `config.backend`.
    ///
    /// For PostgreSQL this connects and, when `run_migrations` is set,
    /// applies pending migrations first.
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            StorageBackend::Memory => {
                info!("Using in-memory content storage");
                Ok(Self::memory())
            }
            StorageBackend::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool.into_pool()))
            }
        }
    }
}

impl std::fmt::Debug for ContentStores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStores").finish_non_exhaustive()
    }
}
