//! One [`ContentService`] per content type.

use portal_core::config::ListingConfig;
use portal_core::traits::Content;
use portal_database::ContentStores;
use portal_entity::{
    Award, CommitteeMember, Competition, Event, HeroSlide, Hotel, News, Partner, PartnerPackage,
};

use crate::content::ContentService;

/// Every content service, built from one set of storage collaborators.
#[derive(Debug)]
pub struct ContentServices {
    pub events: ContentService<Event>,
    pub news: ContentService<News>,
    pub hotels: ContentService<Hotel>,
    pub partners: ContentService<Partner>,
    pub partner_packages: ContentService<PartnerPackage>,
    pub awards: ContentService<Award>,
    pub competitions: ContentService<Competition>,
    pub committee_members: ContentService<CommitteeMember>,
    pub hero_slides: ContentService<HeroSlide>,
}

impl ContentServices {
    /// Wire a service to each store.
    pub fn new(stores: ContentStores, config: &ListingConfig) -> Self {
        Self {
            events: ContentService::new(stores.events, config.clone()),
            news: ContentService::new(stores.news, config.clone()),
            hotels: ContentService::new(stores.hotels, config.clone()),
            partners: ContentService::new(stores.partners, config.clone()),
            partner_packages: ContentService::new(stores.partner_packages, config.clone()),
            awards: ContentService::new(stores.awards, config.clone()),
            competitions: ContentService::new(stores.competitions, config.clone()),
            committee_members: ContentService::new(stores.committee_members, config.clone()),
            hero_slides: ContentService::new(stores.hero_slides, config.clone()),
        }
    }
}

/// Typed lookup of the service for content type `E`.
///
/// Lets generic handlers reach the right service without matching on
/// the route.
pub trait ServiceProvider<E: Content> {
    /// The service for `E`.
    fn service(&self) -> &ContentService<E>;
}

macro_rules! provide {
    ($($entity:ty => $field:ident),+ $(,)?) => {
        $(
            impl ServiceProvider<$entity> for ContentServices {
                fn service(&self) -> &ContentService<$entity> {
                    &self.$field
                }
            }
        )+
    };
}

provide! {
    Event => events,
    News => news,
    Hotel => hotels,
    Partner => partners,
    PartnerPackage => partner_packages,
    Award => awards,
    Competition => competitions,
    CommitteeMember => committee_members,
    HeroSlide => hero_slides,
}
