//! Route definitions for the portal HTTP API.
//!
//! Every content type gets the same public and management routes under
//! `/api`, instantiated from the generic handlers for its segment.

use axum::Router;
use axum::routing::get;
use serde::de::DeserializeOwned;

use portal_core::traits::Content;
use portal_entity::{
    Award, CommitteeMember, Competition, Event, HeroSlide, Hotel, News, Partner, PartnerPackage,
};
use portal_service::{ContentServices, ServiceProvider};

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` router with all routes, without middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(public_routes::<Event>())
        .merge(news_routes())
        .merge(public_routes::<Hotel>())
        .merge(public_routes::<Partner>())
        .merge(public_routes::<PartnerPackage>())
        .merge(public_routes::<Award>())
        .merge(public_routes::<Competition>())
        .merge(public_routes::<CommitteeMember>())
        .merge(public_routes::<HeroSlide>())
        .merge(admin_routes::<Event>())
        .merge(admin_routes::<News>())
        .merge(admin_routes::<Hotel>())
        .merge(admin_routes::<Partner>())
        .merge(admin_routes::<PartnerPackage>())
        .merge(admin_routes::<Award>())
        .merge(admin_routes::<Competition>())
        .merge(admin_routes::<CommitteeMember>())
        .merge(admin_routes::<HeroSlide>())
        .route("/health", get(handlers::health::health));

    Router::new().nest("/api", api_routes).with_state(state)
}

/// `GET /{segment}` and `GET /{segment}/{id}`.
fn public_routes<E>() -> Router<AppState>
where
    E: Content,
    ContentServices: ServiceProvider<E>,
{
    Router::new()
        .route(&format!("/{}", E::SEGMENT), get(handlers::content::list::<E>))
        .route(&format!("/{}/{{id}}", E::SEGMENT), get(handlers::content::show::<E>))
}

/// News detail counts views, so it has its own handler.
fn news_routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(handlers::content::list::<News>))
        .route("/news/{id}", get(handlers::news::show))
}

/// Management CRUD under `/admin/{segment}`.
fn admin_routes<E>() -> Router<AppState>
where
    E: Content + DeserializeOwned,
    ContentServices: ServiceProvider<E>,
{
    Router::new()
        .route(
            &format!("/admin/{}", E::SEGMENT),
            get(handlers::admin::list::<E>).post(handlers::admin::create::<E>),
        )
        .route(
            &format!("/admin/{}/{{id}}", E::SEGMENT),
            get(handlers::admin::show::<E>)
                .put(handlers::admin::update::<E>)
                .delete(handlers::admin::delete::<E>),
        )
}
