//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tower::ServiceExt;

use portal_api::{AppState, build_app};
use portal_core::config::AppConfig;
use portal_core::traits::ContentStore;
use portal_database::ContentStores;
use portal_entity::{Event, Hotel, News};
use portal_service::ContentServices;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Storage behind the router, for seeding and direct inspection
    pub stores: ContentStores,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over empty in-memory storage
    pub fn new() -> Self {
        let config = AppConfig::default();
        let stores = ContentStores::memory();
        let services = ContentServices::new(stores.clone(), &config.listing);
        let router = build_app(AppState::new(config.clone(), services));

        Self {
            router,
            stores,
            config,
        }
    }

    /// Insert `count` active hotels; the first `recommended` of them are in
    /// the `recommended` category.
    pub async fn seed_hotels(&self, count: usize, recommended: usize) -> Vec<Hotel> {
        let mut seeded = Vec::with_capacity(count);
        for i in 0..count {
            let category = if i < recommended { "recommended" } else { "partner" };
            let hotel = hotel(&format!("Отель {i:02}"), category, i as i32);
            seeded.push(
                self.stores
                    .hotels
                    .insert(&hotel)
                    .await
                    .expect("Failed to seed hotel"),
            );
        }
        seeded
    }

    /// Insert one event
    pub async fn seed_event(&self, event: Event) -> Event {
        self.stores
            .events
            .insert(&event)
            .await
            .expect("Failed to seed event")
    }

    /// Insert one news entry
    pub async fn seed_news(&self, news: News) -> News {
        self.stores
            .news
            .insert(&news)
            .await
            .expect("Failed to seed news")
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        self.send(method, path, body, &[]).await
    }

    /// `GET` with extra request headers
    pub async fn get_with_headers(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        self.send("GET", path, None, headers).await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            request_id,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// `x-request-id` header set by the logging middleware
    pub request_id: Option<String>,
}

impl TestResponse {
    /// Items of a list envelope
    pub fn items(&self) -> &Vec<Value> {
        self.body["data"].as_array().expect("data is not an array")
    }

    /// Integer field of the pagination block
    pub fn pagination(&self, key: &str) -> u64 {
        self.body["pagination"][key]
            .as_u64()
            .unwrap_or_else(|| panic!("pagination.{key} missing"))
    }
}

fn build<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("Invalid fixture")
}

/// An active hotel with a Russian-only name
pub fn hotel(name_ru: &str, category: &str, sort_order: i32) -> Hotel {
    build(json!({
        "name": { "ru": name_ru },
        "category": category,
        "sort_order": sort_order,
    }))
}

/// A published event on `date`
pub fn event(title: Value, date: &str, tags: &[&str]) -> Event {
    build(json!({
        "title": title,
        "date": date,
        "tags": tags,
        "is_published": true,
    }))
}

/// A news entry
pub fn news(title: Value, published: bool) -> News {
    build(json!({
        "title": title,
        "type": "news",
        "is_published": published,
        "published_at": "2025-06-01T09:00:00Z",
    }))
}
