//! Integration tests for public list endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{TestApp, event};

#[tokio::test]
async fn test_filtered_hotels_paginate() {
    let app = TestApp::new();
    app.seed_hotels(20, 7).await;

    let response = app
        .request("GET", "/api/hotels?category=recommended&per_page=5", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.pagination("total"), 7);
    assert_eq!(response.pagination("last_page"), 2);
    assert_eq!(response.pagination("per_page"), 5);
    assert_eq!(response.items().len(), 5);

    let second = app
        .request("GET", "/api/hotels?category=recommended&per_page=5&page=2", None)
        .await;
    assert_eq!(second.items().len(), 2);
}

#[tokio::test]
async fn test_empty_collection_envelope() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/partners?page=1&per_page=15", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "data": [],
            "pagination": { "current_page": 1, "per_page": 15, "total": 0, "last_page": 1 }
        })
    );
}

#[tokio::test]
async fn test_pages_cover_every_row_once() {
    let app = TestApp::new();
    app.seed_hotels(11, 0).await;

    let mut seen = Vec::new();
    for page in 1..=3 {
        let response = app
            .request("GET", &format!("/api/hotels?per_page=4&page={page}"), None)
            .await;
        assert_eq!(response.pagination("last_page"), 3);
        seen.extend(response.items().iter().map(|h| h["id"].as_i64().unwrap()));
    }

    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 11);
}

#[tokio::test]
async fn test_page_beyond_range_is_empty() {
    let app = TestApp::new();
    app.seed_hotels(3, 0).await;

    let response = app.request("GET", "/api/hotels?page=9", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.items().is_empty());
    assert_eq!(response.pagination("current_page"), 9);
    assert_eq!(response.pagination("total"), 3);
    assert_eq!(response.pagination("last_page"), 1);
}

#[tokio::test]
async fn test_malformed_paging_falls_back_to_defaults() {
    let app = TestApp::new();
    app.seed_hotels(2, 0).await;

    let response = app
        .request("GET", "/api/hotels?page=abc&per_page=-4", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.pagination("current_page"), 1);
    assert_eq!(
        response.pagination("per_page"),
        app.config.listing.default_per_page
    );

    let clamped = app.request("GET", "/api/hotels?per_page=100000", None).await;
    assert_eq!(
        clamped.pagination("per_page"),
        app.config.listing.max_per_page
    );

    let overflow = app
        .request("GET", "/api/hotels?per_page=99999999999999999999", None)
        .await;
    assert_eq!(
        overflow.pagination("per_page"),
        app.config.listing.max_per_page
    );
    assert_eq!(overflow.items().len(), 2);
}

#[tokio::test]
async fn test_blank_search_is_ignored() {
    let app = TestApp::new();
    app.seed_hotels(4, 0).await;

    let plain = app.request("GET", "/api/hotels", None).await;
    let blank = app.request("GET", "/api/hotels?search=", None).await;
    let spaces = app.request("GET", "/api/hotels?search=%20%20", None).await;

    assert_eq!(plain.body, blank.body);
    assert_eq!(plain.body, spaces.body);
}

#[tokio::test]
async fn test_search_matches_any_locale() {
    let app = TestApp::new();
    app.seed_event(event(
        json!({ "ru": "Пленарное заседание", "en": "Plenary session" }),
        "2025-07-01",
        &[],
    ))
    .await;
    app.seed_event(event(json!({ "ru": "Экскурсия" }), "2025-07-02", &[]))
        .await;

    let english = app
        .request("GET", "/api/events?search=PLENARY&locale=ru", None)
        .await;
    assert_eq!(english.pagination("total"), 1);
    assert_eq!(english.items()[0]["title"], "Пленарное заседание");

    let russian = app
        .request("GET", "/api/events?search=%D1%8D%D0%BA%D1%81", None)
        .await;
    assert_eq!(russian.pagination("total"), 1);
}

#[tokio::test]
async fn test_unknown_sort_field_uses_default_order() {
    let app = TestApp::new();
    app.seed_hotels(5, 0).await;

    let default = app.request("GET", "/api/hotels", None).await;
    let unknown = app
        .request("GET", "/api/hotels?sort_by=password&sort_order=asc", None)
        .await;

    assert_eq!(default.body, unknown.body);
    let orders: Vec<i64> = default
        .items()
        .iter()
        .map(|h| h["sort_order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn test_sort_by_allowed_field() {
    let app = TestApp::new();
    app.seed_hotels(3, 0).await;

    let response = app
        .request("GET", "/api/hotels?sort_by=name&sort_order=desc", None)
        .await;

    let names: Vec<&str> = response
        .items()
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Отель 02", "Отель 01", "Отель 00"]);
}

#[tokio::test]
async fn test_tags_filter_requires_every_tag() {
    let app = TestApp::new();
    app.seed_event(event(json!({ "ru": "A" }), "2025-07-01", &["a"]))
        .await;
    let both = app
        .seed_event(event(json!({ "ru": "AB" }), "2025-07-02", &["a", "b"]))
        .await;
    app.seed_event(event(json!({ "ru": "B" }), "2025-07-03", &["b"]))
        .await;

    let response = app.request("GET", "/api/events?tags=a,b", None).await;

    assert_eq!(response.pagination("total"), 1);
    assert_eq!(response.items()[0]["id"], both.id);
}

#[tokio::test]
async fn test_date_filter_and_malformed_value() {
    let app = TestApp::new();
    app.seed_event(event(json!({ "ru": "День 1" }), "2025-07-01", &[]))
        .await;
    app.seed_event(event(json!({ "ru": "День 2" }), "2025-07-02", &[]))
        .await;

    let filtered = app
        .request("GET", "/api/events?date=2025-07-02", None)
        .await;
    assert_eq!(filtered.pagination("total"), 1);
    assert_eq!(filtered.items()[0]["title"], "День 2");

    let malformed = app.request("GET", "/api/events?date=tomorrow", None).await;
    assert_eq!(malformed.status, StatusCode::OK);
    assert_eq!(malformed.pagination("total"), 2);
}

#[tokio::test]
async fn test_unpublished_rows_are_hidden() {
    let app = TestApp::new();
    let mut draft = event(json!({ "ru": "Черновик" }), "2025-07-01", &[]);
    draft.is_published = false;
    app.seed_event(draft).await;
    app.seed_event(event(json!({ "ru": "Открытие" }), "2025-07-01", &[]))
        .await;

    let public = app.request("GET", "/api/events", None).await;
    assert_eq!(public.pagination("total"), 1);

    let admin = app.request("GET", "/api/admin/events", None).await;
    assert_eq!(admin.pagination("total"), 2);
}

#[tokio::test]
async fn test_identical_requests_are_identical() {
    let app = TestApp::new();
    for title in ["Один", "Два", "Три"] {
        app.seed_event(event(json!({ "ru": title }), "2025-07-01", &[]))
            .await;
    }

    let uri = "/api/events?per_page=2&page=1";
    let first = app.request("GET", uri, None).await;
    let second = app.request("GET", uri, None).await;

    assert_eq!(
        serde_json::to_vec(&first.body).unwrap(),
        serde_json::to_vec(&second.body).unwrap()
    );
}

#[tokio::test]
async fn test_list_sets_request_id() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/awards", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.request_id.is_some());
}
