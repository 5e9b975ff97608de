//! Integration tests for management (CRUD) endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{TestApp, news};
use portal_core::traits::ContentStore;

#[tokio::test]
async fn test_create_returns_all_locales() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/admin/hotels",
            Some(json!({
                "name": { "ru": "Гостиница Москва", "en": "Hotel Moscow" },
                "category": "recommended",
                "stars": 4,
                "website": "https://hotel.example.com",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = &response.body["data"];
    assert!(data["id"].as_i64().unwrap() > 0);
    assert_eq!(
        data["name"],
        json!({ "ru": "Гостиница Москва", "en": "Hotel Moscow" })
    );
    assert_eq!(data["is_active"], true);

    let public = app.request("GET", "/api/hotels?locale=en", None).await;
    assert_eq!(public.items()[0]["name"], "Hotel Moscow");
}

#[tokio::test]
async fn test_create_rejects_missing_primary_locale() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/admin/events",
            Some(json!({
                "title": { "en": "Opening" },
                "date": "2025-07-01",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["details"]["title"].is_array());
    assert!(app.stores.events.find(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_rejects_out_of_range_and_bad_period() {
    let app = TestApp::new();

    let hotel = app
        .request(
            "POST",
            "/api/admin/hotels",
            Some(json!({
                "name": { "ru": "Звезда" },
                "category": "partner",
                "stars": 7,
            })),
        )
        .await;
    assert_eq!(hotel.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(hotel.body["details"]["stars"].is_array());

    let competition = app
        .request(
            "POST",
            "/api/admin/competitions",
            Some(json!({
                "title": { "ru": "Конкурс" },
                "start_date": "2025-08-01",
                "end_date": "2025-07-01",
            })),
        )
        .await;
    assert_eq!(competition.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_body_is_validation_error() {
    let app = TestApp::new();

    let unknown_type = app
        .request(
            "POST",
            "/api/admin/news",
            Some(json!({ "title": { "ru": "Итоги" }, "type": "rumour" })),
        )
        .await;
    assert_eq!(unknown_type.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(unknown_type.body["error"], "VALIDATION_ERROR");

    let not_an_object = app
        .request("POST", "/api/admin/partners", Some(json!([1, 2, 3])))
        .await;
    assert_eq!(not_an_object.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_ignores_client_views() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/admin/news",
            Some(json!({
                "title": { "ru": "Новость" },
                "is_published": true,
                "views": 1000,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["views"], 0);

    let id = response.body["data"]["id"].as_i64().unwrap();
    let shown = app
        .request("GET", &format!("/api/news/{id}"), None)
        .await;
    assert_eq!(shown.body["data"]["views"], 1);
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_views() {
    let app = TestApp::new();
    let item = app
        .seed_news(news(json!({ "ru": "Итоги" }), true))
        .await;
    app.stores.news.increment(item.id, "views").await.unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/news/{}", item.id),
            Some(json!({
                "title": { "ru": "Итоги форума", "en": "Forum results" },
                "type": "article",
                "is_published": true,
                "views": 500,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["title"]["en"], "Forum results");
    assert_eq!(data["type"], "article");
    assert_eq!(data["views"], 1);
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/admin/partners/42",
            Some(json!({ "name": { "ru": "Партнёр" }, "category": "general" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete() {
    let app = TestApp::new();
    let item = app
        .seed_news(news(json!({ "ru": "Удалить" }), true))
        .await;
    let path = format!("/api/admin/news/{}", item.id);

    let deleted = app.request("DELETE", &path, None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let again = app.request("DELETE", &path, None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let public = app
        .request("GET", &format!("/api/news/{}", item.id), None)
        .await;
    assert_eq!(public.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_list_uses_locale_maps() {
    let app = TestApp::new();
    app.seed_hotels(3, 1).await;

    let response = app
        .request("GET", "/api/admin/hotels?category=recommended", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.pagination("total"), 1);
    assert_eq!(response.items()[0]["name"], json!({ "ru": "Отель 00" }));
}
