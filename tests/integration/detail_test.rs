//! Integration tests for public detail endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{TestApp, event, news};

#[tokio::test]
async fn test_missing_translation_falls_back_to_russian() {
    let app = TestApp::new();
    let item = app
        .seed_news(news(json!({ "ru": "Открытие", "en": "" }), true))
        .await;

    let response = app
        .request("GET", &format!("/api/news/{}?locale=en", item.id), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Открытие");
}

#[tokio::test]
async fn test_accept_language_selects_locale() {
    let app = TestApp::new();
    let item = app
        .seed_event(event(
            json!({ "ru": "Открытие", "en": "Opening" }),
            "2025-07-01",
            &[],
        ))
        .await;
    let path = format!("/api/events/{}", item.id);

    let english = app
        .get_with_headers(&path, &[("Accept-Language", "en-US,en;q=0.9")])
        .await;
    assert_eq!(english.body["data"]["title"], "Opening");

    let overridden = app
        .get_with_headers(
            &format!("{path}?locale=ru"),
            &[("Accept-Language", "en-US")],
        )
        .await;
    assert_eq!(overridden.body["data"]["title"], "Открытие");

    let unsupported = app.request("GET", &format!("{path}?locale=fr"), None).await;
    assert_eq!(unsupported.body["data"]["title"], "Открытие");
}

#[tokio::test]
async fn test_detail_not_found() {
    let app = TestApp::new();

    for path in ["/api/events/999", "/api/events/abc", "/api/events/-1"] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(response.body["error"], "NOT_FOUND");
        assert!(response.body["message"].is_string());
    }
}

#[tokio::test]
async fn test_hidden_row_is_not_public() {
    let app = TestApp::new();
    let draft = app
        .seed_news(news(json!({ "ru": "Черновик" }), false))
        .await;

    let public = app
        .request("GET", &format!("/api/news/{}", draft.id), None)
        .await;
    assert_eq!(public.status, StatusCode::NOT_FOUND);

    let admin = app
        .request("GET", &format!("/api/admin/news/{}", draft.id), None)
        .await;
    assert_eq!(admin.status, StatusCode::OK);
    assert_eq!(admin.body["data"]["views"], 0);
}

#[tokio::test]
async fn test_news_detail_counts_views() {
    let app = TestApp::new();
    let item = app
        .seed_news(news(json!({ "ru": "Итоги" }), true))
        .await;
    let path = format!("/api/news/{}", item.id);

    let first = app.request("GET", &path, None).await;
    assert_eq!(first.body["data"]["views"], 1);

    let second = app.request("GET", &path, None).await;
    assert_eq!(second.body["data"]["views"], 2);

    let listed = app.request("GET", "/api/news?sort_by=views", None).await;
    assert_eq!(listed.items()[0]["views"], 2);
}

#[tokio::test]
async fn test_competition_timeline_follows_locale() {
    let app = TestApp::new();
    let created = app
        .request(
            "POST",
            "/api/admin/competitions",
            Some(json!({
                "title": { "ru": "Конкурс", "en": "Contest" },
                "start_date": "2025-07-01",
                "end_date": "2025-07-30",
                "status": "active",
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["data"]["id"].as_i64().unwrap();

    let russian = app
        .request("GET", &format!("/api/competitions/{id}"), None)
        .await;
    assert_eq!(russian.body["data"]["timeline"], "01.07. — 30.07.2025 г.");

    let english = app
        .request("GET", &format!("/api/competitions/{id}?locale=en"), None)
        .await;
    assert_eq!(english.body["data"]["title"], "Contest");
    assert_eq!(english.body["data"]["timeline"], "01.07 — 30.07.2025");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
