//! Post API integration tests
//!
//! Write, read, list, pagination, filters and previews.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{assert_error, assert_no_password_field, TestApp};

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|post| post["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_write_requires_login() {
    let app = TestApp::new();
    let response = app
        .post(
            "/api/posts",
            json!({ "title": "t", "body": "b", "tags": [] }),
            None,
        )
        .await;
    assert_error(&response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_write_records_owner() {
    let app = TestApp::new();
    let alice = app.register("alice", "pw123").await;

    let response = app
        .post(
            "/api/posts",
            json!({ "title": "Hello", "body": "First post", "tags": ["intro", "rust"] }),
            Some(&alice.cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_no_password_field(&response.body);
    assert_eq!(response.body["title"], "Hello");
    assert_eq!(response.body["tags"], json!(["intro", "rust"]));
    assert_eq!(
        response.body["user"],
        json!({ "id": alice.identity.id, "username": "alice" })
    );
    assert!(Uuid::parse_str(response.body["id"].as_str().unwrap()).is_ok());
    assert!(response.body["published_date"].is_string());
}

#[tokio::test]
async fn test_write_schema_errors() {
    let app = TestApp::new();
    let alice = app.register("alice", "pw123").await;
    let cookie = Some(alice.cookie.as_str());

    let missing_tags = app
        .post("/api/posts", json!({ "title": "t", "body": "b" }), cookie)
        .await;
    assert_error(&missing_tags, StatusCode::BAD_REQUEST);

    let empty_title = app
        .post(
            "/api/posts",
            json!({ "title": "", "body": "b", "tags": [] }),
            cookie,
        )
        .await;
    assert_error(&empty_title, StatusCode::BAD_REQUEST);
    assert_eq!(empty_title.body["field"], "title");

    let wrong_type = app
        .post(
            "/api/posts",
            json!({ "title": "t", "body": "b", "tags": "rust" }),
            cookie,
        )
        .await;
    assert_error(&wrong_type, StatusCode::BAD_REQUEST);

    let owner_override = app
        .post(
            "/api/posts",
            json!({ "title": "t", "body": "b", "tags": [], "user": { "id": "x", "username": "x" } }),
            cookie,
        )
        .await;
    assert_error(&owner_override, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_anonymous_write_with_bad_body_is_unauthorized() {
    let app = TestApp::new();
    let response = app
        .send_raw(Method::POST, "/api/posts", Some("{broken"), None)
        .await;
    assert_error(&response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_read_post() {
    let app = TestApp::new();
    let alice = app.register("alice", "pw123").await;
    let written = app.write_post(&alice, "Readable", &[]).await;
    let id = written["id"].as_str().unwrap();

    let response = app.get(&format!("/api/posts/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, written);

    let malformed = app.get("/api/posts/not-an-id", None).await;
    assert_error(&malformed, StatusCode::BAD_REQUEST);

    let absent = app
        .get(&format!("/api/posts/{}", Uuid::new_v4()), None)
        .await;
    assert_error(&absent, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_paginates_newest_first() {
    let app = TestApp::new();
    let alice = app.register("alice", "pw123").await;
    for n in 1..=23 {
        app.write_post(&alice, &format!("post {n}"), &[]).await;
    }

    let first = app.get("/api/posts", None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.header("last-page"), Some("3"));
    let first_titles = titles(&first.body);
    assert_eq!(first_titles.len(), 10);
    assert_eq!(first_titles[0], "post 23");
    assert_eq!(first_titles[9], "post 14");

    let third = app.get("/api/posts?page=3", None).await;
    assert_eq!(titles(&third.body), vec!["post 3", "post 2", "post 1"]);
    assert_eq!(third.header("last-page"), Some("3"));

    let beyond = app.get("/api/posts?page=4", None).await;
    assert_eq!(beyond.status, StatusCode::OK);
    assert_eq!(beyond.body, json!([]));
}

#[tokio::test]
async fn test_list_rejects_bad_page() {
    let app = TestApp::new();
    for page in ["0", "-2", "abc"] {
        let response = app.get(&format!("/api/posts?page={page}"), None).await;
        assert_error(&response, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_list_rejects_malformed_query_as_json() {
    let app = TestApp::new();
    let response = app.get("/api/posts?page=1&page=2", None).await;
    assert_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_empty_page_is_first() {
    let app = TestApp::new();
    let alice = app.register("alice", "pw123").await;
    app.write_post(&alice, "Only", &[]).await;

    let response = app.get("/api/posts?page=", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);
    assert_eq!(response.header("last-page"), Some("1"));
}

#[tokio::test]
async fn test_undecodable_post_id_is_json_bad_request() {
    let app = TestApp::new();
    let alice = app.register("alice", "pw123").await;

    let read = app.get("/api/posts/%FF", None).await;
    assert_error(&read, StatusCode::BAD_REQUEST);

    let removed = app.delete("/api/posts/%FF", Some(&alice.cookie)).await;
    assert_error(&removed, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_list() {
    let app = TestApp::new();
    let response = app.get("/api/posts", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
    assert_eq!(response.header("last-page"), Some("0"));
}

#[tokio::test]
async fn test_list_truncates_long_bodies() {
    let app = TestApp::new();
    let alice = app.register("alice", "pw123").await;
    let long_body = "é".repeat(250);

    let written = app
        .post(
            "/api/posts",
            json!({ "title": "Long", "body": &long_body, "tags": [] }),
            Some(&alice.cookie),
        )
        .await;
    let id = written.body["id"].as_str().unwrap().to_string();

    let listed = app.get("/api/posts", None).await;
    let preview = listed.body[0]["body"].as_str().unwrap();
    assert_eq!(preview, format!("{}...", "é".repeat(200)));

    let full = app.get(&format!("/api/posts/{id}"), None).await;
    assert_eq!(full.body["body"].as_str().unwrap(), long_body);
}

#[tokio::test]
async fn test_list_filters_by_username_and_tag() {
    let app = TestApp::new();
    let alice = app.register("alice", "pw123").await;
    let bob = app.register("bob", "pw456").await;

    app.write_post(&alice, "alice rust", &["rust"]).await;
    app.write_post(&alice, "alice cooking", &["food"]).await;
    app.write_post(&bob, "bob rust", &["rust"]).await;

    let by_alice = app.get("/api/posts?username=alice", None).await;
    assert_eq!(titles(&by_alice.body), vec!["alice cooking", "alice rust"]);
    assert_eq!(by_alice.header("last-page"), Some("1"));

    let rust = app.get("/api/posts?tag=rust", None).await;
    assert_eq!(titles(&rust.body), vec!["bob rust", "alice rust"]);

    let both = app.get("/api/posts?username=bob&tag=rust", None).await;
    assert_eq!(titles(&both.body), vec!["bob rust"]);

    let none = app.get("/api/posts?username=carol", None).await;
    assert_eq!(none.body, json!([]));
    assert_eq!(none.header("last-page"), Some("0"));
}
