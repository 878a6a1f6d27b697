//! Ownership integration tests
//!
//! Update and delete are owner-only, with checks in the order
//! identity, id, existence, ownership, body.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::{assert_error, Session, TestApp};

async fn setup() -> (TestApp, Session, Session, String) {
    let app = TestApp::new();
    let alice = app.register("alice", "pw123").await;
    let bob = app.register("bob", "pw456").await;
    let post = app.write_post(&alice, "Alice's post", &["mine"]).await;
    let uri = format!("/api/posts/{}", post["id"].as_str().unwrap());
    (app, alice, bob, uri)
}

#[tokio::test]
async fn test_owner_can_update() {
    let (app, alice, _, uri) = setup().await;

    let response = app
        .patch(&uri, json!({ "title": "Edited" }), Some(&alice.cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Edited");
    assert_eq!(response.body["body"], "Alice's post body");
    assert_eq!(response.body["tags"], json!(["mine"]));

    let stored = app.get(&uri, None).await;
    assert_eq!(stored.body["title"], "Edited");
}

#[tokio::test]
async fn test_update_rejects_null_fields() {
    let (app, alice, _, uri) = setup().await;

    for body in [json!({ "title": null }), json!({ "tags": null })] {
        let response = app.patch(&uri, body.clone(), Some(&alice.cookie)).await;
        assert_error(&response, StatusCode::BAD_REQUEST);
    }

    let stored = app.get(&uri, None).await;
    assert_eq!(stored.body["title"], "Alice's post");
    assert_eq!(stored.body["tags"], json!(["mine"]));
}

#[tokio::test]
async fn test_other_user_cannot_update() {
    let (app, _, bob, uri) = setup().await;

    let response = app
        .patch(&uri, json!({ "title": "Hijacked" }), Some(&bob.cookie))
        .await;
    assert_error(&response, StatusCode::FORBIDDEN);

    let stored = app.get(&uri, None).await;
    assert_eq!(stored.body["title"], "Alice's post");
}

#[tokio::test]
async fn test_anonymous_cannot_update() {
    let (app, _, _, uri) = setup().await;
    let response = app.patch(&uri, json!({ "title": "x" }), None).await;
    assert_error(&response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_check_order() {
    let (app, alice, bob, uri) = setup().await;

    // identity before id format
    let anonymous_bad_id = app
        .patch("/api/posts/not-an-id", json!({ "title": "x" }), None)
        .await;
    assert_error(&anonymous_bad_id, StatusCode::UNAUTHORIZED);

    // id format before existence
    let bad_id = app
        .patch("/api/posts/not-an-id", json!({ "title": "x" }), Some(&bob.cookie))
        .await;
    assert_error(&bad_id, StatusCode::BAD_REQUEST);

    // existence before ownership
    let absent = app
        .patch(
            &format!("/api/posts/{}", Uuid::new_v4()),
            json!({ "title": "x" }),
            Some(&bob.cookie),
        )
        .await;
    assert_error(&absent, StatusCode::NOT_FOUND);

    // ownership before body
    let not_owner_bad_body = app
        .send_raw(Method::PATCH, &uri, Some("{broken"), Some(&bob.cookie))
        .await;
    assert_error(&not_owner_bad_body, StatusCode::FORBIDDEN);

    let owner_bad_body = app
        .patch(&uri, json!({ "title": "" }), Some(&alice.cookie))
        .await;
    assert_error(&owner_bad_body, StatusCode::BAD_REQUEST);

    let owner_unknown_field = app
        .patch(&uri, json!({ "user": { "id": "x" } }), Some(&alice.cookie))
        .await;
    assert_error(&owner_unknown_field, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_is_owner_only() {
    let (app, alice, bob, uri) = setup().await;

    let anonymous = app.delete(&uri, None).await;
    assert_error(&anonymous, StatusCode::UNAUTHORIZED);

    let other = app.delete(&uri, Some(&bob.cookie)).await;
    assert_error(&other, StatusCode::FORBIDDEN);

    let owner = app.delete(&uri, Some(&alice.cookie)).await;
    assert_eq!(owner.status, StatusCode::NO_CONTENT);

    let gone = app.get(&uri, None).await;
    assert_error(&gone, StatusCode::NOT_FOUND);

    let again = app.delete(&uri, Some(&alice.cookie)).await;
    assert_error(&again, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_malformed_id() {
    let (app, alice, _, _) = setup().await;
    let response = app.delete("/api/posts/12345", Some(&alice.cookie)).await;
    assert_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ownership_survives_relogin() {
    let (app, _, _, uri) = setup().await;

    let login = app
        .post(
            "/api/auth/login",
            json!({ "username": "alice", "password": "pw123" }),
            None,
        )
        .await;
    let cookie = login.session_cookie().unwrap();

    let response = app.delete(&uri, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}
