//! Integration tests for session resolution and role gating.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use fake::{faker::name::en::Name, Fake};
use tower::util::ServiceExt;

use common::StubSessions;

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .header(header::AUTHORIZATION, "Bearer test-token")
        .body(Body::empty())
        .expect("request build failed")
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_me_without_session_is_401_with_login_url() {
    let pool = common::create_test_pool().await;
    let app = common::test_app(pool, StubSessions::signed_out());

    let response = app
        .oneshot(get("/api/v1/auth/me"))
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body read failed");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("body not json");
    assert_eq!(json["error"], "authentication_required");
    assert!(json["login_url"].as_str().unwrap_or("").contains("/login"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_me_without_profile_row_uses_auth_identity() {
    let pool = common::create_test_pool().await;
    let email = format!("ghost-{}@byteblitz.co.uk", uuid::Uuid::new_v4());
    let app = common::test_app(pool, StubSessions::signed_in(&email));

    let response = app
        .oneshot(get("/api/v1/auth/me"))
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body read failed");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("body not json");
    assert_eq!(json["email"], email.as_str());
    // Metadata fills the gaps; the default role applies.
    assert_eq!(json["full_name"], "Stub User");
    assert_eq!(json["role"], "user");
    assert_eq!(json["has_profile"], false);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_profile_fields_override_session_metadata() {
    let pool = common::create_test_pool().await;
    let email = format!("admin-{}@byteblitz.co.uk", uuid::Uuid::new_v4());
    let full_name: String = Name().fake();

    sqlx::query("INSERT INTO users (email, full_name, role) VALUES ($1, $2, 'admin')")
        .bind(&email)
        .bind(&full_name)
        .execute(&pool)
        .await
        .expect("profile insert failed");

    let app = common::test_app(pool, StubSessions::signed_in(&email));

    let response = app
        .oneshot(get("/api/v1/auth/me"))
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body read failed");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("body not json");
    assert_eq!(json["full_name"], full_name.as_str());
    assert_eq!(json["role"], "admin");
    assert_eq!(json["has_profile"], true);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_admin_routes_reject_regular_members() {
    let pool = common::create_test_pool().await;
    let email = format!("rep-{}@byteblitz.co.uk", uuid::Uuid::new_v4());

    sqlx::query("INSERT INTO users (email, role) VALUES ($1, 'user')")
        .bind(&email)
        .execute(&pool)
        .await
        .expect("profile insert failed");

    let app = common::test_app(pool, StubSessions::signed_in(&email));

    let response = app
        .oneshot(get("/api/v1/admin/overview"))
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
