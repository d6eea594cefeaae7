//! Integration tests for the member-facing views (leads export,
//! commissions).

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
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

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body read failed");
    String::from_utf8(bytes.to_vec()).expect("body not utf-8")
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_lead_export_renders_quoted_csv() {
    let pool = common::create_test_pool().await;
    let email = format!("rep-{}@byteblitz.co.uk", uuid::Uuid::new_v4());

    sqlx::query(
        "INSERT INTO leads (company_name, contact_name, status, assigned_to, notes)
         VALUES ('Acme', 'Jo', 'booked', $1, 'said \"call back\"')",
    )
    .bind(&email)
    .execute(&pool)
    .await
    .expect("lead insert failed");

    let app = common::test_app(pool, StubSessions::signed_in(&email));
    let response = app
        .oneshot(get("/api/v1/leads/export"))
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .starts_with("text/csv"));

    let csv = body_string(response).await;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "\"Company\",\"Contact\",\"Email\",\"Phone\",\"Industry\",\"Region\",\"Status\",\"Notes\""
    );
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("\"Acme\",\"Jo\""));
    // Embedded quotes are doubled so the notes column survives.
    assert!(lines[1].ends_with("\"said \"\"call back\"\"\""));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_commissions_unpaid_total_excludes_paid_rows() {
    let pool = common::create_test_pool().await;
    let email = format!("rep-{}@byteblitz.co.uk", uuid::Uuid::new_v4());

    sqlx::query(
        "INSERT INTO sales (client_name, rep_email, sale_amount, commission_amount, commission_paid, payment_status)
         VALUES ('Unpaid Client', $1, 500, 50.00, FALSE, 'pending'),
                ('Paid Client', $1, 300, 30.00, TRUE, 'paid')",
    )
    .bind(&email)
    .execute(&pool)
    .await
    .expect("sales insert failed");

    let app = common::test_app(pool, StubSessions::signed_in(&email));
    let response = app
        .oneshot(get("/api/v1/commissions"))
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value =
        serde_json::from_str(&body_string(response).await).expect("body not json");
    assert_eq!(json["summary"]["total_sales"], 2);
    assert_eq!(json["summary"]["total_earned"], 80.0);
    assert_eq!(json["summary"]["pending_payout"], 50.0);
    assert_eq!(json["summary"]["paid_out"], 30.0);
}
