//! Integration tests for the configuration resolver.

mod common;

use persistence::repositories::AppConfigurationRepository;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_resolve_seeds_exactly_once() {
    let pool = common::create_test_pool().await;

    sqlx::query("TRUNCATE app_configurations")
        .execute(&pool)
        .await
        .expect("truncate failed");

    let repo = AppConfigurationRepository::new(pool.clone());

    let first = repo.resolve().await.expect("first resolve failed");
    assert_eq!(first.app_name, "ByteBlitz Staff Hub");
    assert_eq!(first.navigation_items.len(), 5);
    assert_eq!(first.external_tools.len(), 5);

    let second = repo.resolve().await.expect("second resolve failed");
    assert_eq!(second.id, first.id);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM app_configurations")
        .fetch_one(&pool)
        .await
        .expect("count failed");
    assert_eq!(count, 1, "resolve must not seed a duplicate row");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_resolve_prefers_oldest_row() {
    let pool = common::create_test_pool().await;

    sqlx::query("TRUNCATE app_configurations")
        .execute(&pool)
        .await
        .expect("truncate failed");

    sqlx::query(
        "INSERT INTO app_configurations (app_name, app_tagline, created_at)
         VALUES ('Older', '', NOW() - INTERVAL '1 hour'),
                ('Newer', '', NOW())",
    )
    .execute(&pool)
    .await
    .expect("seed failed");

    let repo = AppConfigurationRepository::new(pool);
    let resolved = repo.resolve().await.expect("resolve failed");
    assert_eq!(resolved.app_name, "Older");
}
