use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::features::categories::dtos::CreateCategoryDto;
use crate::features::categories::CategoryService;
use crate::features::devices::dtos::CreateDeviceDto;
use crate::features::devices::DeviceService;
use crate::features::guides::dtos::{CreateGuideDto, GuideStepDto};
use crate::features::guides::GuideService;
use crate::features::router;
use crate::shared::test_helpers::test_pool;

struct TestApp {
    server: TestServer,
    pool: SqlitePool,
    categories: Arc<CategoryService>,
    devices: Arc<DeviceService>,
    guides: Arc<GuideService>,
}

async fn spawn_app() -> TestApp {
    let pool: SqlitePool = test_pool().await;
    let categories = Arc::new(CategoryService::new(pool.clone()));
    let devices = Arc::new(DeviceService::new(pool.clone()));
    let guides = Arc::new(GuideService::new(pool.clone()));

    let app = router(
        Arc::clone(&categories),
        Arc::clone(&devices),
        Arc::clone(&guides),
    );

    TestApp {
        server: TestServer::new(app).unwrap(),
        pool,
        categories,
        devices,
        guides,
    }
}

/// Apple / iPhone 11 / battery guide, plus an iPad without guides
async fn seed_apple(app: &TestApp) {
    let apple = app
        .categories
        .create(CreateCategoryDto {
            name: "Apple".to_string(),
            slug: "apple".to_string(),
        })
        .await
        .unwrap();

    let iphone = app
        .devices
        .create(CreateDeviceDto {
            name: "iPhone 11".to_string(),
            slug: "iphone-11".to_string(),
            category_id: apple.id,
            image_url: Some("https://example.com/iphone11.jpg".to_string()),
        })
        .await
        .unwrap();

    app.devices
        .create(CreateDeviceDto {
            name: "iPad".to_string(),
            slug: "ipad".to_string(),
            category_id: apple.id,
            image_url: None,
        })
        .await
        .unwrap();

    app.guides
        .create(CreateGuideDto {
            title: "iPhone 11 Battery Replacement".to_string(),
            slug: "iphone-11-battery-replacement".to_string(),
            device_id: iphone.id,
            difficulty: Some("Moderate".to_string()),
            time_required: Some("30-60 minutes".to_string()),
            tools_required: vec!["Spudger".to_string()],
            parts_required: vec!["Battery".to_string()],
            steps: vec![GuideStepDto {
                title: "Power off".to_string(),
                description: "Before beginning, power off your iPhone completely.".to_string(),
            }],
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_device_guides_end_to_end() {
    let app = spawn_app().await;
    seed_apple(&app).await;

    let response = app.server.get("/api/devices/iphone-11/guides").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["data"]["device"]["slug"], json!("iphone-11"));
    assert_eq!(body["data"]["device"]["category_slug"], json!("apple"));

    let guide = &body["data"]["guides"][0];
    assert_eq!(guide["slug"], json!("iphone-11-battery-replacement"));
    assert_eq!(guide["tools_required"], json!(["Spudger"]));
    assert_eq!(guide["parts_required"], json!(["Battery"]));
    assert_eq!(
        guide["steps"],
        json!([{
            "title": "Power off",
            "description": "Before beginning, power off your iPhone completely."
        }])
    );
}

#[tokio::test]
async fn test_device_without_guides_is_ok_with_zero_count() {
    let app = spawn_app().await;
    seed_apple(&app).await;

    let response = app.server.get("/api/devices/ipad/guides").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(0));
    assert_eq!(body["data"]["guides"], json!([]));
}

#[tokio::test]
async fn test_list_categories() {
    let app = spawn_app().await;
    seed_apple(&app).await;

    let response = app.server.get("/api/categories").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["data"][0]["name"], json!("Apple"));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_list_categories_empty() {
    let app = spawn_app().await;

    let body: Value = app.server.get("/api/categories").await.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["count"], json!(0));
}

#[tokio::test]
async fn test_get_category_has_no_count() {
    let app = spawn_app().await;
    seed_apple(&app).await;

    let response = app.server.get("/api/categories/apple").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["data"]["slug"], json!("apple"));
    assert!(body.get("count").is_none());
}

#[tokio::test]
async fn test_created_at_uses_sqlite_text_format() {
    let app = spawn_app().await;
    sqlx::query(
        "INSERT INTO categories (name, slug, created_at) VALUES ('Google', 'google', '2025-06-01 10:00:00')",
    )
    .execute(&app.pool)
    .await
    .unwrap();

    let body: Value = app.server.get("/api/categories/google").await.json();
    assert_eq!(body["data"]["created_at"], json!("2025-06-01 10:00:00"));
}

#[tokio::test]
async fn test_category_devices() {
    let app = spawn_app().await;
    seed_apple(&app).await;

    let body: Value = app.server.get("/api/categories/apple/devices").await.json();
    assert_eq!(body["count"], json!(2));
    assert_eq!(body["data"]["category"]["slug"], json!("apple"));
    // "iPad" sorts before "iPhone 11"
    assert_eq!(body["data"]["devices"][0]["slug"], json!("ipad"));
    assert_eq!(body["data"]["devices"][1]["slug"], json!("iphone-11"));
}

#[tokio::test]
async fn test_list_devices_and_guides() {
    let app = spawn_app().await;
    seed_apple(&app).await;

    let devices: Value = app.server.get("/api/devices").await.json();
    assert_eq!(devices["count"], json!(2));
    assert_eq!(devices["data"][0]["category_name"], json!("Apple"));

    let guides: Value = app.server.get("/api/guides").await.json();
    assert_eq!(guides["count"], json!(1));
    assert_eq!(guides["data"][0]["device_slug"], json!("iphone-11"));
    assert_eq!(guides["data"][0]["category_slug"], json!("apple"));
}

#[tokio::test]
async fn test_get_device_and_guide() {
    let app = spawn_app().await;
    seed_apple(&app).await;

    let device: Value = app.server.get("/api/devices/iphone-11").await.json();
    assert_eq!(device["data"]["name"], json!("iPhone 11"));

    let guide: Value = app
        .server
        .get("/api/guides/iphone-11-battery-replacement")
        .await
        .json();
    assert_eq!(guide["data"]["difficulty"], json!("Moderate"));
    assert_eq!(guide["data"]["time_required"], json!("30-60 minutes"));
}

#[tokio::test]
async fn test_unknown_slugs_are_404() {
    let app = spawn_app().await;
    seed_apple(&app).await;

    let cases = [
        ("/api/categories/nonexistent", "Category not found"),
        ("/api/categories/nonexistent/devices", "Category not found"),
        ("/api/devices/nonexistent", "Device not found"),
        ("/api/devices/nonexistent/guides", "Device not found"),
        ("/api/guides/nonexistent", "Guide not found"),
    ];

    for (path, message) in cases {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "{}", path);

        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["error"], json!(message));
    }
}

#[tokio::test]
async fn test_unknown_route_uses_error_envelope() {
    let app = spawn_app().await;

    let response = app.server.get("/api/widgets").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], json!("Route not found"));
}

#[tokio::test]
async fn test_service_info_and_health() {
    let app = spawn_app().await;

    let info: Value = app.server.get("/").await.json();
    assert_eq!(info["data"]["status"], json!("running"));
    assert_eq!(info["data"]["version"], json!(env!("CARGO_PKG_VERSION")));

    let health = app.server.get("/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_storage_failure_is_500_envelope() {
    let app = spawn_app().await;
    seed_apple(&app).await;

    sqlx::query("DROP TABLE guides")
        .execute(&app.pool)
        .await
        .unwrap();

    let response = app.server.get("/api/guides").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Database error occurred"));
}
