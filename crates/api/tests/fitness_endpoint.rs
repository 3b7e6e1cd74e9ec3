// Integration tests for the mock fitness endpoint over a real socket

use api::{create_router, ApiConfig, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

async fn spawn_server() -> SocketAddr {
    let state = AppState::new(&ApiConfig::default(), None).unwrap();
    let app = create_router(Arc::new(RwLock::new(state)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_api_response_status() {
    let addr = spawn_server().await;
    let response = reqwest::get(format!("http://{addr}/fitness-data"))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_api_response_structure() {
    let addr = spawn_server().await;
    let data: serde_json::Value = reqwest::get(format!("http://{addr}/fitness-data"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    for key in ["user_id", "timestamp", "steps", "heart_rate"] {
        assert!(data.get(key).is_some(), "missing {key}");
    }
}

#[tokio::test]
async fn test_invalid_user_id() {
    let addr = spawn_server().await;
    let response = reqwest::get(format!("http://{addr}/fitness-data?user_id=11"))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let error_data: serde_json::Value = response.json().await.unwrap();
    assert!(error_data.get("error").is_some());
}

#[tokio::test]
async fn test_health_endpoint() {
    let addr = spawn_server().await;
    let health: serde_json::Value = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
}
