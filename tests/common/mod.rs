//! Shared harness for driving the router in-process with an
//! in-memory SQLite database.

use axum::{Router, body::Body, http::Request};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use courses_api::api::router;
use courses_api::state::AppState;

pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        // A single connection keeps every query on the same :memory: database.
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create database");

        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .expect("Failed to run migrations");

        let router = router(AppState { db: db.clone() });

        Self { router, db }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.request(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn patch_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.request(
            Request::builder()
                .method("PATCH")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        TestResponse { status, body }
    }

    pub async fn course_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.db)
            .await
            .expect("Failed to count courses")
    }
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: axum::http::StatusCode,
    pub body: axum::body::Bytes,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse response as JSON")
    }
}
