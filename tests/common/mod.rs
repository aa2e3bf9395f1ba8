//! Shared harness: a fresh SQLite file per test, the full router, and request helpers.

#![allow(dead_code)]

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use str_games::{app_router, store, AppState, Settings};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(Settings::default()).await
}

pub async fn spawn_app_with(mut settings: Settings) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    settings.database_path = dir.path().join("games.db");
    let pool = store::connect(&settings).await.unwrap();
    store::ensure_tables(&pool).await.unwrap();
    let state = AppState::new(pool, settings);
    TestApp {
        router: app_router(state.clone()),
        state,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> TestResponse {
        self.send_json(Method::POST, uri, body).await
    }

    pub async fn put_json(&self, uri: &str, body: &str) -> TestResponse {
        self.send_json(Method::PUT, uri, body).await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// POST a game and return the created JSON.
    pub async fn create_game(&self, name: &str, studio: &str, year: i64, sold: i64) -> serde_json::Value {
        let body = serde_json::json!({ "name": name, "studio": studio, "year": year, "sold": sold });
        let response = self.post_json("/strGames", &body.to_string()).await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.json()
    }
}
