#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use entity::models::users;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbErr};
use serde_json::{Map, Value};
use tower::ServiceExt;
use vela::state::AppState;
use vela::store::{DynUserStore, SeaOrmUserStore, UserStore};

pub async fn sqlite_store() -> SeaOrmUserStore {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    // One connection keeps every query on the same in-memory database.
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let connection = Database::connect(options).await.unwrap();
    Migrator::up(&connection, None).await.unwrap();

    SeaOrmUserStore::new(connection)
}

pub async fn test_app() -> Router {
    app_with(Arc::new(sqlite_store().await))
}

pub fn app_with(store: DynUserStore) -> Router {
    vela::app(AppState { store })
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, body)
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn create(app: &Router, username: &str) -> i64 {
    let (status, body) = send(
        app,
        json_request(Method::POST, "/api/user", serde_json::json!({ "username": username })),
    )
    .await;
    assert!(status == StatusCode::CREATED || status == StatusCode::OK, "{status}: {body}");
    body["id"].as_i64().unwrap()
}

/// Store whose every call fails the way an unreachable database would.
pub struct UnreachableStore;

fn unreachable_db() -> DbErr {
    DbErr::Custom("database is unreachable".to_string())
}

#[async_trait]
impl UserStore for UnreachableStore {
    async fn find_by_id(&self, _id: i32) -> Result<Option<users::Model>, DbErr> {
        Err(unreachable_db())
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<users::Model>, DbErr> {
        Err(unreachable_db())
    }

    async fn all(&self) -> Result<Vec<users::Model>, DbErr> {
        Err(unreachable_db())
    }

    async fn insert(&self, _payload: Map<String, Value>) -> Result<users::Model, DbErr> {
        Err(unreachable_db())
    }

    async fn raise_best_score(&self, _id: i32, _score: i32) -> Result<Option<users::Model>, DbErr> {
        Err(unreachable_db())
    }

    async fn lower_best_time(&self, _id: i32, _time: f64) -> Result<Option<users::Model>, DbErr> {
        Err(unreachable_db())
    }
}
