use std::sync::Arc;

use async_trait::async_trait;
use entity::models::users;
use sea_orm::DbErr;
use serde::Deserialize;
use serde_json::{Map, Value};

pub mod sea_orm_store;

pub use sea_orm_store::SeaOrmUserStore;

pub type DynUserStore = Arc<dyn UserStore>;

/// Single-table access to user rows.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<users::Model>, DbErr>;

    async fn find_by_username(&self, username: &str) -> Result<Option<users::Model>, DbErr>;

    async fn all(&self) -> Result<Vec<users::Model>, DbErr>;

    /// Inserts the submitted object as a new row. Keys must name writable
    /// columns; anything else is rejected by the store.
    async fn insert(&self, payload: Map<String, Value>) -> Result<users::Model, DbErr>;

    /// Writes `score` only when it beats the stored value. Returns the updated
    /// row, or `None` when nothing was written.
    async fn raise_best_score(&self, id: i32, score: i32) -> Result<Option<users::Model>, DbErr>;

    /// Writes `time` only when it beats the stored value. Returns the updated
    /// row, or `None` when nothing was written.
    async fn lower_best_time(&self, id: i32, time: f64) -> Result<Option<users::Model>, DbErr>;
}

/// Columns a client may supply on creation.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub unity_best_score: Option<i32>,
    pub unreal_best_time: Option<f64>,
}

impl NewUser {
    pub fn from_payload(payload: Map<String, Value>) -> Result<Self, DbErr> {
        serde_json::from_value(Value::Object(payload)).map_err(|e| DbErr::Json(e.to_string()))
    }
}
