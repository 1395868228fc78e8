use async_trait::async_trait;
use entity::models::users::{self, Entity as Users};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use serde_json::{Map, Value};

use super::{NewUser, UserStore};

#[derive(Clone)]
pub struct SeaOrmUserStore {
    conn: DatabaseConnection,
}

impl SeaOrmUserStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.conn.close().await
    }
}

#[async_trait]
impl UserStore for SeaOrmUserStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<users::Model>, DbErr> {
        Users::find_by_id(id).one(&self.conn).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<users::Model>, DbErr> {
        Users::find_by_username(username).one(&self.conn).await
    }

    async fn all(&self) -> Result<Vec<users::Model>, DbErr> {
        Users::find().order_by_asc(users::Column::Id).all(&self.conn).await
    }

    async fn insert(&self, payload: Map<String, Value>) -> Result<users::Model, DbErr> {
        let new_user = NewUser::from_payload(payload)?;

        users::ActiveModel {
            username: Set(new_user.username),
            unity_best_score: Set(new_user.unity_best_score),
            unreal_best_time: Set(new_user.unreal_best_time),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
    }

    async fn raise_best_score(&self, id: i32, score: i32) -> Result<Option<users::Model>, DbErr> {
        let result = Users::update_best_score(id, score).exec(&self.conn).await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn lower_best_time(&self, id: i32, time: f64) -> Result<Option<users::Model>, DbErr> {
        let result = Users::update_best_time(id, time).exec(&self.conn).await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }
}
