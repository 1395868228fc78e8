use sea_orm::entity::prelude::*;
use sea_orm::{sea_query::Expr, Condition, UpdateMany};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(column_name = "unityBestScore", nullable)]
    pub unity_best_score: Option<i32>,
    #[sea_orm(column_name = "unrealBestTime", column_type = "Double", nullable)]
    pub unreal_best_time: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    pub fn find_by_username(username: &str) -> Select<Entity> {
        Self::find().filter(Column::Username.eq(username))
    }

    /// Rows whose stored score is missing or strictly below `score`.
    pub fn update_best_score(id: i32, score: i32) -> UpdateMany<Entity> {
        Self::update_many()
            .col_expr(Column::UnityBestScore, Expr::value(score))
            .filter(Column::Id.eq(id))
            .filter(
                Condition::any()
                    .add(Column::UnityBestScore.is_null())
                    .add(Column::UnityBestScore.lt(score)),
            )
    }

    /// Rows whose stored time is missing or strictly above `time`.
    pub fn update_best_time(id: i32, time: f64) -> UpdateMany<Entity> {
        Self::update_many()
            .col_expr(Column::UnrealBestTime, Expr::value(time))
            .filter(Column::Id.eq(id))
            .filter(
                Condition::any()
                    .add(Column::UnrealBestTime.is_null())
                    .add(Column::UnrealBestTime.gt(time)),
            )
    }
}
