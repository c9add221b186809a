use kurs_entity::user::{self, Entity as UserEntity, Model as User};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn all<C: ConnectionTrait>(conn: &C) -> Result<Vec<User>, DbErr> {
        UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error loading users");
            })
    }

    pub async fn find_user_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<User>, DbErr> {
        UserEntity::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, user_id = id, "error loading user");
        })
    }
}
