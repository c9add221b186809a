use crate::util::RequireAffected;
use kurs_entity::user::{self, ActiveModel, Entity as UserEntity};
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn rename<C: ConnectionTrait>(conn: &C, user_id: i32, full_name: String) -> Result<(), DbErr> {
        let data = ActiveModel {
            full_name: Set(full_name),
            ..Default::default()
        };
        UserEntity::update_many()
            .set(data)
            .filter(user::Column::Id.eq(user_id))
            .exec(conn)
            .await
            .require_affected(&format!("user {user_id}"))
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, user_id, "failed to rename user");
            })?;
        Ok(())
    }
}
