use kurs_entity::user_discipline::{self, ActiveModel, Entity as UserDisciplineEntity};
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::{TryInsertResult, sea_query};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    /// Insert-if-absent, enrolling twice leaves a single membership row.
    pub async fn enroll<C: ConnectionTrait>(conn: &C, user_id: i32, discipline_id: i32) -> Result<(), DbErr> {
        let enrollment = ActiveModel {
            user_id: Set(user_id),
            discipline_id: Set(discipline_id),
        };
        let res = UserDisciplineEntity::insert(enrollment)
            .on_conflict(
                sea_query::OnConflict::columns([
                    user_discipline::Column::UserId,
                    user_discipline::Column::DisciplineId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .do_nothing()
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, user_id, discipline_id, "failed to enroll user");
            })?;

        match res {
            TryInsertResult::Inserted(_) => tracing::debug!(user_id, discipline_id, "enrolled user"),
            TryInsertResult::Empty | TryInsertResult::Conflicted => {
                tracing::debug!(user_id, discipline_id, "user already enrolled");
            }
        }
        Ok(())
    }

    /// Hard delete. Returns whether a membership row existed.
    pub async fn unenroll<C: ConnectionTrait>(conn: &C, user_id: i32, discipline_id: i32) -> Result<bool, DbErr> {
        let res = UserDisciplineEntity::delete_many()
            .filter(user_discipline::Column::UserId.eq(user_id))
            .filter(user_discipline::Column::DisciplineId.eq(discipline_id))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, user_id, discipline_id, "failed to unenroll user");
            })?;

        let removed = res.rows_affected > 0;
        tracing::debug!(user_id, discipline_id, removed, "unenrolled user");
        Ok(removed)
    }
}
