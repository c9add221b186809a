use kurs_entity::attempt::{self, ActiveModel, Entity as AttemptEntity, Status};
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::sea_query::Expr;
use std::error::Error;

pub struct Mutation;

impl Mutation {
    /// Force-submits every unfinished attempt on a test.
    ///
    /// `completed_at` is stamped with the database clock, the same one that fills `started_at`.
    /// Returns the number of attempts that were completed.
    pub async fn complete_in_progress<C: ConnectionTrait>(conn: &C, test_id: i32) -> Result<u64, DbErr> {
        let data = ActiveModel {
            status: Set(Status::Completed),
            ..Default::default()
        };
        let res = AttemptEntity::update_many()
            .set(data)
            .col_expr(attempt::Column::CompletedAt, Expr::current_timestamp().into())
            .filter(attempt::Column::TestId.eq(test_id))
            .filter(attempt::Column::Status.eq(Status::InProgress))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, test_id, "failed to complete attempts");
            })?;

        tracing::debug!(test_id, completed = res.rows_affected, "completed in-progress attempts");
        Ok(res.rows_affected)
    }
}
