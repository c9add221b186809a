use chrono::NaiveDateTime;
use kurs_entity::attempt::{self, Status as AttemptStatus};
use kurs_entity::{discipline, test, user_discipline};
use sea_orm::prelude::*;
use sea_orm::sea_query::{Condition, Expr};
use sea_orm::{FromQueryResult, JoinType, QueryOrder, QuerySelect, RelationTrait};
use std::error::Error;

/// One flat row of a user's progress: a discipline, one of its active tests and, when the user
/// completed it, one completed attempt.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct ProgressRow {
    pub discipline_id: i32,
    pub discipline_name: String,
    pub discipline_description: String,
    pub test_id: i32,
    pub test_name: String,
    pub test_is_active: bool,
    pub test_version: i32,
    pub attempt_score: Option<i32>,
    pub attempt_status: Option<AttemptStatus>,
    pub attempt_started_at: Option<NaiveDateTime>,
    pub attempt_completed_at: Option<NaiveDateTime>,
}

pub struct Query;

impl Query {
    /// Rows for every enrolled, undeleted discipline joined with its active undeleted tests and the
    /// user's completed attempts on them.
    ///
    /// The inner join on tests drops disciplines without a qualifying test. Attempts are left
    /// joined, so a test without a completed attempt still yields one row with empty attempt
    /// columns. Rows come ordered by discipline name, then test id.
    pub async fn rows_for_user<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<Vec<ProgressRow>, DbErr> {
        let completed = AttemptStatus::Completed.to_value();
        let res = user_discipline::Entity::find()
            .select_only()
            .column_as(discipline::Column::Id, "discipline_id")
            .column_as(discipline::Column::Name, "discipline_name")
            .column_as(discipline::Column::Description, "discipline_description")
            .column_as(test::Column::Id, "test_id")
            .column_as(test::Column::Name, "test_name")
            .column_as(test::Column::IsActive, "test_is_active")
            .column_as(test::Column::Version, "test_version")
            .column_as(attempt::Column::Score, "attempt_score")
            .column_as(attempt::Column::Status, "attempt_status")
            .column_as(attempt::Column::StartedAt, "attempt_started_at")
            .column_as(attempt::Column::CompletedAt, "attempt_completed_at")
            .join(JoinType::InnerJoin, user_discipline::Relation::Discipline.def())
            .join(JoinType::InnerJoin, discipline::Relation::Test.def())
            .join(
                JoinType::LeftJoin,
                test::Relation::Attempt.def().on_condition(move |_left, right| {
                    Condition::all()
                        .add(Expr::col((right.clone(), attempt::Column::UserId)).eq(user_id))
                        .add(Expr::col((right, attempt::Column::Status)).eq(completed.clone()))
                }),
            )
            .filter(user_discipline::Column::UserId.eq(user_id))
            .filter(discipline::Column::IsDeleted.eq(false))
            .filter(test::Column::IsActive.eq(true))
            .filter(test::Column::IsDeleted.eq(false))
            .order_by_asc(discipline::Column::Name)
            .order_by_asc(test::Column::Id)
            .into_model::<ProgressRow>()
            .all(conn)
            .await;
        res.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, user_id, "failed to load user progress");
        })
    }
}
