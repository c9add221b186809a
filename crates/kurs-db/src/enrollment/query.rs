use kurs_entity::discipline;
use kurs_entity::user_discipline::{self, Entity as UserDisciplineEntity};
use sea_orm::prelude::*;
use sea_orm::{JoinType, QueryOrder, QuerySelect, RelationTrait};
use std::error::Error;

pub struct Query;

impl Query {
    /// Members of an undeleted discipline, by user id. A soft-deleted discipline has none.
    pub async fn user_ids<C: ConnectionTrait>(conn: &C, discipline_id: i32) -> Result<Vec<i32>, DbErr> {
        let res = UserDisciplineEntity::find()
            .select_only()
            .column(user_discipline::Column::UserId)
            .join(JoinType::InnerJoin, user_discipline::Relation::Discipline.def())
            .filter(user_discipline::Column::DisciplineId.eq(discipline_id))
            .filter(discipline::Column::IsDeleted.eq(false))
            .order_by_asc(user_discipline::Column::UserId)
            .into_tuple()
            .all(conn)
            .await;
        res.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, discipline_id, "failed to load enrolled users");
        })
    }

    pub async fn is_enrolled<C: ConnectionTrait>(conn: &C, user_id: i32, discipline_id: i32) -> Result<bool, DbErr> {
        let res = UserDisciplineEntity::find_by_id((user_id, discipline_id)).one(conn).await;
        res.map(|enrollment| enrollment.is_some()).inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, user_id, discipline_id, "failed to load enrollment");
        })
    }
}
