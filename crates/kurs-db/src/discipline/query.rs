use kurs_entity::discipline::{self, Entity as DisciplineEntity, Model as Discipline};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use std::error::Error;

pub struct Query;

impl Query {
    /// All disciplines that have not been soft-deleted, by id.
    pub async fn all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Discipline>, DbErr> {
        let res = DisciplineEntity::find()
            .filter(discipline::Column::IsDeleted.eq(false))
            .order_by_asc(discipline::Column::Id)
            .all(conn)
            .await;
        res.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load disciplines");
        })
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Discipline>, DbErr> {
        let res = DisciplineEntity::find_by_id(id)
            .filter(discipline::Column::IsDeleted.eq(false))
            .one(conn)
            .await;
        res.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, discipline_id = id, "failed to load discipline");
        })
    }
}
