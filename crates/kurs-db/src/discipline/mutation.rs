use crate::util::{RequireAffected, RequireRecord};
use kurs_entity::discipline::{self, ActiveModel, Entity as DisciplineEntity, Model as Discipline};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::prelude::*;
use std::error::Error;

use super::Query;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        name: String,
        description: String,
        teacher_id: i32,
    ) -> Result<Discipline, DbErr> {
        let discipline = ActiveModel {
            name: Set(name),
            description: Set(description),
            teacher_id: Set(teacher_id),
            is_deleted: Set(false),
            ..Default::default()
        };
        let res = discipline.insert(conn).await;
        if let Ok(discipline) = &res {
            tracing::debug!(discipline_id = discipline.id, teacher_id, "created discipline");
        }
        res.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, teacher_id, "failed to create discipline");
        })
    }

    /// Partial update, fields passed as `None` keep their stored value.
    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        id: i32,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Discipline, DbErr> {
        if name.is_none() && description.is_none() {
            return Query::find_by_id(conn, id).await.require(&format!("discipline {id}"));
        }

        let data = ActiveModel {
            name: name.map_or(NotSet, Set),
            description: description.map_or(NotSet, Set),
            ..Default::default()
        };
        DisciplineEntity::update_many()
            .set(data)
            .filter(discipline::Column::Id.eq(id))
            .filter(discipline::Column::IsDeleted.eq(false))
            .exec(conn)
            .await
            .require_affected(&format!("discipline {id}"))
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, discipline_id = id, "failed to update discipline");
            })?;

        Query::find_by_id(conn, id).await.require(&format!("discipline {id}"))
    }

    /// Soft delete. Marking an already deleted discipline again succeeds.
    pub async fn mark_deleted<C: ConnectionTrait>(conn: &C, id: i32) -> Result<(), DbErr> {
        let data = ActiveModel {
            is_deleted: Set(true),
            ..Default::default()
        };
        DisciplineEntity::update_many()
            .set(data)
            .filter(discipline::Column::Id.eq(id))
            .exec(conn)
            .await
            .require_affected(&format!("discipline {id}"))
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, discipline_id = id, "failed to delete discipline");
            })?;
        Ok(())
    }
}
