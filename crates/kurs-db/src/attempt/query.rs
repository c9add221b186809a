use kurs_entity::attempt::{self, Entity as AttemptEntity, Model as Attempt};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn all_for_test<C: ConnectionTrait>(conn: &C, test_id: i32) -> Result<Vec<Attempt>, DbErr> {
        let res = AttemptEntity::find()
            .filter(attempt::Column::TestId.eq(test_id))
            .order_by_asc(attempt::Column::Id)
            .all(conn)
            .await;
        res.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, test_id, "failed to load attempts");
        })
    }
}
