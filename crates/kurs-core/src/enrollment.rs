use crate::Error;
use crate::error::DbResultExt;
use kurs_db::util::{FlattenTransactionResultExt, RequireRecord};
use kurs_model::discipline::StudentRef;
use kurs_model_tools::convert::IntoModel;
use sea_orm::{ConnectionTrait, TransactionTrait};

/// Users enrolled in a discipline, ordered by user id. Unknown and soft-deleted disciplines have
/// no students.
pub async fn list_students<C: ConnectionTrait>(conn: &C, discipline_id: i32) -> Result<Vec<StudentRef>, Error> {
    let user_ids = kurs_db::enrollment::Query::user_ids(conn, discipline_id)
        .await
        .context("list students")?;
    Ok(user_ids.into_iter().map(IntoModel::into_model).collect())
}

/// Adds the membership if it is missing. Enrolling an already enrolled user succeeds.
///
/// The discipline must exist and not be soft-deleted, otherwise this is [`Error::NotFound`].
pub async fn enroll<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    user_id: i32,
    discipline_id: i32,
) -> Result<(), Error> {
    const OPERATION: &str = "enroll";
    conn.transaction(|txn| {
        Box::pin(async move {
            kurs_db::discipline::Query::find_by_id(txn, discipline_id)
                .await
                .require(&format!("discipline {discipline_id}"))
                .context(OPERATION)?;
            kurs_db::enrollment::Mutation::enroll(txn, user_id, discipline_id)
                .await
                .context(OPERATION)
        })
    })
    .await
    .flatten_res()
}

/// Removes the membership if present, also from a soft-deleted discipline. Returns whether the
/// user was enrolled.
pub async fn unenroll<C: ConnectionTrait>(conn: &C, user_id: i32, discipline_id: i32) -> Result<bool, Error> {
    kurs_db::enrollment::Mutation::unenroll(conn, user_id, discipline_id)
        .await
        .context("unenroll")
}

pub async fn is_enrolled<C: ConnectionTrait>(conn: &C, user_id: i32, discipline_id: i32) -> Result<bool, Error> {
    kurs_db::enrollment::Query::is_enrolled(conn, user_id, discipline_id)
        .await
        .context("check enrollment")
}
