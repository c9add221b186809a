use crate::Error;
use crate::error::DbResultExt;
use crate::validation::require_name;
use kurs_db::util::{FlattenTransactionResultExt, RequireRecord};
use kurs_model::discipline::{Discipline, DisciplineDetail};
use kurs_model_tools::convert::IntoModel;
use sea_orm::{ConnectionTrait, TransactionTrait};

pub async fn list_disciplines<C: ConnectionTrait>(conn: &C) -> Result<Vec<Discipline>, Error> {
    let disciplines = kurs_db::discipline::Query::all(conn).await.context("list disciplines")?;
    Ok(disciplines.into_iter().map(IntoModel::into_model).collect())
}

pub async fn get_discipline<C: ConnectionTrait>(conn: &C, id: i32) -> Result<DisciplineDetail, Error> {
    let discipline = kurs_db::discipline::Query::find_by_id(conn, id)
        .await
        .require(&format!("discipline {id}"))
        .context("get discipline")?;
    Ok(discipline.into_model())
}

/// Creates a discipline owned by `teacher_id` and returns its id.
///
/// The teacher must exist, otherwise the insert fails with [`Error::ConstraintViolation`].
pub async fn create_discipline<C: ConnectionTrait>(
    conn: &C,
    name: String,
    description: String,
    teacher_id: i32,
) -> Result<i32, Error> {
    const OPERATION: &str = "create discipline";
    require_name(OPERATION, &name)?;

    let discipline = kurs_db::discipline::Mutation::create(conn, name, description, teacher_id)
        .await
        .context(OPERATION)?;
    tracing::info!(discipline_id = discipline.id, teacher_id, "discipline created");
    Ok(discipline.id)
}

/// Partial update. The write and the read-back share one transaction, so the returned detail is
/// the row this call produced.
pub async fn update_discipline<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    id: i32,
    name: Option<String>,
    description: Option<String>,
) -> Result<DisciplineDetail, Error> {
    const OPERATION: &str = "update discipline";
    if let Some(name) = &name {
        require_name(OPERATION, name)?;
    }

    let discipline = conn
        .transaction(|txn| {
            Box::pin(async move {
                kurs_db::discipline::Mutation::update(txn, id, name, description)
                    .await
                    .context(OPERATION)
            })
        })
        .await
        .flatten_res()?;
    Ok(discipline.into_model())
}

/// Hides the discipline from every listing and from progress reports. Its tests, attempts and
/// enrollments stay in place. Deleting twice is fine.
pub async fn delete_discipline<C: ConnectionTrait>(conn: &C, id: i32) -> Result<(), Error> {
    kurs_db::discipline::Mutation::mark_deleted(conn, id)
        .await
        .context("delete discipline")?;
    tracing::info!(discipline_id = id, "discipline deleted");
    Ok(())
}
