use crate::Error;
use crate::error::DbResultExt;
use crate::validation::require_name;
use kurs_db::util::RequireRecord;
use kurs_model::user::User;
use kurs_model_tools::convert::IntoModel;
use sea_orm::ConnectionTrait;

pub async fn list_users<C: ConnectionTrait>(conn: &C) -> Result<Vec<User>, Error> {
    let users = kurs_db::user::Query::all(conn).await.context("list users")?;
    Ok(users.into_iter().map(IntoModel::into_model).collect())
}

pub async fn get_user_name<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<String, Error> {
    let user = kurs_db::user::Query::find_user_by_id(conn, user_id)
        .await
        .require(&format!("user {user_id}"))
        .context("get user name")?;
    Ok(user.full_name)
}

pub async fn rename_user<C: ConnectionTrait>(conn: &C, user_id: i32, full_name: String) -> Result<(), Error> {
    const OPERATION: &str = "rename user";
    require_name(OPERATION, &full_name)?;
    kurs_db::user::Mutation::rename(conn, user_id, full_name)
        .await
        .context(OPERATION)
}
