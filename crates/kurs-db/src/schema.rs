use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr};

const SQLITE: &str = include_str!("schema/sqlite.sql");
const POSTGRES: &str = include_str!("schema/postgres.sql");

/// Creates the tables backing disciplines, tests, enrollments and attempts if they do not exist.
pub async fn setup_schema<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let migration = match backend {
        DatabaseBackend::Sqlite => SQLITE,
        DatabaseBackend::Postgres => POSTGRES,
        DatabaseBackend::MySql => {
            return Err(DbErr::Custom("MySQL is not a supported backend".to_owned()));
        }
    };
    tracing::debug!(?backend, "setting up schema");
    conn.execute_unprepared(migration).await?;
    Ok(())
}
