use crate::TestDb;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::borrow::Cow;
use tempfile::TempDir;
use thiserror::Error;

/// A SQLite database in a temporary directory.
///
/// Unlike `sqlite::memory:`, every pooled connection sees the same data, so tests that run
/// statements on several connections at once can use it.
pub struct SqliteDb {
    // Removed together with the database file on drop
    #[allow(dead_code)]
    temp_dir: TempDir,
    uri: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Db(#[from] DbErr),
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("kurs-sqlite-db")?;
        let uri = temp_dir
            .path()
            .join("db.sqlite")
            .to_str()
            .ok_or(std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid path"))?
            .to_owned();
        let uri = format!("sqlite://{uri}?mode=rwc");

        tracing::info!(uri = ?uri, "return sqlite db uri");
        Ok(Self { temp_dir, uri })
    }

    pub async fn connect(&self, max_connections: u32) -> Result<DatabaseConnection, SqliteError> {
        let mut options = ConnectOptions::new(self.uri.clone());
        options.max_connections(max_connections).sqlx_logging(false);
        Ok(Database::connect(options).await?)
    }
}

impl TestDb for SqliteDb {
    fn db_uri(&self) -> Cow<'_, str> {
        self.uri.as_str().into()
    }
}
