pub mod fixture;

use sea_orm::{Database, DatabaseConnection};

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    kurs_db::schema::setup_schema(&db).await.unwrap();
    db
}
