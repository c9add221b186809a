pub(crate) mod opt;

use crate::opt::{Cli, Commands, Db};
use anyhow::Error;
use kurs_core::{discipline, enrollment, progress, test, user};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde::Serialize;
use serde_json::json;

async fn connect(opt: Db) -> Result<DatabaseConnection, Error> {
    let mut options = ConnectOptions::new(opt.db_url);
    if let Some(min_connections) = opt.db_min_connections {
        options.min_connections(min_connections);
    }
    if let Some(max_connections) = opt.db_max_connections {
        options.max_connections(max_connections);
    }
    options.sqlx_logging_level(log::LevelFilter::Debug);

    tracing::debug!("connecting to database");
    Ok(Database::connect(options).await?)
}

fn print<T: Serialize>(value: &T) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) async fn exec(opt: Cli) -> Result<(), Error> {
    let db = connect(opt.db).await?;

    match opt.command {
        Commands::InitSchema => {
            kurs_db::schema::setup_schema(&db).await?;
            tracing::info!("schema ready");
        }

        Commands::Disciplines => print(&discipline::list_disciplines(&db).await?)?,
        Commands::Discipline(o) => print(&discipline::get_discipline(&db, o.discipline_id).await?)?,
        Commands::CreateDiscipline(o) => {
            let id = discipline::create_discipline(&db, o.name, o.description, o.teacher_id).await?;
            print(&json!({ "id": id }))?;
        }
        Commands::UpdateDiscipline(o) => {
            print(&discipline::update_discipline(&db, o.discipline_id, o.name, o.description).await?)?;
        }
        Commands::DeleteDiscipline(o) => discipline::delete_discipline(&db, o.discipline_id).await?,

        Commands::Tests(o) => print(&test::list_tests(&db, o.discipline_id).await?)?,
        Commands::CreateTest(o) => print(&test::create_test(&db, o.discipline_id, o.name).await?)?,
        Commands::TestState(o) => {
            let is_active = test::is_test_active(&db, o.test_id, o.discipline_id).await?;
            print(&json!({ "id": o.test_id, "is_active": is_active }))?;
        }
        Commands::Activate(o) => test::activate(&db, o.test_id, o.discipline_id).await?,
        Commands::Deactivate(o) => {
            let completed = test::deactivate(&db, o.test_id, o.discipline_id).await?;
            print(&json!({ "completed_attempts": completed }))?;
        }
        Commands::DeleteTest(o) => test::delete_test(&db, o.test_id, o.discipline_id).await?,

        Commands::Students(o) => print(&enrollment::list_students(&db, o.discipline_id).await?)?,
        Commands::Enroll(o) => enrollment::enroll(&db, o.user_id, o.discipline_id).await?,
        Commands::Unenroll(o) => {
            let removed = enrollment::unenroll(&db, o.user_id, o.discipline_id).await?;
            print(&json!({ "removed": removed }))?;
        }

        Commands::Progress(o) => print(&progress::user_progress(&db, o.user_id).await?)?,

        Commands::Users => print(&user::list_users(&db).await?)?,
        Commands::User(o) => {
            let full_name = user::get_user_name(&db, o.user_id).await?;
            print(&json!({ "id": o.user_id, "full_name": full_name }))?;
        }
        Commands::RenameUser(o) => user::rename_user(&db, o.user_id, o.full_name).await?,
    }

    Ok(())
}
