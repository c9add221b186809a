use chrono::NaiveDateTime;
use kurs_entity::attempt::{self, Status};
use kurs_entity::{discipline, test, user};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection};

#[allow(dead_code)]
pub async fn create_user(db: &DatabaseConnection, full_name: &str) -> user::Model {
    user::ActiveModel {
        full_name: Set(full_name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_discipline(db: &DatabaseConnection, name: &str, teacher_id: i32) -> discipline::Model {
    kurs_db::discipline::Mutation::create(db, name.to_owned(), format!("{name} course"), teacher_id)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_active_test(db: &DatabaseConnection, discipline_id: i32, name: &str) -> test::Model {
    let test = kurs_db::test::Mutation::create(db, discipline_id, name.to_owned())
        .await
        .unwrap();
    kurs_db::test::Mutation::set_active(db, test.id, discipline_id, true)
        .await
        .unwrap();
    test
}

#[allow(dead_code)]
pub fn at(time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M").unwrap()
}

#[allow(dead_code)]
pub async fn create_attempt(
    db: &DatabaseConnection,
    test_id: i32,
    user_id: i32,
    status: Status,
    score: Option<i32>,
    started_at: NaiveDateTime,
    completed_at: Option<NaiveDateTime>,
) -> attempt::Model {
    attempt::ActiveModel {
        test_id: Set(test_id),
        user_id: Set(user_id),
        status: Set(status),
        score: Set(score),
        started_at: Set(started_at),
        completed_at: Set(completed_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
