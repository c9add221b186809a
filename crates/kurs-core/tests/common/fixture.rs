use chrono::NaiveDateTime;
use kurs_entity::attempt::{self, Status};
use kurs_entity::user;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait};

#[allow(dead_code)]
pub async fn create_user<C: ConnectionTrait>(db: &C, full_name: &str) -> i32 {
    user::ActiveModel {
        full_name: Set(full_name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

#[allow(dead_code)]
pub async fn create_discipline<C: ConnectionTrait>(db: &C, name: &str, teacher_id: i32) -> i32 {
    kurs_core::discipline::create_discipline(db, name.to_owned(), format!("{name} course"), teacher_id)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_active_test<C: ConnectionTrait>(db: &C, discipline_id: i32, name: &str) -> i32 {
    let test = kurs_core::test::create_test(db, discipline_id, name.to_owned())
        .await
        .unwrap();
    kurs_core::test::activate(db, test.id, discipline_id).await.unwrap();
    test.id
}

#[allow(dead_code)]
pub fn at(time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M").unwrap()
}

#[allow(dead_code)]
pub async fn start_attempt<C: ConnectionTrait>(db: &C, test_id: i32, user_id: i32, started_at: &str) -> attempt::Model {
    attempt::ActiveModel {
        test_id: Set(test_id),
        user_id: Set(user_id),
        status: Set(Status::InProgress),
        score: Set(None),
        started_at: Set(at(started_at)),
        completed_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn complete_attempt<C: ConnectionTrait>(
    db: &C,
    test_id: i32,
    user_id: i32,
    score: i32,
    started_at: &str,
    completed_at: &str,
) -> attempt::Model {
    attempt::ActiveModel {
        test_id: Set(test_id),
        user_id: Set(user_id),
        status: Set(Status::Completed),
        score: Set(Some(score)),
        started_at: Set(at(started_at)),
        completed_at: Set(Some(at(completed_at))),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

/// Starts an attempt whose `started_at` comes from the column default.
#[allow(dead_code)]
pub async fn start_attempt_now<C: ConnectionTrait>(db: &C, test_id: i32, user_id: i32) -> attempt::Model {
    attempt::ActiveModel {
        test_id: Set(test_id),
        user_id: Set(user_id),
        status: Set(Status::InProgress),
        score: Set(None),
        completed_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
