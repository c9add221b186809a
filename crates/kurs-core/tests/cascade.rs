mod common;

use common::fixture::{
    at, complete_attempt, create_active_test, create_discipline, create_user, start_attempt, start_attempt_now,
};
use common::setup_db;
use kurs_core::Error;
use kurs_entity::attempt::Status;
use kurs_test_helpers::SqliteDb;
use sea_orm::ConnectionTrait;
use test_log::test;

#[test(tokio::test)]
async fn test_deactivate_completes_attempts() -> Result<(), Error> {
    let db = setup_db().await;
    let teacher = create_user(&db, "Ada Teacher").await;
    let alice = create_user(&db, "Alice Student").await;
    let bob = create_user(&db, "Bob Student").await;
    let biology = create_discipline(&db, "Biology", teacher).await;
    let cells = create_active_test(&db, biology, "Cells").await;
    let plants = create_active_test(&db, biology, "Plants").await;

    start_attempt(&db, cells, alice, "2024-03-01 10:00").await;
    start_attempt(&db, cells, bob, "2024-03-01 10:05").await;
    let finished = complete_attempt(&db, cells, alice, 70, "2024-02-28 09:00", "2024-02-28 09:30").await;
    let other = start_attempt(&db, plants, alice, "2024-03-01 11:00").await;

    assert_eq!(kurs_core::test::deactivate(&db, cells, biology).await?, 2);
    assert!(!kurs_core::test::is_test_active(&db, cells, biology).await?);

    let attempts = kurs_db::attempt::Query::all_for_test(&db, cells).await.unwrap();
    assert_eq!(attempts.len(), 3);
    assert!(attempts.iter().all(|attempt| attempt.status == Status::Completed));
    assert!(attempts.iter().all(|attempt| attempt.completed_at.is_some()));

    let unchanged = attempts.iter().find(|attempt| attempt.id == finished.id).unwrap();
    assert_eq!(unchanged.completed_at, Some(at("2024-02-28 09:30")));
    assert_eq!(unchanged.score, Some(70));

    let attempts = kurs_db::attempt::Query::all_for_test(&db, plants).await.unwrap();
    assert_eq!(attempts, [other]);

    Ok(())
}

#[test(tokio::test)]
async fn test_forced_completion_shares_start_clock() -> Result<(), Error> {
    let db = setup_db().await;
    let teacher = create_user(&db, "Ada Teacher").await;
    let alice = create_user(&db, "Alice Student").await;
    let biology = create_discipline(&db, "Biology", teacher).await;
    let cells = create_active_test(&db, biology, "Cells").await;
    let running = start_attempt_now(&db, cells, alice).await;

    assert_eq!(kurs_core::test::deactivate(&db, cells, biology).await?, 1);

    let attempts = kurs_db::attempt::Query::all_for_test(&db, cells).await.unwrap();
    assert_eq!(attempts[0].id, running.id);
    assert_eq!(attempts[0].started_at, running.started_at);
    let completed_at = attempts[0].completed_at.unwrap();
    assert!(completed_at >= running.started_at, "{completed_at} < {}", running.started_at);

    Ok(())
}

#[test(tokio::test)]
async fn test_deactivate_missing_test() {
    let db = setup_db().await;
    let teacher = create_user(&db, "Ada Teacher").await;
    let biology = create_discipline(&db, "Biology", teacher).await;

    let res = kurs_core::test::deactivate(&db, 7, biology).await;
    assert!(matches!(res, Err(Error::NotFound { operation: "deactivate test", .. })), "{res:?}");
}

#[test(tokio::test)]
async fn test_failed_cascade_rolls_back() -> Result<(), Error> {
    let db = setup_db().await;
    let teacher = create_user(&db, "Ada Teacher").await;
    let alice = create_user(&db, "Alice Student").await;
    let biology = create_discipline(&db, "Biology", teacher).await;
    let cells = create_active_test(&db, biology, "Cells").await;
    let attempt = start_attempt(&db, cells, alice, "2024-03-01 10:00").await;

    db.execute_unprepared(
        "CREATE TRIGGER reject_attempt_update BEFORE UPDATE ON attempt \
         BEGIN SELECT RAISE(ABORT, 'attempts are frozen'); END;",
    )
    .await
    .unwrap();

    let error = kurs_core::test::deactivate(&db, cells, biology).await.unwrap_err();
    assert!(matches!(error, Error::Query { .. } | Error::ConstraintViolation { .. }), "{error:?}");
    assert_eq!(error.operation(), "deactivate test");

    assert!(kurs_core::test::is_test_active(&db, cells, biology).await?);
    let attempts = kurs_db::attempt::Query::all_for_test(&db, cells).await.unwrap();
    assert_eq!(attempts, [attempt]);

    let res = kurs_core::test::delete_test(&db, cells, biology).await;
    assert!(res.is_err());
    assert_eq!(kurs_core::test::list_tests(&db, biology).await?.len(), 1);

    Ok(())
}

#[test(tokio::test)]
async fn test_delete_is_terminal() -> Result<(), Error> {
    let db = setup_db().await;
    let teacher = create_user(&db, "Ada Teacher").await;
    let alice = create_user(&db, "Alice Student").await;
    let biology = create_discipline(&db, "Biology", teacher).await;
    let cells = create_active_test(&db, biology, "Cells").await;
    let plants = create_active_test(&db, biology, "Plants").await;
    start_attempt(&db, cells, alice, "2024-03-01 10:00").await;

    kurs_core::test::delete_test(&db, cells, biology).await?;
    kurs_core::test::delete_test(&db, cells, biology).await?;

    let attempts = kurs_db::attempt::Query::all_for_test(&db, cells).await.unwrap();
    assert_eq!(attempts[0].status, Status::Completed);

    let listed: Vec<_> = kurs_core::test::list_tests(&db, biology)
        .await?
        .into_iter()
        .map(|test| test.id)
        .collect();
    assert_eq!(listed, [plants]);

    let res = kurs_core::test::activate(&db, cells, biology).await;
    assert!(res.is_err_and(|error| error.is_not_found()));
    let res = kurs_core::test::is_test_active(&db, cells, biology).await;
    assert!(res.is_err_and(|error| error.is_not_found()));
    let res = kurs_core::test::deactivate(&db, cells, biology).await;
    assert!(res.is_err_and(|error| error.is_not_found()));

    let res = kurs_core::test::delete_test(&db, 999, biology).await;
    assert!(matches!(res, Err(Error::NotFound { operation: "delete test", .. })), "{res:?}");

    Ok(())
}

#[test(tokio::test)]
async fn test_cascade_visible_from_other_connection() -> Result<(), Error> {
    let sqlite = SqliteDb::new().unwrap();
    let writer = sqlite.connect(1).await.unwrap();
    let reader = sqlite.connect(1).await.unwrap();
    kurs_db::schema::setup_schema(&writer).await.unwrap();

    let teacher = create_user(&writer, "Ada Teacher").await;
    let alice = create_user(&writer, "Alice Student").await;
    let biology = create_discipline(&writer, "Biology", teacher).await;
    let cells = create_active_test(&writer, biology, "Cells").await;
    start_attempt(&writer, cells, alice, "2024-03-01 10:00").await;

    kurs_core::test::deactivate(&writer, cells, biology).await?;

    assert!(!kurs_core::test::is_test_active(&reader, cells, biology).await?);
    let attempts = kurs_db::attempt::Query::all_for_test(&reader, cells).await.unwrap();
    assert_eq!(attempts[0].status, Status::Completed);

    Ok(())
}
