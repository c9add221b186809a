//! Per-user progress report.
//!
//! The gateway hands back one flat row per (discipline, active test) pair the user is enrolled in,
//! with the completed attempt columns filled where one exists. This module folds those rows into
//! one entry per discipline and sorts the disciplines by name.

use crate::Error;
use crate::error::DbResultExt;
use indexmap::IndexMap;
use indexmap::map::Entry;
use kurs_db::progress::ProgressRow;
use kurs_model::progress::{DisciplineProgress, TestProgress};
use kurs_model_tools::convert::IntoModel;
use kurs_utils::date::clock_time;
use sea_orm::ConnectionTrait;

/// Progress of `user_id` across every enrolled discipline that has at least one active test.
///
/// Disciplines come sorted by name, tests inside a discipline by id. An unknown or unenrolled user
/// gets an empty report.
pub async fn user_progress<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<Vec<DisciplineProgress>, Error> {
    let rows = kurs_db::progress::Query::rows_for_user(conn, user_id)
        .await
        .context("user progress")?;
    tracing::debug!(user_id, rows = rows.len(), "loaded progress rows");
    Ok(group_rows(rows))
}

struct Group {
    id: i32,
    name: String,
    description: String,
    tests: IndexMap<i32, ProgressRow>,
}

impl Group {
    fn push(&mut self, row: ProgressRow) {
        match self.tests.entry(row.test_id) {
            Entry::Vacant(entry) => {
                entry.insert(row);
            }
            // Several completed attempts on one test; the latest completion wins.
            Entry::Occupied(mut entry) => {
                if row.attempt_completed_at > entry.get().attempt_completed_at {
                    entry.insert(row);
                }
            }
        }
    }

    fn finish(self) -> DisciplineProgress {
        DisciplineProgress {
            id: self.id,
            name: self.name,
            description: self.description,
            tests: self.tests.into_values().map(test_progress).collect(),
        }
    }
}

fn test_progress(row: ProgressRow) -> TestProgress {
    TestProgress {
        id: row.test_id,
        name: row.test_name,
        is_active: row.test_is_active,
        version: row.test_version,
        score: row.attempt_score,
        status: row.attempt_status.map(IntoModel::into_model),
        started_at: row.attempt_started_at.map(clock_time),
        completed_at: row.attempt_completed_at.map(clock_time),
    }
}

pub(crate) fn group_rows(rows: Vec<ProgressRow>) -> Vec<DisciplineProgress> {
    let mut groups: IndexMap<i32, Group> = IndexMap::new();
    for row in rows {
        let group = groups.entry(row.discipline_id).or_insert_with(|| Group {
            id: row.discipline_id,
            name: row.discipline_name.clone(),
            description: row.discipline_description.clone(),
            tests: IndexMap::new(),
        });
        group.push(row);
    }

    let mut disciplines: Vec<_> = groups.into_values().map(Group::finish).collect();
    disciplines.sort_by(|a, b| a.name.cmp(&b.name));
    disciplines
}
