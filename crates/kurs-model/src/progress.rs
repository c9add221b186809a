use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttemptStatus {
    InProgress,
    Completed,
}

/// A discipline in a user's progress report together with its active tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineProgress {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub tests: Vec<TestProgress>,
}

/// An active test and, if the user finished it, their latest completed attempt.
///
/// All attempt fields are `None` when the test was not attempted. Times are wall clock `HH:MM`
/// strings without a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestProgress {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
    pub version: i32,
    pub score: Option<i32>,
    pub status: Option<AttemptStatus>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
}

impl TestProgress {
    #[must_use]
    pub fn attempted(&self) -> bool {
        self.status.is_some()
    }
}
