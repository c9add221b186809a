use serde::{Deserialize, Serialize};

/// Listing entry for a discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineDetail {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub teacher_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRef {
    pub user_id: i32,
}
