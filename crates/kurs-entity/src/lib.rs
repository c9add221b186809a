pub mod attempt;
pub mod discipline;
pub mod user;
pub mod user_discipline;
