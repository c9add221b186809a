pub mod attempt;
pub mod discipline;
pub mod enrollment;
pub mod progress;
pub mod schema;
pub mod user;
pub mod util;

pub use sea_orm;
