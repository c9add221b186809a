pub mod discipline;
pub mod enrollment;
pub mod error;
pub mod progress;
pub mod user;
mod validation;

pub use error::Error;
