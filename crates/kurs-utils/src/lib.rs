pub mod date;
pub mod tracing;
