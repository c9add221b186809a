//! Read-only projections handed out by the registry and the progress aggregator.
//!
//! These are plain values; turning them into JSON or any other wire format is up to the caller.

pub mod discipline;
pub mod progress;
pub mod user;
