//! Port traits defining external boundaries.
//!
//! The task service is the only external system; implementations of its
//! port live in `src/adapters/`.

pub mod task_api;

pub use task_api::{ApiFuture, TaskApi};
