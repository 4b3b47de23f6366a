//! Live adapters for real external interactions.

pub mod task_api;

pub use task_api::LiveTaskApi;
