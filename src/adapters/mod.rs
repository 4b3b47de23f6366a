//! Implementations of the [`TaskApi`](crate::ports::TaskApi) port.
//!
//! `live` talks HTTP, `recording` wraps another implementation and captures
//! each call to a cassette, `replaying` serves calls back from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;

/// Port name under which task API calls are stored in cassettes.
pub const TASK_API_PORT: &str = "task_api";
