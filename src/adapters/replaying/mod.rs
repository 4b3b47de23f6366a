//! Replaying adapters that serve recorded interactions.

pub mod task_api;

pub use task_api::ReplayingTaskApi;

use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::TASK_API_PORT;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::{RequestFailed, Resource};

/// A recorded result, in the Ok/Err convention of `recording::record_result`.
#[derive(Deserialize)]
enum Recorded<T> {
    Ok(T),
    Err(RequestFailed),
}

/// Serve the next recorded result for `method`.
///
/// A missing or undecodable interaction becomes a [`RequestFailed`] for
/// `resource`, so replay gaps look like API failures to callers.
pub(crate) fn replay<T: DeserializeOwned>(
    replayer: &Mutex<CassetteReplayer>,
    method: &str,
    resource: Resource,
    id: Option<&str>,
) -> Result<T, RequestFailed> {
    let interaction = replayer
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .next_interaction(TASK_API_PORT, method)
        .map_err(|reason| RequestFailed::new(resource, id, reason))?;

    match serde_json::from_value::<Recorded<T>>(interaction.output) {
        Ok(Recorded::Ok(value)) => Ok(value),
        Ok(Recorded::Err(err)) => Err(err),
        Err(e) => Err(RequestFailed::new(
            resource,
            id,
            format!("malformed cassette output at seq {}: {e}", interaction.seq),
        )),
    }
}
