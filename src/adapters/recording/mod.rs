//! Recording adapters that capture interactions to cassettes.

pub mod task_api;

pub use task_api::RecordingTaskApi;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde_json::json;

use super::TASK_API_PORT;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::RequestFailed;

/// Record a task API result using the Ok/Err JSON convention.
///
/// Mirror of `replaying::replay`:
/// - `Ok(v)` is stored as `{"Ok": v}`
/// - `Err(e)` is stored as `{"Err": e}` with the structured failure
pub(crate) fn record_result<T, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    method: &str,
    input: &I,
    result: &Result<T, RequestFailed>,
) where
    T: Serialize,
    I: Serialize,
{
    let encoded = serde_json::to_value(input).and_then(|input| {
        let output = match result {
            Ok(v) => serde_json::to_value(v).map(|v| json!({ "Ok": v }))?,
            Err(e) => serde_json::to_value(e).map(|e| json!({ "Err": e }))?,
        };
        Ok((input, output))
    });

    match encoded {
        Ok((input, output)) => recorder
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(TASK_API_PORT, method, input, output),
        Err(e) => tracing::warn!(method, error = %e, "interaction not recorded"),
    }
}
