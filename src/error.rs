//! Failure type raised at the task API boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical resource or operation a request was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    /// `GET /tasks`.
    Tasks,
    /// `GET /tasks/stats`.
    Stats,
    /// `GET /tasks/{id}`.
    Task,
    /// `POST /tasks`.
    TaskCreate,
    /// `PUT /tasks/{id}`.
    TaskUpdate,
    /// `DELETE /tasks/{id}`.
    TaskDelete,
}

impl Resource {
    /// Stable name used in messages and cassettes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Stats => "stats",
            Self::Task => "task",
            Self::TaskCreate => "task-create",
            Self::TaskUpdate => "task-update",
            Self::TaskDelete => "task-delete",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request against the task API did not produce a usable response.
///
/// Transport errors, non-success statuses, and undecodable bodies all
/// collapse into this one kind; `reason` keeps the detail for logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("request failed for {resource}{}: {reason}", id_suffix(.id))]
pub struct RequestFailed {
    /// What was being requested.
    pub resource: Resource,
    /// Task id, for single-task operations.
    pub id: Option<String>,
    /// Underlying cause.
    pub reason: String,
}

impl RequestFailed {
    /// Builds a failure for `resource` and optional task `id`.
    pub fn new(resource: Resource, id: Option<&str>, reason: impl Into<String>) -> Self {
        Self { resource, id: id.map(str::to_owned), reason: reason.into() }
    }
}

#[allow(clippy::ref_option)]
fn id_suffix(id: &Option<String>) -> String {
    id.as_deref().map(|id| format!(" {id}")).unwrap_or_default()
}
