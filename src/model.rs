//! Task, stats, and filter types shared by the client and the controller.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle status of a task, as carried on the wire.
///
/// Unrecognized strings are preserved in [`TaskStatus::Other`] so a task
/// read from the server can be written back without loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    /// Not started. Server default for new tasks.
    Pending,
    /// Being worked on.
    InProgress,
    /// Done.
    Completed,
    /// Reserved by the server vocabulary; never produced by a transition here.
    Cancelled,
    /// Any status string outside the known vocabulary.
    Other(String),
}

impl TaskStatus {
    /// The wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Status reached by one toggle: pending → `in_progress` → completed → pending.
    ///
    /// Everything outside that cycle falls back to pending.
    #[must_use]
    pub fn next(&self) -> Self {
        match self {
            Self::Pending => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed | Self::Cancelled | Self::Other(_) => Self::Pending,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Single-glyph marker used when listing tasks.
    #[must_use]
    pub fn glyph(&self) -> char {
        match self {
            Self::Completed => '✓',
            Self::InProgress => '◷',
            Self::Cancelled => '✗',
            Self::Pending | Self::Other(_) => '!',
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single to-do item as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned, immutable identifier.
    pub id: String,
    /// Free-text description.
    pub task_detail: String,
    /// Current status.
    pub task_status: TaskStatus,
    /// Creation time.
    #[serde(deserialize_with = "utc_timestamp")]
    pub created_at: DateTime<Utc>,
    /// Time of the last successful mutation.
    #[serde(deserialize_with = "utc_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Reads an RFC 3339 timestamp, or a naive ISO 8601 one taken as UTC.
fn utc_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|err| serde::de::Error::custom(format!("invalid timestamp {raw:?}: {err}")))
}

/// Collection response of `GET /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskList {
    /// Total number of tasks the server knows about.
    #[serde(default)]
    pub count: u64,
    /// Link to the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// Link to the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// Tasks in server order.
    pub data: Vec<Task>,
}

/// Server-computed counts of tasks by status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Total task count.
    #[serde(default)]
    pub total: u64,
    /// Count per status name.
    #[serde(default)]
    pub by_status: BTreeMap<String, u64>,
}

impl StatsSnapshot {
    /// Count for `status`, zero when the server did not report it.
    #[must_use]
    pub fn count(&self, status: &TaskStatus) -> u64 {
        self.by_status.get(status.as_str()).copied().unwrap_or(0)
    }
}

/// Wire envelope of `GET /tasks/stats`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StatsEnvelope {
    pub data: StatsSnapshot,
    #[serde(default)]
    #[allow(dead_code)]
    pub success: bool,
}

/// Single-task response, accepted both wrapped in `data` and bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum TaskEnvelope {
    Wrapped { data: Task },
    Bare(Task),
}

impl TaskEnvelope {
    pub(crate) fn into_task(self) -> Task {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// Body of `POST /tasks`. The server fills in everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Free-text description.
    pub task_detail: String,
}

impl NewTask {
    /// Builds a creation request.
    pub fn new(task_detail: impl Into<String>) -> Self {
        Self { task_detail: task_detail.into() }
    }
}

/// Body of `PUT /tasks/{id}`: the complete desired state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    /// Target task; sent in the path and the body.
    pub id: String,
    /// New description.
    pub task_detail: String,
    /// New status.
    pub task_status: TaskStatus,
}

impl TaskUpdate {
    /// The update a single toggle applies to `task`: same detail, next status.
    #[must_use]
    pub fn toggled(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            task_detail: task.task_detail.clone(),
            task_status: task.task_status.next(),
        }
    }
}

/// Which tasks the view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    /// Every task.
    #[default]
    All,
    /// Only pending tasks.
    Pending,
    /// Only in-progress tasks.
    InProgress,
    /// Only completed tasks.
    Completed,
}

impl FilterState {
    /// The status this filter selects, `None` for [`FilterState::All`].
    #[must_use]
    pub fn status(self) -> Option<TaskStatus> {
        match self {
            Self::All => None,
            Self::Pending => Some(TaskStatus::Pending),
            Self::InProgress => Some(TaskStatus::InProgress),
            Self::Completed => Some(TaskStatus::Completed),
        }
    }

    /// Whether `task` is visible under this filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        self.status().is_none_or(|status| task.task_status == status)
    }

    /// Message shown when nothing matches.
    #[must_use]
    pub fn empty_message(self) -> String {
        match self.status() {
            None => "No tasks yet".to_owned(),
            Some(status) => format!("No {} tasks", status.label()),
        }
    }
}
