//! Task API port: the data-access boundary to the remote task service.

use std::future::Future;
use std::pin::Pin;

use crate::error::RequestFailed;
use crate::model::{NewTask, StatsSnapshot, Task, TaskList, TaskUpdate};

/// Boxed future type alias used by [`TaskApi`] to keep the trait dyn-compatible.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, RequestFailed>> + Send + 'a>>;

/// Stateless operations against the task service.
///
/// Every method performs exactly one request (except the provided
/// [`TaskApi::toggle_task_status`], which delegates to
/// [`TaskApi::update_task`]). Nothing is retried and no timeout is imposed
/// beyond the transport's own.
pub trait TaskApi: Send + Sync {
    /// Fetches the task collection.
    ///
    /// # Errors
    ///
    /// Returns [`RequestFailed`] with resource `tasks`.
    fn list_tasks(&self) -> ApiFuture<'_, TaskList>;

    /// Fetches the aggregate counts by status.
    ///
    /// # Errors
    ///
    /// Returns [`RequestFailed`] with resource `stats`.
    fn get_stats(&self) -> ApiFuture<'_, StatsSnapshot>;

    /// Fetches one task. A missing task is not distinguished from other failures.
    ///
    /// # Errors
    ///
    /// Returns [`RequestFailed`] with resource `task` and the id.
    fn get_task(&self, id: &str) -> ApiFuture<'_, Task>;

    /// Creates a task; the server assigns id, status, and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`RequestFailed`] with resource `task-create`.
    fn create_task(&self, task: &NewTask) -> ApiFuture<'_, Task>;

    /// Replaces the detail and status of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`RequestFailed`] with resource `task-update` and the id.
    fn update_task(&self, update: &TaskUpdate) -> ApiFuture<'_, Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`RequestFailed`] with resource `task-delete` and the id.
    fn delete_task(&self, id: &str) -> ApiFuture<'_, ()>;

    /// Moves `task` one step along the status cycle, keeping its detail.
    ///
    /// # Errors
    ///
    /// Propagates the [`TaskApi::update_task`] failure.
    fn toggle_task_status(&self, task: &Task) -> ApiFuture<'_, ()> {
        let pending = self.update_task(&TaskUpdate::toggled(task));
        Box::pin(async move { pending.await.map(|_| ()) })
    }
}
