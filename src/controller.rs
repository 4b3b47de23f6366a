//! View-state controller holding the task list and stats snapshot.
//!
//! Every mutation is followed by a full refetch of tasks and stats; the
//! held list is never patched locally. One controller serves one session
//! and all operations take `&mut self`, so a refresh can never overlap
//! another refresh or mutation on the same controller.

use std::sync::Arc;

use crate::error::RequestFailed;
use crate::model::{FilterState, NewTask, StatsSnapshot, Task, TaskStatus, TaskUpdate};
use crate::ports::task_api::{ApiFuture, TaskApi};

/// Message stored when a refresh fails.
pub const FETCH_FAILED: &str = "Failed to fetch data";
/// Message stored when creating a task fails.
pub const CREATE_FAILED: &str = "Failed to create task";
/// Message stored when updating a task fails.
pub const UPDATE_FAILED: &str = "Failed to update task";
/// Message stored when deleting a task fails.
pub const DELETE_FAILED: &str = "Failed to delete task";
/// Message stored when toggling a task's status fails.
pub const TOGGLE_FAILED: &str = "Failed to update task status";

/// Owns the in-memory task list for one session.
pub struct TaskListController {
    api: Arc<dyn TaskApi>,
    tasks: Vec<Task>,
    stats: StatsSnapshot,
    filter: FilterState,
    loading: bool,
    last_error: Option<String>,
    editing: Option<String>,
}

impl TaskListController {
    /// Creates an empty controller. Call [`TaskListController::refresh`] to load.
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            stats: StatsSnapshot::default(),
            filter: FilterState::All,
            loading: false,
            last_error: None,
            editing: None,
        }
    }

    /// Tasks in server order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Last stats snapshot received from the server.
    #[must_use]
    pub fn stats(&self) -> &StatsSnapshot {
        &self.stats
    }

    /// Active filter.
    #[must_use]
    pub fn filter(&self) -> FilterState {
        self.filter
    }

    /// Whether an operation is in flight.
    ///
    /// Operations borrow the controller mutably, so callers only ever see
    /// `false` here; the flag is `true` only while an operation runs.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the most recent failure, until dismissed.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Id of the task being edited inline, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// The held task with `id`.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks visible under the current filter, in server order.
    ///
    /// Computed on each call; the held list is never modified.
    pub fn filtered_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        let filter = self.filter;
        self.tasks.iter().filter(move |task| filter.matches(task))
    }

    /// Selects which tasks [`TaskListController::filtered_tasks`] yields.
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    /// Clears the stored error message.
    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Marks `id` as being edited inline.
    pub fn begin_edit(&mut self, id: impl Into<String>) {
        self.editing = Some(id.into());
    }

    /// Leaves inline editing without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Refetches tasks and stats concurrently and replaces both, or neither.
    ///
    /// Returns `true` on success; on failure [`TaskListController::last_error`] is set.
    pub async fn refresh(&mut self) -> bool {
        self.loading = true;
        let ok = self.resync().await;
        self.loading = false;
        ok
    }

    /// Creates a task from `detail`, then refreshes. Blank input is ignored.
    pub async fn create(&mut self, detail: &str) -> bool {
        if detail.trim().is_empty() {
            tracing::debug!("ignoring blank task detail");
            return false;
        }
        let api = Arc::clone(&self.api);
        self.mutate(CREATE_FAILED, api.create_task(&NewTask::new(detail))).await
    }

    /// Replaces the detail and status of task `id`, then refreshes.
    ///
    /// A successful update ends inline editing of that task.
    pub async fn update(&mut self, id: &str, detail: &str, status: TaskStatus) -> bool {
        let api = Arc::clone(&self.api);
        let update =
            TaskUpdate { id: id.to_owned(), task_detail: detail.to_owned(), task_status: status };
        let ok = self.mutate(UPDATE_FAILED, api.update_task(&update)).await;
        if ok && self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        ok
    }

    /// Finishes inline editing of `task` with the entered `text`.
    ///
    /// Saves only when the trimmed text is non-empty and differs from the
    /// current detail; otherwise editing is cancelled without a request.
    pub async fn commit_edit(&mut self, task: &Task, text: &str) -> bool {
        let detail = text.trim();
        if detail.is_empty() || detail == task.task_detail {
            self.cancel_edit();
            return false;
        }
        self.update(&task.id, detail, task.task_status.clone()).await
    }

    /// Deletes task `id`, then refreshes.
    pub async fn remove(&mut self, id: &str) -> bool {
        let api = Arc::clone(&self.api);
        self.mutate(DELETE_FAILED, api.delete_task(id)).await
    }

    /// Advances `task` along the status cycle, then refreshes.
    pub async fn toggle_status(&mut self, task: &Task) -> bool {
        let api = Arc::clone(&self.api);
        self.mutate(TOGGLE_FAILED, api.toggle_task_status(task)).await
    }

    /// Runs one mutating request and, if it succeeds, the follow-up refresh.
    async fn mutate<T>(&mut self, message: &'static str, request: ApiFuture<'_, T>) -> bool {
        self.loading = true;
        let outcome = request.await.map(|_| ());
        let ok = match outcome {
            Ok(()) => self.resync().await,
            Err(err) => {
                self.fail(message, &err);
                false
            }
        };
        self.loading = false;
        ok
    }

    async fn resync(&mut self) -> bool {
        tracing::debug!("refreshing tasks and stats");
        let api = Arc::clone(&self.api);
        let (tasks, stats) = tokio::join!(api.list_tasks(), api.get_stats());
        match (tasks, stats) {
            (Ok(list), Ok(stats)) => {
                self.tasks = list.data;
                self.stats = stats;
                true
            }
            (Err(err), _) | (_, Err(err)) => {
                self.fail(FETCH_FAILED, &err);
                false
            }
        }
    }

    fn fail(&mut self, message: &str, err: &RequestFailed) {
        tracing::warn!(error = %err, "{message}");
        self.last_error = Some(message.to_owned());
    }
}
