//! Recording adapter for the `TaskApi` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::model::{NewTask, StatsSnapshot, Task, TaskList, TaskUpdate};
use crate::ports::task_api::{ApiFuture, TaskApi};

/// Records task API calls while delegating to an inner implementation.
pub struct RecordingTaskApi {
    inner: Arc<dyn TaskApi>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingTaskApi {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Arc<dyn TaskApi>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct NoInput {}

#[derive(Serialize)]
struct IdInput<'a> {
    id: &'a str,
}

impl TaskApi for RecordingTaskApi {
    fn list_tasks(&self) -> ApiFuture<'_, TaskList> {
        Box::pin(async move {
            let result = self.inner.list_tasks().await;
            record_result(&self.recorder, "list_tasks", &NoInput {}, &result);
            result
        })
    }

    fn get_stats(&self) -> ApiFuture<'_, StatsSnapshot> {
        Box::pin(async move {
            let result = self.inner.get_stats().await;
            record_result(&self.recorder, "get_stats", &NoInput {}, &result);
            result
        })
    }

    fn get_task(&self, id: &str) -> ApiFuture<'_, Task> {
        let id = id.to_owned();
        Box::pin(async move {
            let result = self.inner.get_task(&id).await;
            record_result(&self.recorder, "get_task", &IdInput { id: &id }, &result);
            result
        })
    }

    fn create_task(&self, task: &NewTask) -> ApiFuture<'_, Task> {
        let task = task.clone();
        Box::pin(async move {
            let result = self.inner.create_task(&task).await;
            record_result(&self.recorder, "create_task", &task, &result);
            result
        })
    }

    fn update_task(&self, update: &TaskUpdate) -> ApiFuture<'_, Task> {
        let update = update.clone();
        Box::pin(async move {
            let result = self.inner.update_task(&update).await;
            record_result(&self.recorder, "update_task", &update, &result);
            result
        })
    }

    fn delete_task(&self, id: &str) -> ApiFuture<'_, ()> {
        let id = id.to_owned();
        Box::pin(async move {
            let result = self.inner.delete_task(&id).await;
            record_result(&self.recorder, "delete_task", &IdInput { id: &id }, &result);
            result
        })
    }
}
