//! Replaying adapter for the `TaskApi` port.

use std::sync::{Arc, Mutex};

use super::replay;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::Resource;
use crate::model::{NewTask, StatsSnapshot, Task, TaskList, TaskUpdate};
use crate::ports::task_api::{ApiFuture, TaskApi};

/// Serves recorded task API results from a cassette.
pub struct ReplayingTaskApi {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingTaskApi {
    /// Create a replaying client backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Arc::new(Mutex::new(replayer)) }
    }

    /// Create a replaying client over every interaction in `cassette`.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        Self::new(CassetteReplayer::new(cassette))
    }
}

impl TaskApi for ReplayingTaskApi {
    fn list_tasks(&self) -> ApiFuture<'_, TaskList> {
        let result = replay(&self.replayer, "list_tasks", Resource::Tasks, None);
        Box::pin(async move { result })
    }

    fn get_stats(&self) -> ApiFuture<'_, StatsSnapshot> {
        let result = replay(&self.replayer, "get_stats", Resource::Stats, None);
        Box::pin(async move { result })
    }

    fn get_task(&self, id: &str) -> ApiFuture<'_, Task> {
        let result = replay(&self.replayer, "get_task", Resource::Task, Some(id));
        Box::pin(async move { result })
    }

    fn create_task(&self, _task: &NewTask) -> ApiFuture<'_, Task> {
        let result = replay(&self.replayer, "create_task", Resource::TaskCreate, None);
        Box::pin(async move { result })
    }

    fn update_task(&self, update: &TaskUpdate) -> ApiFuture<'_, Task> {
        let result = replay(&self.replayer, "update_task", Resource::TaskUpdate, Some(&update.id));
        Box::pin(async move { result })
    }

    fn delete_task(&self, id: &str) -> ApiFuture<'_, ()> {
        let result = replay(&self.replayer, "delete_task", Resource::TaskDelete, Some(id));
        Box::pin(async move { result })
    }
}
