//! Service context wiring the task API port to an adapter.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::LiveTaskApi;
use crate::adapters::recording::RecordingTaskApi;
use crate::adapters::replaying::ReplayingTaskApi;
use crate::cassette::format::Cassette;
use crate::cassette::session::RecordingSession;
use crate::config::Settings;
use crate::controller::TaskListController;
use crate::ports::task_api::TaskApi;

/// Bundles the task API implementation a command runs against.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying).
pub struct ServiceContext {
    /// Task API client.
    pub api: Arc<dyn TaskApi>,
}

impl ServiceContext {
    /// Creates a live context talking HTTP to `api_base`.
    #[must_use]
    pub fn live(api_base: &str) -> Self {
        Self { api: Arc::new(LiveTaskApi::new(api_base)) }
    }

    /// Creates a live context whose calls are also recorded into `dir`.
    ///
    /// The session must be finished after the context (and every controller
    /// built from it) has been dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the recording directory cannot be prepared.
    pub fn recording_at(api_base: &str, dir: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::at(dir, api_base)?;
        let live: Arc<dyn TaskApi> = Arc::new(LiveTaskApi::new(api_base));
        let api = Arc::new(RecordingTaskApi::new(live, session.recorder()));
        Ok((Self { api }, session))
    }

    /// Creates a context that serves every call from the cassette at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self { api: Arc::new(ReplayingTaskApi::from_cassette(&cassette)) })
    }

    /// Picks the adapter `settings` ask for: replay, record, or live.
    ///
    /// # Errors
    ///
    /// Returns an error if a cassette cannot be loaded or a recording cannot start.
    pub fn from_settings(settings: &Settings) -> Result<(Self, Option<RecordingSession>), String> {
        if let Some(path) = &settings.replay_path {
            tracing::debug!(path = %path.display(), "replaying task API from cassette");
            return Ok((Self::replaying(path)?, None));
        }
        if let Some(dir) = &settings.record_dir {
            tracing::debug!(dir = %dir.display(), "recording task API interactions");
            let (ctx, session) = Self::recording_at(&settings.api_base, dir)?;
            return Ok((ctx, Some(session)));
        }
        Ok((Self::live(&settings.api_base), None))
    }

    /// A fresh controller for one session against this context's API.
    #[must_use]
    pub fn controller(&self) -> TaskListController {
        TaskListController::new(Arc::clone(&self.api))
    }
}
