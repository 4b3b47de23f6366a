//! Recording session owning the task API cassette recorder.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// File name of the task API cassette inside a session directory.
pub const TASK_API_CASSETTE: &str = "task_api.cassette.yaml";

/// A recording run writing its cassette into one directory.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Start a session writing into `output_dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or already holds
    /// a task API cassette.
    pub fn at(output_dir: &Path, api_base: &str) -> Result<Self, String> {
        std::fs::create_dir_all(output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let path = output_dir.join(TASK_API_CASSETTE);
        if path.exists() {
            return Err(format!("Cassette already exists: {}", path.display()));
        }

        let name = format!("{}-task_api", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        Ok(Self {
            recorder: Arc::new(Mutex::new(CassetteRecorder::new(path, name, api_base))),
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Shared handle for a recording adapter.
    #[must_use]
    pub fn recorder(&self) -> Arc<Mutex<CassetteRecorder>> {
        Arc::clone(&self.recorder)
    }

    /// Write the cassette and return the session directory.
    ///
    /// Every adapter holding [`RecordingSession::recorder`] must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if a recording adapter is still alive or the
    /// cassette cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter for task_api still has references".to_owned())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for task_api poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write task_api cassette: {e}"))?;
        Ok(self.output_dir)
    }
}
