//! Runtime settings read from the environment.

use std::env;
use std::path::PathBuf;

/// Base URL used when `TASKBOARD_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
/// Log filter used when neither `TASKBOARD_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Where the task API lives and how calls to it are captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the task API, without trailing slash.
    pub api_base: String,
    /// Directory to record a cassette into.
    pub record_dir: Option<PathBuf>,
    /// Cassette to serve API calls from instead of the network.
    pub replay_path: Option<PathBuf>,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            record_dir: None,
            replay_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Settings {
    /// Loads `.env` if present, then reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is invalid or recording and replay are both requested.
    pub fn from_env() -> Result<Self, String> {
        // A missing .env file is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is invalid or recording and replay are both requested.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base = match non_empty("TASKBOARD_API_BASE") {
            Some(raw) => {
                let trimmed = raw.trim().trim_end_matches('/').to_owned();
                if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                    return Err(format!(
                        "TASKBOARD_API_BASE must be an http(s) URL, got {raw:?}"
                    ));
                }
                trimmed
            }
            None => DEFAULT_API_BASE.to_owned(),
        };

        let record_dir = non_empty("TASKBOARD_RECORD").map(PathBuf::from);
        let replay_path = non_empty("TASKBOARD_REPLAY").map(PathBuf::from);
        if record_dir.is_some() && replay_path.is_some() {
            return Err("TASKBOARD_RECORD and TASKBOARD_REPLAY cannot both be set".to_owned());
        }

        let log_filter = non_empty("TASKBOARD_LOG")
            .or_else(|| non_empty("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self { api_base, record_dir, replay_path, log_filter })
    }
}
