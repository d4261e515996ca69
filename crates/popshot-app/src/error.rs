//! Driver errors. Nothing in here is raised per frame; these cover startup.

use std::fmt;
use std::io;
use std::path::PathBuf;

use popshot_core::config::ConfigError;

#[derive(Debug)]
pub enum AppError {
    /// Config file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// Config file is not valid JSON for `AppConfig`.
    Json(serde_json::Error),
    /// Config parsed but holds invalid values.
    Config(ConfigError),
    /// A worker thread could not be started.
    Spawn(io::Error),
    /// A worker thread panicked.
    ThreadPanicked(&'static str),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            AppError::Json(err) => write!(f, "config decode error: {err}"),
            AppError::Config(err) => write!(f, "invalid config: {err}"),
            AppError::Spawn(err) => write!(f, "thread spawn failed: {err}"),
            AppError::ThreadPanicked(name) => write!(f, "{name} thread panicked"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io { source, .. } => Some(source),
            AppError::Json(err) => Some(err),
            AppError::Config(err) => Some(err),
            AppError::Spawn(err) => Some(err),
            AppError::ThreadPanicked(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}
