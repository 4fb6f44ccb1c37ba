// Navigation core: path resolution, visit history, and the controller
// that drives both in response to user intents.
mod controller;
mod history;
mod resolver;

pub use controller::{NavIntent, NavOutcome, NavigationController};
pub use history::NavigationHistory;
pub use resolver::{FileSystemProvider, OsFileSystem, PathResolver, ResolvedPath};

use std::time::Duration;

/// Why a navigation request was rejected. Every variant is recoverable:
/// the request is dropped, the user is told, nothing else changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("Path does not exist: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("No more history in that direction")]
    NoHistory,

    #[error("Cannot go up from: {0}")]
    NoParentDirectory(String),
}

impl NavError {
    /// Suggested on-screen lifetime for the message in the status bar.
    pub fn display_duration(&self) -> Duration {
        match self {
            NavError::PathNotFound(_) => Duration::from_secs(5),
            _ => Duration::from_secs(3),
        }
    }
}
