//! Error types for fetching and reporting user activity.

use thiserror::Error;

/// Errors that end a report run.
///
/// Every variant is terminal: the runner prints it and exits with
/// [`ActivityError::exit_code`]. `EmptyActivity` is reported like an error
/// but is not a failure.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("No command provided")]
    MissingArgument,
    #[error("User not found by username. Please check the username and try again.")]
    UserNotFound {
        username: String,
        status: reqwest::StatusCode,
    },
    #[error("Error fetching user activity: {0}")]
    FetchFailed(#[from] reqwest::Error),
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidApiBase { url: String, reason: String },
    #[error("No activity found for this user.")]
    EmptyActivity { username: String },
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl ActivityError {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        if self.is_failure() {
            1
        } else {
            0
        }
    }

    /// Whether this outcome should be treated as a failed run.
    pub fn is_failure(&self) -> bool {
        !matches!(self, ActivityError::EmptyActivity { .. })
    }
}
