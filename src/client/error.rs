//! Errors reported by the session client.

use crate::models::TaskId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The server answered with a non-success status
    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Task text is empty")]
    EmptyInput,

    #[error("No task is being edited")]
    NotEditing,

    #[error("Task {0} is not in the current list")]
    UnknownTask(TaskId),
}

impl ClientError {
    /// Whether repeating the same read could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::Network(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            ClientError::Rejected { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Text a front end shows for this error
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) | ClientError::InvalidUrl(_) => "Network error".to_string(),
            ClientError::Rejected { message, .. } => message.clone(),
            ClientError::NotLoggedIn => "Please log in first".to_string(),
            ClientError::EmptyInput => "Task text cannot be empty".to_string(),
            ClientError::NotEditing => "No task is being edited".to_string(),
            ClientError::UnknownTask(id) => format!("Task {id} no longer exists"),
        }
    }
}
