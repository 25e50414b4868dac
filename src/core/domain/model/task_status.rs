//! Domain model for the status of a server-side task.

use crate::core::domain::error::{PbnjResult, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state reported by the task-status endpoint.
///
/// Unrecognized states are kept verbatim so nothing the server says is lost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskState {
    #[default]
    Pending,
    Running,
    Complete,
    Unknown(String),
}

impl TaskState {
    pub fn as_str(&self) -> &str {
        match self {
            TaskState::Pending => "pending",
            TaskState::Running => "running",
            TaskState::Complete => "complete",
            TaskState::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for TaskState {
    fn from(raw: &str) -> Self {
        match raw {
            "pending" => TaskState::Pending,
            "running" => TaskState::Running,
            "complete" => TaskState::Complete,
            other => TaskState::Unknown(other.to_string()),
        }
    }
}

impl From<String> for TaskState {
    fn from(raw: String) -> Self {
        TaskState::from(raw.as_str())
    }
}

impl From<TaskState> for String {
    fn from(state: TaskState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answer from the task-status endpoint.
///
/// Once a task reports completion this becomes its terminal result.
/// A non-zero `error_code` means the task failed even though it completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub state: TaskState,
    pub complete: bool,
    /// 0 means no error.
    #[serde(default)]
    pub error_code: i32,
    #[serde(default)]
    pub error_message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error_details: Vec<String>,
    /// Free-form result text, e.g. `"on"` for a power status query.
    #[serde(default)]
    pub result: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}

impl TaskStatus {
    /// The task has finished, successfully or not.
    pub fn is_complete(&self) -> bool {
        self.complete || self.state == TaskState::Complete
    }

    pub fn has_error(&self) -> bool {
        self.error_code != 0
    }

    /// Finished with a non-zero error code.
    pub fn is_failed(&self) -> bool {
        self.is_complete() && self.has_error()
    }

    /// Turns a failed status into a [`ResponseError`], passing everything
    /// else through.
    pub fn into_result(self) -> PbnjResult<TaskStatus> {
        if self.has_error() {
            return Err(ResponseError::new(self).into());
        }
        Ok(self)
    }
}
