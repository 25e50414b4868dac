use crate::core::domain::error::{PbnjResult, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a server-side task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> PbnjResult<Self> {
        let id = id.into();
        validate_task_id(&id)?;
        Ok(Self(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn validate_task_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::Field {
            field: "task_id".to_string(),
            message: "Task id cannot be empty".to_string(),
        });
    }
    Ok(())
}
