use crate::core::domain::model::task_status::TaskStatus;
use std::backtrace::Backtrace;
use std::fmt;
use thiserror::Error;

/// The main error type for PBnJ client operations.
///
/// The variants keep apart the outcomes a caller has to react to
/// differently: the service could not be reached at all, the service
/// answered but the task failed, the task did not finish within the
/// polling budget, or the caller gave up waiting.
#[derive(Error, Debug)]
pub enum PbnjError {
    /// The RPC call itself failed (connection refused, non-OK gRPC status,
    /// channel construction).
    ///
    /// # Fields
    /// * `0` - The status message reported by the transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// A well-formed response describing an application-level failure
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The polling budget ran out before the task reported completion
    ///
    /// # Fields
    /// * `task_id` - The task that was being tracked
    /// * `attempts` - How many status queries were issued
    /// * `last_status` - The last (non-complete) status seen, if any
    #[error("Timed out waiting for task {task_id} after {attempts} status checks")]
    Timeout {
        task_id: String,
        attempts: u32,
        last_status: Option<Box<TaskStatus>>,
    },

    /// The caller cancelled an in-progress wait
    #[error("Wait for task {task_id} was cancelled")]
    Cancelled { task_id: String },

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    /// * `backtrace` - Stack trace where the error occurred
    #[error("Validation error: {source}")]
    Validation {
        source: ValidationError,
        backtrace: Backtrace,
    },
}

impl PbnjError {
    /// Returns true if the service could not be reached or rejected the call.
    pub fn is_transport(&self) -> bool {
        matches!(self, PbnjError::Transport(_))
    }

    /// Returns true if the polling budget was exhausted.
    pub fn is_timeout(&self) -> bool {
        matches!(self, PbnjError::Timeout { .. })
    }

    /// Returns true if the service reported an application-level failure.
    pub fn is_response(&self) -> bool {
        matches!(self, PbnjError::Response(_))
    }
}

impl From<ValidationError> for PbnjError {
    fn from(error: ValidationError) -> Self {
        PbnjError::Validation {
            source: error,
            backtrace: Backtrace::capture(),
        }
    }
}

/// An application-level failure carried by an otherwise successful response.
///
/// The full status payload is kept so callers can inspect it.
#[derive(Error, Debug, Clone, PartialEq)]
pub struct ResponseError {
    status: TaskStatus,
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task {} failed {{ state: {}, code: {}, message: {} }}",
            self.status.id, self.status.state, self.status.error_code, self.status.error_message
        )
    }
}

impl ResponseError {
    pub fn new(status: TaskStatus) -> Self {
        Self { status }
    }

    /// The response payload that was judged to be a failure.
    pub fn status(&self) -> &TaskStatus {
        &self.status
    }

    pub fn into_status(self) -> TaskStatus {
        self.status
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a PbnjError
pub type PbnjResult<T> = Result<T, PbnjError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::model::task_status::TaskState;

    fn failed_status() -> TaskStatus {
        TaskStatus {
            id: "task-1".to_string(),
            state: TaskState::Complete,
            complete: true,
            error_code: 7,
            error_message: "bmc unreachable".to_string(),
            ..TaskStatus::default()
        }
    }

    #[test]
    fn test_response_error_message_combines_status_and_body() {
        let error = PbnjError::from(ResponseError::new(failed_status()));
        assert_eq!(
            error.to_string(),
            "Task task-1 failed { state: complete, code: 7, message: bmc unreachable }"
        );
        assert!(error.is_response());
        assert!(!error.is_transport());
    }

    #[test]
    fn test_response_error_keeps_payload() {
        let error = ResponseError::new(failed_status());
        assert_eq!(error.status().error_code, 7);
        assert_eq!(error.into_status(), failed_status());
    }

    #[test]
    fn test_validation_error_conversion() {
        let error: PbnjError = ValidationError::Format("bad".to_string()).into();
        assert!(matches!(
            error,
            PbnjError::Validation {
                source: ValidationError::Format(_),
                ..
            }
        ));
        assert_eq!(error.to_string(), "Validation error: Format error: bad");
    }

    #[test]
    fn test_timeout_is_distinct_from_transport() {
        let error = PbnjError::Timeout {
            task_id: "task-1".to_string(),
            attempts: 30,
            last_status: None,
        };
        assert!(error.is_timeout());
        assert!(!error.is_transport());
        assert_eq!(
            error.to_string(),
            "Timed out waiting for task task-1 after 30 status checks"
        );
    }
}
