use crate::core::domain::{error::PbnjResult, model::task_status::TaskStatus, value_object::TaskId};
use crate::task::application::service::task_tracker::TaskTracker;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// A reference to one server-side task.
///
/// The handle owns no remote state. Once it has seen the task complete it
/// keeps that terminal status and never queries the server for it again.
#[derive(Debug)]
pub struct TaskHandle {
    id: TaskId,
    tracker: TaskTracker,
    terminal: Option<TaskStatus>,
}

impl TaskHandle {
    pub(crate) fn new(id: TaskId, tracker: TaskTracker) -> Self {
        Self {
            id,
            tracker,
            terminal: None,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Waits for the task to complete.
    ///
    /// A task that completed with a non-zero error code is still returned
    /// as `Ok`; check [`TaskHandle::failed`] or use
    /// [`TaskHandle::wait_success`].
    ///
    /// # Errors
    /// `Transport`, `Timeout` or `Cancelled`, see [`TaskTracker::poll`].
    /// None of these are cached, so a later call polls again.
    pub async fn wait(&mut self) -> PbnjResult<TaskStatus> {
        self.wait_with_cancel(&CancellationToken::new()).await
    }

    /// Like [`TaskHandle::wait`], aborting when `cancel` fires.
    pub async fn wait_with_cancel(&mut self, cancel: &CancellationToken) -> PbnjResult<TaskStatus> {
        if let Some(status) = &self.terminal {
            debug!(task_id = %self.id, "returning cached terminal status");
            return Ok(status.clone());
        }

        let status = self.tracker.poll(&self.id, cancel).await?;
        self.terminal = Some(status.clone());
        Ok(status)
    }

    /// Waits and turns a failed task into `PbnjError::Response`.
    pub async fn wait_success(&mut self) -> PbnjResult<TaskStatus> {
        self.wait().await?.into_result()
    }

    /// True once a complete status has been observed.
    pub fn done(&self) -> bool {
        self.terminal.as_ref().is_some_and(TaskStatus::is_complete)
    }

    /// True if the task completed with a non-zero error code.
    pub fn failed(&self) -> bool {
        self.done() && self.terminal.as_ref().is_some_and(TaskStatus::has_error)
    }

    /// The terminal status, if the task has been seen completing.
    pub fn status(&self) -> Option<&TaskStatus> {
        self.terminal.as_ref()
    }
}
