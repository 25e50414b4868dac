//! Bounded polling of the task-status endpoint.
//!
//! A task moves from pending to exactly one terminal outcome:
//! - complete: the server reported completion (success or failure per
//!   its error code), returned as `Ok`
//! - timed out: the attempt budget ran out, `PbnjError::Timeout`
//! - transport failed: a status query itself failed, returned immediately
//! - cancelled: the caller's token fired, `PbnjError::Cancelled`
//!
//! Only "not yet complete" answers are retried. All loop state lives on the
//! stack of one `poll` call, so any number of trackers can run concurrently.

use crate::core::domain::{
    error::{PbnjError, PbnjResult},
    model::{client_config::PollPolicy, task_status::TaskStatus},
    value_object::TaskId,
};
use crate::core::infrastructure::{proto::StatusRequest, transport::TaskService};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct TaskTracker {
    service: Arc<dyn TaskService>,
    policy: PollPolicy,
}

impl fmt::Debug for TaskTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskTracker")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl TaskTracker {
    pub fn new(service: Arc<dyn TaskService>, policy: PollPolicy) -> Self {
        Self { service, policy }
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Polls until the task completes, the budget runs out, a status query
    /// fails, or `cancel` fires.
    ///
    /// # Errors
    /// * `PbnjError::Transport` - a status query failed; no further queries are sent
    /// * `PbnjError::Timeout` - no completion within `max_attempts` queries,
    ///   carrying the last status seen
    /// * `PbnjError::Cancelled` - the token was cancelled
    pub async fn poll(
        &self,
        task_id: &TaskId,
        cancel: &CancellationToken,
    ) -> PbnjResult<TaskStatus> {
        self.pause(self.policy.initial_delay, task_id, cancel)
            .await?;

        let mut last_seen: Option<TaskStatus> = None;
        for attempt in 1..=self.policy.max_attempts {
            let request = StatusRequest {
                task_id: task_id.as_str().to_string(),
            };
            let response = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(cancelled(task_id)),
                response = self.service.status(request) => response,
            };

            let status = match response {
                Ok(response) => TaskStatus::from(response),
                Err(e) => {
                    warn!(%task_id, attempt, error = %e, "task status query failed");
                    return Err(e);
                }
            };

            debug!(%task_id, attempt, state = %status.state, "task status");
            if status.is_complete() {
                info!(
                    %task_id,
                    attempts = attempt,
                    error_code = status.error_code,
                    "task complete"
                );
                return Ok(status);
            }
            last_seen = Some(status);

            if attempt < self.policy.max_attempts {
                self.pause(self.policy.interval, task_id, cancel).await?;
            }
        }

        warn!(
            %task_id,
            attempts = self.policy.max_attempts,
            "gave up waiting for task"
        );
        Err(PbnjError::Timeout {
            task_id: task_id.to_string(),
            attempts: self.policy.max_attempts,
            last_status: last_seen.map(Box::new),
        })
    }

    async fn pause(
        &self,
        delay: Duration,
        task_id: &TaskId,
        cancel: &CancellationToken,
    ) -> PbnjResult<()> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(cancelled(task_id)),
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }
}

fn cancelled(task_id: &TaskId) -> PbnjError {
    debug!(%task_id, "wait cancelled");
    PbnjError::Cancelled {
        task_id: task_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::infrastructure::proto::StatusResponse;
    use crate::core::infrastructure::transport::MockTaskService;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    fn running() -> StatusResponse {
        StatusResponse {
            id: "t-1".to_string(),
            state: "running".to_string(),
            ..StatusResponse::default()
        }
    }

    fn complete() -> StatusResponse {
        StatusResponse {
            id: "t-1".to_string(),
            state: "complete".to_string(),
            complete: true,
            result: "on".to_string(),
            ..StatusResponse::default()
        }
    }

    fn task_id() -> TaskId {
        TaskId::new("t-1").unwrap()
    }

    fn tracker(service: MockTaskService, policy: PollPolicy) -> TaskTracker {
        TaskTracker::new(Arc::new(service), policy)
    }

    #[tokio::test(start_paused = true)]
    async fn test_settles_before_first_query() {
        let start = Instant::now();
        let mut service = MockTaskService::new();
        service.expect_status().times(1).returning(move |request| {
            assert_eq!(request.task_id, "t-1");
            assert!(start.elapsed() >= Duration::from_secs(1));
            Ok(complete())
        });

        let status = tracker(service, PollPolicy::default())
            .poll(&task_id(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(status.result, "on");
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_string_alone_completes() {
        let mut service = MockTaskService::new();
        service.expect_status().times(1).returning(|_| {
            Ok(StatusResponse {
                state: "complete".to_string(),
                complete: false,
                ..StatusResponse::default()
            })
        });

        let status = tracker(service, PollPolicy::default())
            .poll(&task_id(), &CancellationToken::new())
            .await
            .unwrap();
        assert!(status.is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn test_budget_bounds_queries_and_time() {
        let policy = PollPolicy::default();
        let mut service = MockTaskService::new();
        service
            .expect_status()
            .times(policy.max_attempts as usize)
            .returning(|_| Ok(running()));

        let start = Instant::now();
        let result = tracker(service, policy)
            .poll(&task_id(), &CancellationToken::new())
            .await;
        let elapsed = start.elapsed();

        match result {
            Err(PbnjError::Timeout {
                task_id,
                attempts,
                last_status,
            }) => {
                assert_eq!(task_id, "t-1");
                assert_eq!(attempts, 30);
                assert_eq!(last_status.unwrap().state.as_str(), "running");
            }
            other => panic!("expected timeout, got {:?}", other),
        }
        assert!(elapsed >= policy.max_wait());
        assert!(elapsed < policy.max_wait() + Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_stops_polling() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let mut service = MockTaskService::new();
        service.expect_status().returning(move |_| {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            if n == 3 {
                Err(PbnjError::Transport("Internal: bad status".to_string()))
            } else {
                Ok(running())
            }
        });

        let result = tracker(service, PollPolicy::default())
            .poll(&task_id(), &CancellationToken::new())
            .await;
        assert!(matches!(result, Err(PbnjError::Transport(ref m)) if m.contains("bad status")));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_sleep() {
        let mut service = MockTaskService::new();
        service.expect_status().returning(|_| Ok(running()));

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(6)).await;
            trigger.cancel();
        });

        let start = Instant::now();
        let result = tracker(service, PollPolicy::default())
            .poll(&task_id(), &cancel)
            .await;
        assert!(matches!(result, Err(PbnjError::Cancelled { .. })));
        assert!(start.elapsed() < Duration::from_secs(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_cancelled_sends_nothing() {
        let mut service = MockTaskService::new();
        service.expect_status().never();

        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = tracker(service, PollPolicy::default())
            .poll(&task_id(), &cancel)
            .await;
        assert!(matches!(result, Err(PbnjError::Cancelled { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_attempt_policy_skips_trailing_sleep() {
        let policy = PollPolicy {
            initial_delay: Duration::ZERO,
            interval: Duration::from_secs(10),
            max_attempts: 1,
        };
        let mut service = MockTaskService::new();
        service.expect_status().times(1).returning(|_| Ok(running()));

        let start = Instant::now();
        let result = tracker(service, policy)
            .poll(&task_id(), &CancellationToken::new())
            .await;
        assert!(matches!(result, Err(PbnjError::Timeout { attempts: 1, .. })));
        assert!(start.elapsed() < Duration::from_secs(10));
    }
}
