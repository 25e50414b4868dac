//! Tunables for how the client talks to the server and tracks tasks.

use crate::core::domain::error::ValidationError;
use std::time::Duration;

/// Bounded polling budget for task tracking.
///
/// The defaults give a one second settling delay before the first check,
/// then a check every two seconds, for roughly one minute in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay before the first status query.
    pub initial_delay: Duration,
    /// Delay between consecutive status queries.
    pub interval: Duration,
    /// Maximum number of status queries per wait.
    pub max_attempts: u32,
}

impl PollPolicy {
    /// Upper bound on how long one wait sleeps in total, saturating at
    /// `Duration::MAX`.
    pub fn max_wait(&self) -> Duration {
        self.interval
            .saturating_mul(self.max_attempts.saturating_sub(1))
            .saturating_add(self.initial_delay)
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.max_attempts == 0 {
            return Err(ValidationError::Field {
                field: "max_attempts".to_string(),
                message: "Polling needs at least one attempt".to_string(),
            });
        }
        if self.interval.is_zero() {
            return Err(ValidationError::Field {
                field: "interval".to_string(),
                message: "Polling interval cannot be zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            interval: Duration::from_secs(2),
            max_attempts: 30,
        }
    }
}

/// Client-side RPC rate limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.requests_per_second == 0 || self.burst_size == 0 {
            return Err(ValidationError::ConstraintViolation(
                "Rate limit and burst size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Timeouts applied to the gRPC channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportTimeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for TransportTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            request: Duration::from_secs(30),
        }
    }
}
