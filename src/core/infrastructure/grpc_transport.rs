//! gRPC implementation of the service traits.

use crate::core::domain::{
    error::{PbnjError, PbnjResult, ValidationError},
    model::client_config::RateLimitConfig,
};
use crate::core::infrastructure::{
    grpc_connector::GrpcConnector,
    proto::{
        BmcClient, ClearSystemEventLogRequest, ClearSystemEventLogResponse, CreateUserRequest,
        CreateUserResponse, DeleteUserRequest, DeleteUserResponse, DeviceRequest, DeviceResponse,
        DiagnosticClient, MachineClient, PowerRequest, PowerResponse, StatusRequest,
        StatusResponse, TaskClient, UpdateUserRequest, UpdateUserResponse,
    },
    transport::{BmcService, DiagnosticService, MachineService, TaskService},
};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota};
use std::num::NonZeroU32;
use std::sync::{Arc, OnceLock};
use tonic::transport::Channel;
use tracing::warn;

impl From<tonic::Status> for PbnjError {
    fn from(status: tonic::Status) -> Self {
        PbnjError::Transport(format!("{:?}: {}", status.code(), status.message()))
    }
}

/// Shared client-side limiter applied before every RPC.
#[derive(Debug, Clone, Default)]
pub(crate) struct RpcThrottle {
    limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl RpcThrottle {
    pub(crate) fn new(config: Option<RateLimitConfig>) -> PbnjResult<Self> {
        let limiter = match config {
            Some(rl) => {
                rl.validate()?;
                let per_second = NonZeroU32::new(rl.requests_per_second).ok_or_else(|| {
                    ValidationError::ConstraintViolation("Rate limit cannot be 0".to_string())
                })?;
                let burst = NonZeroU32::new(rl.burst_size).ok_or_else(|| {
                    ValidationError::ConstraintViolation("Burst size cannot be 0".to_string())
                })?;
                let quota = Quota::per_second(per_second).allow_burst(burst);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };
        Ok(Self { limiter })
    }

    pub(crate) async fn acquire(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}

/// Talks to a PBnJ server over gRPC.
///
/// All calls, from this value and its clones, share one lazily-connected
/// channel. Stubs are cheap wrappers around a channel clone and are built
/// per call, so concurrent callers multiplex over a single HTTP/2
/// connection without contending on a shared stub.
#[derive(Debug, Clone)]
pub struct GrpcTransport {
    connector: GrpcConnector,
    channel: Arc<OnceLock<Channel>>,
    throttle: RpcThrottle,
}

impl GrpcTransport {
    /// Creates a transport; `rate_limit` of `None` disables throttling.
    ///
    /// No channel is created until the first call, so this does not need a
    /// running tokio runtime.
    ///
    /// # Errors
    /// Returns `PbnjError::Validation` if the rate limit is zero.
    pub fn new(connector: GrpcConnector, rate_limit: Option<RateLimitConfig>) -> PbnjResult<Self> {
        Ok(Self {
            connector,
            channel: Arc::new(OnceLock::new()),
            throttle: RpcThrottle::new(rate_limit)?,
        })
    }

    pub fn connector(&self) -> &GrpcConnector {
        &self.connector
    }

    fn channel(&self) -> PbnjResult<Channel> {
        if let Some(channel) = self.channel.get() {
            return Ok(channel.clone());
        }
        // A racing first call may open a second channel; only one is kept
        // and neither has dialed yet.
        let channel = self.connector.open_channel()?;
        Ok(self.channel.get_or_init(|| channel).clone())
    }

    fn transport_error(&self, method: &str, status: tonic::Status) -> PbnjError {
        warn!(
            endpoint = %self.connector.endpoint(),
            method,
            code = ?status.code(),
            "rpc failed: {}",
            status.message()
        );
        status.into()
    }
}

#[async_trait]
impl MachineService for GrpcTransport {
    async fn power(&self, request: PowerRequest) -> PbnjResult<PowerResponse> {
        self.throttle.acquire().await;
        MachineClient::new(self.channel()?)
            .power(request)
            .await
            .map(tonic::Response::into_inner)
            .map_err(|status| self.transport_error("Machine/Power", status))
    }

    async fn boot_device(&self, request: DeviceRequest) -> PbnjResult<DeviceResponse> {
        self.throttle.acquire().await;
        MachineClient::new(self.channel()?)
            .boot_device(request)
            .await
            .map(tonic::Response::into_inner)
            .map_err(|status| self.transport_error("Machine/BootDevice", status))
    }
}

#[async_trait]
impl BmcService for GrpcTransport {
    async fn create_user(&self, request: CreateUserRequest) -> PbnjResult<CreateUserResponse> {
        self.throttle.acquire().await;
        BmcClient::new(self.channel()?)
            .create_user(request)
            .await
            .map(tonic::Response::into_inner)
            .map_err(|status| self.transport_error("BMC/CreateUser", status))
    }

    async fn update_user(&self, request: UpdateUserRequest) -> PbnjResult<UpdateUserResponse> {
        self.throttle.acquire().await;
        BmcClient::new(self.channel()?)
            .update_user(request)
            .await
            .map(tonic::Response::into_inner)
            .map_err(|status| self.transport_error("BMC/UpdateUser", status))
    }

    async fn delete_user(&self, request: DeleteUserRequest) -> PbnjResult<DeleteUserResponse> {
        self.throttle.acquire().await;
        BmcClient::new(self.channel()?)
            .delete_user(request)
            .await
            .map(tonic::Response::into_inner)
            .map_err(|status| self.transport_error("BMC/DeleteUser", status))
    }
}

#[async_trait]
impl DiagnosticService for GrpcTransport {
    async fn clear_system_event_log(
        &self,
        request: ClearSystemEventLogRequest,
    ) -> PbnjResult<ClearSystemEventLogResponse> {
        self.throttle.acquire().await;
        DiagnosticClient::new(self.channel()?)
            .clear_system_event_log(request)
            .await
            .map(tonic::Response::into_inner)
            .map_err(|status| self.transport_error("Diagnostic/ClearSystemEventLog", status))
    }
}

#[async_trait]
impl TaskService for GrpcTransport {
    async fn status(&self, request: StatusRequest) -> PbnjResult<StatusResponse> {
        self.throttle.acquire().await;
        TaskClient::new(self.channel()?)
            .status(request)
            .await
            .map(tonic::Response::into_inner)
            .map_err(|status| self.transport_error("Task/Status", status))
    }
}
