//! The RPC contract the client depends on.
//!
//! Everything above this seam works against these traits; the gRPC
//! implementation lives in `grpc_transport`, and tests plug in mocks.

use crate::core::domain::error::PbnjResult;
use crate::core::infrastructure::proto::{
    ClearSystemEventLogRequest, ClearSystemEventLogResponse, CreateUserRequest,
    CreateUserResponse, DeleteUserRequest, DeleteUserResponse, DeviceRequest, DeviceResponse,
    PowerRequest, PowerResponse, StatusRequest, StatusResponse, UpdateUserRequest,
    UpdateUserResponse,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Machine actions. Every call starts a server-side task and returns its id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MachineService: Send + Sync {
    async fn power(&self, request: PowerRequest) -> PbnjResult<PowerResponse>;

    async fn boot_device(&self, request: DeviceRequest) -> PbnjResult<DeviceResponse>;
}

/// BMC account management. Every call starts a server-side task.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BmcService: Send + Sync {
    async fn create_user(&self, request: CreateUserRequest) -> PbnjResult<CreateUserResponse>;

    async fn update_user(&self, request: UpdateUserRequest) -> PbnjResult<UpdateUserResponse>;

    async fn delete_user(&self, request: DeleteUserRequest) -> PbnjResult<DeleteUserResponse>;
}

/// Diagnostic actions that start a server-side task.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiagnosticService: Send + Sync {
    async fn clear_system_event_log(
        &self,
        request: ClearSystemEventLogRequest,
    ) -> PbnjResult<ClearSystemEventLogResponse>;
}

/// Task status queries. Repeated calls are side-effect free on the server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskService: Send + Sync {
    async fn status(&self, request: StatusRequest) -> PbnjResult<StatusResponse>;
}

/// The full set of services a client dispatches through.
#[derive(Clone)]
pub struct ServiceSet {
    pub machine: Arc<dyn MachineService>,
    pub bmc: Arc<dyn BmcService>,
    pub diagnostic: Arc<dyn DiagnosticService>,
    pub task: Arc<dyn TaskService>,
}

impl ServiceSet {
    /// Uses one implementation for every service.
    pub fn from_shared<T>(transport: Arc<T>) -> Self
    where
        T: MachineService + BmcService + DiagnosticService + TaskService + 'static,
    {
        Self {
            machine: transport.clone(),
            bmc: transport.clone(),
            diagnostic: transport.clone(),
            task: transport,
        }
    }
}
