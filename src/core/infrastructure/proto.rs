//! Wire types and unary stubs for the `github.com.tinkerbell.pbnj.api.v1`
//! gRPC package.
//!
//! Only the messages and methods this client uses are declared. Field tags
//! follow the service's `.proto` definitions, so unknown fields sent by
//! newer servers are skipped by prost.

use crate::core::domain::model::task_status::{TaskState, TaskStatus};
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;
use tonic::{GrpcMethod, IntoRequest};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Host {
    #[prost(string, tag = "1")]
    pub host: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DirectAuthn {
    #[prost(message, optional, tag = "1")]
    pub host: ::core::option::Option<Host>,
    #[prost(string, tag = "2")]
    pub username: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub password: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Authn {
    #[prost(oneof = "authn::Authn", tags = "1")]
    pub authn: ::core::option::Option<authn::Authn>,
}

pub mod authn {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Authn {
        #[prost(message, tag = "1")]
        DirectAuthn(super::DirectAuthn),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Vendor {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PowerAction {
    Unspecified = 0,
    On = 1,
    Off = 2,
    Hardoff = 3,
    Cycle = 4,
    Reset = 5,
    Status = 6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BootDevice {
    Unspecified = 0,
    None = 1,
    Bios = 2,
    Disk = 3,
    Cdrom = 4,
    Pxe = 5,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PowerRequest {
    #[prost(message, optional, tag = "1")]
    pub authn: ::core::option::Option<Authn>,
    #[prost(message, optional, tag = "2")]
    pub vendor: ::core::option::Option<Vendor>,
    #[prost(enumeration = "PowerAction", tag = "3")]
    pub power_action: i32,
    #[prost(int32, tag = "4")]
    pub soft_timeout: i32,
    #[prost(int32, tag = "5")]
    pub off_duration: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PowerResponse {
    #[prost(string, tag = "1")]
    pub task_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceRequest {
    #[prost(message, optional, tag = "1")]
    pub authn: ::core::option::Option<Authn>,
    #[prost(message, optional, tag = "2")]
    pub vendor: ::core::option::Option<Vendor>,
    #[prost(enumeration = "BootDevice", tag = "3")]
    pub boot_device: i32,
    #[prost(bool, tag = "4")]
    pub persistent: bool,
    #[prost(bool, tag = "5")]
    pub efi_boot: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceResponse {
    #[prost(string, tag = "1")]
    pub task_id: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum UserRole {
    Unspecified = 0,
    Admin = 1,
    User = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserCreds {
    #[prost(string, tag = "1")]
    pub username: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub password: ::prost::alloc::string::String,
    #[prost(enumeration = "UserRole", tag = "3")]
    pub user_role: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateUserRequest {
    #[prost(message, optional, tag = "1")]
    pub authn: ::core::option::Option<Authn>,
    #[prost(message, optional, tag = "2")]
    pub vendor: ::core::option::Option<Vendor>,
    #[prost(message, optional, tag = "3")]
    pub user_creds: ::core::option::Option<UserCreds>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateUserResponse {
    #[prost(string, tag = "1")]
    pub task_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateUserRequest {
    #[prost(message, optional, tag = "1")]
    pub authn: ::core::option::Option<Authn>,
    #[prost(message, optional, tag = "2")]
    pub vendor: ::core::option::Option<Vendor>,
    #[prost(message, optional, tag = "3")]
    pub user_creds: ::core::option::Option<UserCreds>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateUserResponse {
    #[prost(string, tag = "1")]
    pub task_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteUserRequest {
    #[prost(message, optional, tag = "1")]
    pub authn: ::core::option::Option<Authn>,
    #[prost(message, optional, tag = "2")]
    pub vendor: ::core::option::Option<Vendor>,
    #[prost(string, tag = "3")]
    pub username: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteUserResponse {
    #[prost(string, tag = "1")]
    pub task_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClearSystemEventLogRequest {
    #[prost(message, optional, tag = "1")]
    pub authn: ::core::option::Option<Authn>,
    #[prost(message, optional, tag = "2")]
    pub vendor: ::core::option::Option<Vendor>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClearSystemEventLogResponse {
    #[prost(string, tag = "1")]
    pub task_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StatusRequest {
    #[prost(string, tag = "1")]
    pub task_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Error {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "3")]
    pub details: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StatusResponse {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub error: ::core::option::Option<Error>,
    #[prost(string, tag = "4")]
    pub state: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub result: ::prost::alloc::string::String,
    #[prost(bool, tag = "6")]
    pub complete: bool,
    #[prost(string, repeated, tag = "7")]
    pub messages: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

impl From<StatusResponse> for TaskStatus {
    fn from(response: StatusResponse) -> Self {
        let error = response.error.unwrap_or_default();
        TaskStatus {
            id: response.id,
            description: response.description,
            state: TaskState::from(response.state),
            complete: response.complete,
            error_code: error.code,
            error_message: error.message,
            error_details: error.details,
            result: response.result,
            messages: response.messages,
        }
    }
}

async fn unary<Req, Resp>(
    inner: &mut tonic::client::Grpc<Channel>,
    service: &'static str,
    method: &'static str,
    path: &'static str,
    request: Req,
) -> Result<tonic::Response<Resp>, tonic::Status>
where
    Req: ::prost::Message + Send + Sync + 'static,
    Resp: ::prost::Message + Default + Send + Sync + 'static,
{
    inner
        .ready()
        .await
        .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e)))?;
    let codec = tonic_prost::ProstCodec::<Req, Resp>::default();
    let mut req = request.into_request();
    req.extensions_mut().insert(GrpcMethod::new(service, method));
    inner
        .unary(req, PathAndQuery::from_static(path), codec)
        .await
}

/// Stub for the `Machine` service.
#[derive(Debug, Clone)]
pub struct MachineClient {
    inner: tonic::client::Grpc<Channel>,
}

impl MachineClient {
    const SERVICE: &'static str = "github.com.tinkerbell.pbnj.api.v1.Machine";

    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn power(
        &mut self,
        request: PowerRequest,
    ) -> Result<tonic::Response<PowerResponse>, tonic::Status> {
        unary(
            &mut self.inner,
            Self::SERVICE,
            "Power",
            "/github.com.tinkerbell.pbnj.api.v1.Machine/Power",
            request,
        )
        .await
    }

    pub async fn boot_device(
        &mut self,
        request: DeviceRequest,
    ) -> Result<tonic::Response<DeviceResponse>, tonic::Status> {
        unary(
            &mut self.inner,
            Self::SERVICE,
            "BootDevice",
            "/github.com.tinkerbell.pbnj.api.v1.Machine/BootDevice",
            request,
        )
        .await
    }
}

/// Stub for the `BMC` service (account management).
#[derive(Debug, Clone)]
pub struct BmcClient {
    inner: tonic::client::Grpc<Channel>,
}

impl BmcClient {
    const SERVICE: &'static str = "github.com.tinkerbell.pbnj.api.v1.BMC";

    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn create_user(
        &mut self,
        request: CreateUserRequest,
    ) -> Result<tonic::Response<CreateUserResponse>, tonic::Status> {
        unary(
            &mut self.inner,
            Self::SERVICE,
            "CreateUser",
            "/github.com.tinkerbell.pbnj.api.v1.BMC/CreateUser",
            request,
        )
        .await
    }

    pub async fn update_user(
        &mut self,
        request: UpdateUserRequest,
    ) -> Result<tonic::Response<UpdateUserResponse>, tonic::Status> {
        unary(
            &mut self.inner,
            Self::SERVICE,
            "UpdateUser",
            "/github.com.tinkerbell.pbnj.api.v1.BMC/UpdateUser",
            request,
        )
        .await
    }

    pub async fn delete_user(
        &mut self,
        request: DeleteUserRequest,
    ) -> Result<tonic::Response<DeleteUserResponse>, tonic::Status> {
        unary(
            &mut self.inner,
            Self::SERVICE,
            "DeleteUser",
            "/github.com.tinkerbell.pbnj.api.v1.BMC/DeleteUser",
            request,
        )
        .await
    }
}

/// Stub for the `Diagnostic` service.
#[derive(Debug, Clone)]
pub struct DiagnosticClient {
    inner: tonic::client::Grpc<Channel>,
}

impl DiagnosticClient {
    const SERVICE: &'static str = "github.com.tinkerbell.pbnj.api.v1.Diagnostic";

    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn clear_system_event_log(
        &mut self,
        request: ClearSystemEventLogRequest,
    ) -> Result<tonic::Response<ClearSystemEventLogResponse>, tonic::Status> {
        unary(
            &mut self.inner,
            Self::SERVICE,
            "ClearSystemEventLog",
            "/github.com.tinkerbell.pbnj.api.v1.Diagnostic/ClearSystemEventLog",
            request,
        )
        .await
    }
}

/// Stub for the `Task` service.
#[derive(Debug, Clone)]
pub struct TaskClient {
    inner: tonic::client::Grpc<Channel>,
}

impl TaskClient {
    const SERVICE: &'static str = "github.com.tinkerbell.pbnj.api.v1.Task";

    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn status(
        &mut self,
        request: StatusRequest,
    ) -> Result<tonic::Response<StatusResponse>, tonic::Status> {
        unary(
            &mut self.inner,
            Self::SERVICE,
            "Status",
            "/github.com.tinkerbell.pbnj.api.v1.Task/Status",
            request,
        )
        .await
    }
}
