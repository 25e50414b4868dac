//! Async client for a PBnJ bare-metal power-management server.
//!
//! Submitting a machine action returns a task id straight away; the outcome
//! is fetched by polling the task service with a bounded budget. See
//! [`TaskHandle`] for the tracking side.

#![feature(error_generic_member_access)]

mod core;
mod machine;
mod task;


pub use crate::core::domain::{
    error::{PbnjError, PbnjResult, ResponseError, ValidationError},
    model::{
        bmc_user::{BmcUser, UserRole},
        client_config::{PollPolicy, RateLimitConfig, TransportTimeouts},
        connection_config::ConnectionConfig,
        credential::Credential,
        machine_action::{BootDevice, BootOptions, PowerAction, PowerOptions},
        task_status::{TaskState, TaskStatus},
    },
    value_object::{
        BmcHost, BmcPassword, BmcUsername, DEFAULT_SERVICE_PORT, ServiceHost, ServicePort, TaskId,
    },
};
pub use crate::core::infrastructure::{
    grpc_connector::{GrpcConnector, ServiceKind, ServiceStub},
    grpc_transport::GrpcTransport,
    proto,
    transport::{BmcService, DiagnosticService, MachineService, ServiceSet, TaskService},
};
pub use crate::task::application::{service::task_tracker::TaskTracker, task_handle::TaskHandle};
pub use tokio_util::sync::CancellationToken;

use crate::machine::application::service::action_service::ActionService;
use std::sync::Arc;

/// A client for the PBnJ machine and task services.
///
/// # Examples
///
/// ```no_run
/// use pbnj_client::{PbnjClient, PbnjResult};
///
/// #[tokio::main]
/// async fn main() -> PbnjResult<()> {
///     let client = PbnjClient::builder()
///         .host("localhost")?
///         .port(50051)?
///         .build()?;
///
///     let mut task = client
///         .request_power_status("10.250.1.17", "ADMIN", "ADMIN")
///         .await?;
///     let status = task.wait().await?;
///     println!("power: {} (failed: {})", status.result, task.failed());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PbnjClient {
    connector: Option<GrpcConnector>,
    actions: ActionService,
    tracker: TaskTracker,
}

/// Builder for PbnjClient configuration
///
/// Only the server `host` and `port` address the connection; everything
/// else tunes polling and the transport.
#[derive(Debug, Default)]
pub struct PbnjClientBuilder {
    host: Option<String>,
    port: Option<u16>,
    poll_policy: PollPolicy,
    rate_limit: Option<RateLimitConfig>,
    timeouts: TransportTimeouts,
}

impl PbnjClientBuilder {
    pub fn host(mut self, host: impl Into<String>) -> PbnjResult<Self> {
        self.host = Some(host.into());
        Ok(self)
    }

    pub fn port(mut self, port: u16) -> PbnjResult<Self> {
        ServicePort::new(port)?;
        self.port = Some(port);
        Ok(self)
    }

    pub fn poll_policy(mut self, policy: PollPolicy) -> Self {
        self.poll_policy = policy;
        self
    }

    /// Throttles every RPC the client sends. Disabled by default.
    pub fn rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = Some(rate_limit);
        self
    }

    pub fn timeouts(mut self, timeouts: TransportTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Validates the configuration and creates the client.
    ///
    /// No connection is opened here; channels are dialed on first use.
    ///
    /// # Errors
    /// Returns `PbnjError::Validation` if the host is missing or malformed,
    /// the port is 0, or the polling policy or rate limit is invalid.
    pub fn build(self) -> PbnjResult<PbnjClient> {
        let host = ServiceHost::new(self.host.ok_or_else(|| ValidationError::Field {
            field: "host".to_string(),
            message: "Host is required".to_string(),
        })?)?;
        let port = match self.port {
            Some(port) => ServicePort::new(port)?,
            None => ServicePort::default(),
        };
        self.poll_policy.validate()?;

        let connector = GrpcConnector::new(ConnectionConfig::new(host, port), self.timeouts)?;
        let transport = Arc::new(GrpcTransport::new(connector.clone(), self.rate_limit)?);
        let services = ServiceSet::from_shared(transport);

        Ok(PbnjClient {
            connector: Some(connector),
            actions: ActionService::new(&services),
            tracker: TaskTracker::new(services.task, self.poll_policy),
        })
    }
}

impl PbnjClient {
    /// Creates a new builder for PbnjClient configuration
    pub fn builder() -> PbnjClientBuilder {
        PbnjClientBuilder::default()
    }

    /// Creates a client over caller-supplied service implementations.
    ///
    /// # Errors
    /// Returns `PbnjError::Validation` if the polling policy is invalid.
    pub fn with_services(services: ServiceSet, policy: PollPolicy) -> PbnjResult<Self> {
        policy.validate()?;
        Ok(Self {
            connector: None,
            actions: ActionService::new(&services),
            tracker: TaskTracker::new(services.task, policy),
        })
    }

    /// The server address, when the client was built over gRPC.
    pub fn connection(&self) -> Option<&ConnectionConfig> {
        self.connector.as_ref().map(GrpcConnector::config)
    }

    pub fn poll_policy(&self) -> &PollPolicy {
        self.tracker.policy()
    }

    /// Returns a fresh stub bound to the given service, on a channel of its
    /// own. Nothing is dialed until the stub's first RPC.
    ///
    /// # Errors
    /// Returns `PbnjError::Validation` if the client was created with
    /// [`PbnjClient::with_services`] and so has no server address.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime, since the channel's
    /// background worker is spawned onto the current one.
    pub fn connect(&self, kind: ServiceKind) -> PbnjResult<ServiceStub> {
        self.connector
            .as_ref()
            .ok_or_else(|| {
                ValidationError::ConstraintViolation(
                    "Client has no gRPC connection configured".to_string(),
                )
            })?
            .connect(kind)
    }

    /// Asks the server for the power state of a machine.
    ///
    /// # Errors
    /// * `PbnjError::Validation` - empty host, username or password
    /// * `PbnjError::Transport` - the request could not be dispatched; no
    ///   task was created and nothing is retried
    pub async fn request_power_status(
        &self,
        host: &str,
        username: &str,
        password: &str,
    ) -> PbnjResult<TaskHandle> {
        let credential = Credential::new(host, username, password)?;
        self.request_power(&credential, PowerAction::Status, PowerOptions::default())
            .await
    }

    /// Submits any power action.
    pub async fn request_power(
        &self,
        credential: &Credential,
        action: PowerAction,
        options: PowerOptions,
    ) -> PbnjResult<TaskHandle> {
        let task_id = self.actions.power(credential, action, options).await?;
        Ok(self.track(task_id))
    }

    /// Sets the next boot device of a machine.
    pub async fn request_boot_device(
        &self,
        credential: &Credential,
        options: BootOptions,
    ) -> PbnjResult<TaskHandle> {
        let task_id = self.actions.boot_device(credential, options).await?;
        Ok(self.track(task_id))
    }

    /// Creates an account on the machine's BMC.
    pub async fn request_create_user(
        &self,
        credential: &Credential,
        user: &BmcUser,
    ) -> PbnjResult<TaskHandle> {
        let task_id = self.actions.create_user(credential, user).await?;
        Ok(self.track(task_id))
    }

    /// Changes the password and role of an existing BMC account.
    pub async fn request_update_user(
        &self,
        credential: &Credential,
        user: &BmcUser,
    ) -> PbnjResult<TaskHandle> {
        let task_id = self.actions.update_user(credential, user).await?;
        Ok(self.track(task_id))
    }

    /// Removes a BMC account.
    ///
    /// # Errors
    /// `PbnjError::Validation` if `username` is empty, otherwise as
    /// [`PbnjClient::request_power`].
    pub async fn request_delete_user(
        &self,
        credential: &Credential,
        username: &str,
    ) -> PbnjResult<TaskHandle> {
        let username = BmcUsername::new(username)?;
        let task_id = self.actions.delete_user(credential, &username).await?;
        Ok(self.track(task_id))
    }

    /// Clears the machine's System Event Log.
    pub async fn request_clear_system_event_log(
        &self,
        credential: &Credential,
    ) -> PbnjResult<TaskHandle> {
        let task_id = self.actions.clear_system_event_log(credential).await?;
        Ok(self.track(task_id))
    }

    /// Requests the power state and waits for the finished task.
    ///
    /// A task that completed with an error code is returned as-is; inspect
    /// [`TaskStatus::is_failed`].
    pub async fn power_status(
        &self,
        host: &str,
        username: &str,
        password: &str,
    ) -> PbnjResult<TaskStatus> {
        self.request_power_status(host, username, password)
            .await?
            .wait()
            .await
    }

    /// Attaches a handle to a task id obtained elsewhere.
    pub fn track(&self, task_id: TaskId) -> TaskHandle {
        TaskHandle::new(task_id, self.tracker.clone())
    }
}

#[cfg(test)]
mod client_tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builder_defaults() {
        let client = PbnjClient::builder().host("localhost").unwrap().build().unwrap();
        let connection = client.connection().unwrap();
        assert_eq!(connection.host().as_str(), "localhost");
        assert_eq!(connection.port().get(), DEFAULT_SERVICE_PORT);
        assert_eq!(client.poll_policy(), &PollPolicy::default());
    }

    #[test]
    fn test_builder_requires_host() {
        let result = PbnjClient::builder().port(9090).unwrap().build();
        assert!(matches!(
            result,
            Err(PbnjError::Validation {
                source: ValidationError::Field { ref field, .. },
                ..
            }) if field == "host"
        ));
    }

    #[test]
    fn test_builder_rejects_bad_values() {
        assert!(PbnjClient::builder().port(0).is_err());
        assert!(
            PbnjClient::builder()
                .host("not a host")
                .unwrap()
                .build()
                .is_err()
        );
        assert!(
            PbnjClient::builder()
                .host("localhost")
                .unwrap()
                .poll_policy(PollPolicy {
                    max_attempts: 0,
                    ..PollPolicy::default()
                })
                .build()
                .is_err()
        );
        assert!(
            PbnjClient::builder()
                .host("localhost")
                .unwrap()
                .rate_limit(RateLimitConfig {
                    requests_per_second: 0,
                    burst_size: 0,
                })
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_builder_custom_policy() {
        let policy = PollPolicy {
            initial_delay: Duration::ZERO,
            interval: Duration::from_millis(500),
            max_attempts: 4,
        };
        let client = PbnjClient::builder()
            .host("10.0.0.1")
            .unwrap()
            .port(9090)
            .unwrap()
            .poll_policy(policy)
            .build()
            .unwrap();
        assert_eq!(client.poll_policy().max_attempts, 4);
        assert_eq!(client.connection().unwrap().port().get(), 9090);
    }

    #[tokio::test]
    async fn test_connect_via_client() {
        let client = PbnjClient::builder().host("localhost").unwrap().build().unwrap();
        assert!(matches!(
            client.connect(ServiceKind::Machine),
            Ok(ServiceStub::Machine(_))
        ));
        assert!(matches!(
            client.connect(ServiceKind::Task),
            Ok(ServiceStub::Task(_))
        ));
    }
}
