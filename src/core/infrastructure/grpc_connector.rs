//! Connection factory: turns the configured server address into gRPC stubs.

use crate::core::domain::{
    error::{PbnjError, PbnjResult},
    model::{client_config::TransportTimeouts, connection_config::ConnectionConfig},
};
use crate::core::infrastructure::proto::{BmcClient, DiagnosticClient, MachineClient, TaskClient};
use std::fmt;
use std::sync::Arc;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

/// The logical services exposed by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Machine,
    Bmc,
    Diagnostic,
    Task,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Machine => f.write_str("machine"),
            ServiceKind::Bmc => f.write_str("bmc"),
            ServiceKind::Diagnostic => f.write_str("diagnostic"),
            ServiceKind::Task => f.write_str("task"),
        }
    }
}

/// A stub bound to one logical service.
#[derive(Debug, Clone)]
pub enum ServiceStub {
    Machine(MachineClient),
    Bmc(BmcClient),
    Diagnostic(DiagnosticClient),
    Task(TaskClient),
}

/// Builds stubs from an immutable [`ConnectionConfig`].
///
/// Each `connect` call creates its own lazily-connected channel; nothing
/// mutable is shared between stubs. [`GrpcTransport`](super::grpc_transport::GrpcTransport)
/// keeps one channel for all of its calls instead.
#[derive(Debug, Clone)]
pub struct GrpcConnector {
    config: Arc<ConnectionConfig>,
    endpoint: String,
    timeouts: TransportTimeouts,
}

impl GrpcConnector {
    /// Creates a connector. No network traffic happens here.
    ///
    /// # Errors
    /// Returns `PbnjError::Validation` if the address does not form a valid URL.
    pub fn new(config: ConnectionConfig, timeouts: TransportTimeouts) -> PbnjResult<Self> {
        let url = config.endpoint_url()?;
        let endpoint = url.as_str().trim_end_matches('/').to_string();
        Ok(Self {
            config: Arc::new(config),
            endpoint,
            timeouts,
        })
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// The `http://host:port` the stubs dial.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns a stub for the given service kind, on a channel of its own.
    ///
    /// # Panics
    /// The channel's background worker is spawned onto the current tokio
    /// runtime, so this panics when called outside one.
    pub fn connect(&self, kind: ServiceKind) -> PbnjResult<ServiceStub> {
        debug!(service = %kind, "connecting stub");
        let channel = self.open_channel()?;
        Ok(match kind {
            ServiceKind::Machine => ServiceStub::Machine(MachineClient::new(channel)),
            ServiceKind::Bmc => ServiceStub::Bmc(BmcClient::new(channel)),
            ServiceKind::Diagnostic => ServiceStub::Diagnostic(DiagnosticClient::new(channel)),
            ServiceKind::Task => ServiceStub::Task(TaskClient::new(channel)),
        })
    }

    /// Creates a lazily-connected channel. The first RPC on it dials the
    /// server; clones share the underlying HTTP/2 connection.
    pub(crate) fn open_channel(&self) -> PbnjResult<Channel> {
        debug!(endpoint = %self.endpoint, "creating channel");
        let endpoint = Endpoint::from_shared(self.endpoint.clone())
            .map_err(|e| {
                PbnjError::Transport(format!("Invalid endpoint '{}': {}", self.endpoint, e))
            })?
            .connect_timeout(self.timeouts.connect)
            .timeout(self.timeouts.request);
        Ok(endpoint.connect_lazy())
    }
}
