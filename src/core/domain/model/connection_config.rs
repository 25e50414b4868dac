use crate::core::domain::{
    error::{PbnjResult, ValidationError},
    value_object::{ServiceHost, ServicePort},
};
use url::Url;

/// Where the PBnJ server lives. Immutable once the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    host: ServiceHost,
    port: ServicePort,
}

impl ConnectionConfig {
    pub fn new(host: ServiceHost, port: ServicePort) -> Self {
        Self { host, port }
    }

    pub fn host(&self) -> &ServiceHost {
        &self.host
    }

    pub fn port(&self) -> ServicePort {
        self.port
    }

    /// Plaintext HTTP/2 endpoint of the server, e.g. `http://localhost:50051/`.
    pub fn endpoint_url(&self) -> PbnjResult<Url> {
        let raw = format!("http://{}:{}", self.host.as_authority(), self.port);
        Url::parse(&raw)
            .map_err(|e| ValidationError::Format(format!("Invalid endpoint URL '{}': {}", raw, e)))
            .map_err(Into::into)
    }
}
