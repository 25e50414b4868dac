use crate::core::domain::error::{PbnjResult, ValidationError};
use std::fmt;

/// Port the PBnJ server listens on unless configured otherwise.
pub const DEFAULT_SERVICE_PORT: u16 = 50051;

/// A validated PBnJ server port number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePort(u16);

impl ServicePort {
    /// Creates a validated port.
    pub fn new(port: u16) -> PbnjResult<Self> {
        validate_port(port)?;
        Ok(Self(port))
    }

    /// Returns the port number.
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl Default for ServicePort {
    fn default() -> Self {
        Self(DEFAULT_SERVICE_PORT)
    }
}

impl fmt::Display for ServicePort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates a port number.
pub(crate) fn validate_port(port: u16) -> Result<(), ValidationError> {
    if port == 0 {
        return Err(ValidationError::Field {
            field: "port".to_string(),
            message: "Port cannot be 0".to_string(),
        });
    }
    // All ports 1-65535 are valid.
    Ok(())
}
