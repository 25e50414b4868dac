use crate::core::domain::error::{PbnjResult, ValidationError};

/// Address of the target machine's BMC, as the PBnJ server should reach it.
///
/// The server resolves and dials it, so only presence and basic shape
/// are checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmcHost(String);

impl BmcHost {
    pub fn new(host: impl Into<String>) -> PbnjResult<Self> {
        let host = host.into();
        validate_bmc_host(&host)?;
        Ok(Self(host))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

pub(crate) fn validate_bmc_host(host: &str) -> Result<(), ValidationError> {
    if host.is_empty() {
        return Err(ValidationError::Field {
            field: "host".to_string(),
            message: "BMC host cannot be empty".to_string(),
        });
    }
    if host.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::Format(
            "BMC host cannot contain whitespace".to_string(),
        ));
    }
    Ok(())
}
