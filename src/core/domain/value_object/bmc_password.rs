use crate::core::domain::error::{PbnjResult, ValidationError};
use std::fmt;

/// A BMC password (plaintext, only held for the duration of a request).
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct BmcPassword(String);

impl BmcPassword {
    pub fn new(password: impl Into<String>) -> PbnjResult<Self> {
        let password = password.into();
        validate_password(&password)?;
        Ok(Self(password))
    }

    /// Returns the password as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the object and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for BmcPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BmcPassword(<redacted>)")
    }
}

pub(crate) fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Field {
            field: "password".to_string(),
            message: "Password cannot be empty".to_string(),
        });
    }
    Ok(())
}
