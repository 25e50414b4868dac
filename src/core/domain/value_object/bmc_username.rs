use crate::core::domain::error::{PbnjResult, ValidationError};

/// A BMC login name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmcUsername(String);

impl BmcUsername {
    pub fn new(username: impl Into<String>) -> PbnjResult<Self> {
        let username = username.into();
        validate_username(&username)?;
        Ok(Self(username))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the object and returns the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// BMCs accept short vendor defaults like `ADMIN`, so only emptiness and
/// control characters are rejected.
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::Field {
            field: "username".to_string(),
            message: "Username cannot be empty".to_string(),
        });
    }
    if username.chars().any(char::is_control) {
        return Err(ValidationError::Format(
            "Username contains control characters".to_string(),
        ));
    }
    Ok(())
}
