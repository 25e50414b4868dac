//! Local user accounts on a machine's BMC.

use crate::core::domain::{
    error::{PbnjError, PbnjResult, ValidationError},
    value_object::{BmcPassword, BmcUsername},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Privilege level of a BMC account. Wire codes match the service's
/// `UserRole` enum; the server maps anything but `User` to administrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Admin,
    User,
}

impl UserRole {
    pub fn code(self) -> i32 {
        match self {
            UserRole::Admin => 1,
            UserRole::User => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = PbnjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" | "administrator" => Ok(UserRole::Admin),
            "user" | "operator" => Ok(UserRole::User),
            other => Err(ValidationError::Field {
                field: "user_role".to_string(),
                message: format!("Unknown user role '{}'", other),
            }
            .into()),
        }
    }
}

/// The account to create or update on a BMC. Distinct from the
/// [`Credential`](super::credential::Credential) used to log in to the BMC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmcUser {
    username: BmcUsername,
    password: BmcPassword,
    role: UserRole,
}

impl BmcUser {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: UserRole,
    ) -> PbnjResult<Self> {
        Ok(Self {
            username: BmcUsername::new(username)?,
            password: BmcPassword::new(password)?,
            role,
        })
    }

    pub fn username(&self) -> &BmcUsername {
        &self.username
    }

    pub fn password(&self) -> &BmcPassword {
        &self.password
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}
