use crate::core::domain::{
    error::PbnjResult,
    value_object::{BmcHost, BmcPassword, BmcUsername},
};

/// Direct authentication for a target machine's BMC, forwarded with every
/// machine action. This is distinct from how the client reaches the PBnJ
/// server itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    host: BmcHost,
    username: BmcUsername,
    password: BmcPassword,
    vendor: Option<String>,
}

impl Credential {
    /// Validates and bundles the BMC address and login.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> PbnjResult<Self> {
        Ok(Self {
            host: BmcHost::new(host)?,
            username: BmcUsername::new(username)?,
            password: BmcPassword::new(password)?,
            vendor: None,
        })
    }

    /// Attaches a vendor hint (e.g. `"HP"`) that the server may use to pick
    /// a driver.
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn host(&self) -> &BmcHost {
        &self.host
    }

    pub fn username(&self) -> &BmcUsername {
        &self.username
    }

    pub fn password(&self) -> &BmcPassword {
        &self.password
    }

    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }
}
