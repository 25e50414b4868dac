use crate::core::domain::model::credential::Credential;
use crate::core::infrastructure::proto;

use super::power_request::{build_authn, build_vendor};

/// Builds the `Diagnostic/ClearSystemEventLog` request.
pub fn build_clear_event_log_request(credential: &Credential) -> proto::ClearSystemEventLogRequest {
    proto::ClearSystemEventLogRequest {
        authn: Some(build_authn(credential)),
        vendor: build_vendor(credential),
    }
}
