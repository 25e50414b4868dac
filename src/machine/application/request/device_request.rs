use crate::core::domain::{
    error::{PbnjResult, ValidationError},
    model::{
        credential::Credential,
        machine_action::{BootDevice, BootOptions},
    },
};
use crate::core::infrastructure::proto;

use super::power_request::{build_authn, build_vendor};

/// Builds the `Machine/BootDevice` request.
pub fn build_device_request(
    credential: &Credential,
    options: BootOptions,
) -> PbnjResult<proto::DeviceRequest> {
    if options.device == BootDevice::Unspecified {
        return Err(ValidationError::Field {
            field: "boot_device".to_string(),
            message: "A boot device must be given".to_string(),
        }
        .into());
    }
    Ok(proto::DeviceRequest {
        authn: Some(build_authn(credential)),
        vendor: build_vendor(credential),
        boot_device: options.device.code(),
        persistent: options.persistent,
        efi_boot: options.efi_boot,
    })
}
