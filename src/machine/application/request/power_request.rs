use crate::core::domain::{
    error::{PbnjResult, ValidationError},
    model::{
        credential::Credential,
        machine_action::{PowerAction, PowerOptions},
    },
};
use crate::core::infrastructure::proto::{self, Authn, DirectAuthn, Host, Vendor};

/// Wraps a credential into the wire `Authn` message.
pub(crate) fn build_authn(credential: &Credential) -> Authn {
    Authn {
        authn: Some(proto::authn::Authn::DirectAuthn(DirectAuthn {
            host: Some(Host {
                host: credential.host().as_str().to_string(),
            }),
            username: credential.username().as_str().to_string(),
            password: credential.password().as_str().to_string(),
        })),
    }
}

pub(crate) fn build_vendor(credential: &Credential) -> Option<Vendor> {
    credential.vendor().map(|name| Vendor {
        name: name.to_string(),
    })
}

fn seconds(field: &str, value: u32) -> Result<i32, ValidationError> {
    i32::try_from(value).map_err(|_| ValidationError::Field {
        field: field.to_string(),
        message: format!("{} seconds is out of range", value),
    })
}

/// Builds the `Machine/Power` request for one action.
pub fn build_power_request(
    credential: &Credential,
    action: PowerAction,
    options: PowerOptions,
) -> PbnjResult<proto::PowerRequest> {
    if action == PowerAction::Unspecified {
        return Err(ValidationError::Field {
            field: "power_action".to_string(),
            message: "A power action must be given".to_string(),
        }
        .into());
    }
    Ok(proto::PowerRequest {
        authn: Some(build_authn(credential)),
        vendor: build_vendor(credential),
        power_action: action.code(),
        soft_timeout: seconds("soft_timeout", options.soft_timeout_secs)?,
        off_duration: seconds("off_duration", options.off_duration_secs)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::error::PbnjError;

    fn direct(request: &proto::PowerRequest) -> &DirectAuthn {
        match request.authn.as_ref().and_then(|a| a.authn.as_ref()) {
            Some(proto::authn::Authn::DirectAuthn(direct)) => direct,
            None => panic!("request carries no direct authn"),
        }
    }

    #[test]
    fn test_status_request_embeds_credential_verbatim() {
        let credential = Credential::new("10.250.1.17", "ADMIN", " pass with spaces ").unwrap();
        let request =
            build_power_request(&credential, PowerAction::Status, PowerOptions::default())
                .unwrap();

        assert_eq!(request.power_action(), proto::PowerAction::Status);
        let direct = direct(&request);
        assert_eq!(direct.host.as_ref().unwrap().host, "10.250.1.17");
        assert_eq!(direct.username, "ADMIN");
        assert_eq!(direct.password, " pass with spaces ");
        assert_eq!(request.vendor, None);
        assert_eq!(request.soft_timeout, 0);
        assert_eq!(request.off_duration, 0);
    }

    #[test]
    fn test_every_action_maps_to_wire_code() {
        let credential = Credential::new("bmc", "u", "p").unwrap();
        let cases = [
            (PowerAction::On, proto::PowerAction::On),
            (PowerAction::Off, proto::PowerAction::Off),
            (PowerAction::HardOff, proto::PowerAction::Hardoff),
            (PowerAction::Cycle, proto::PowerAction::Cycle),
            (PowerAction::Reset, proto::PowerAction::Reset),
            (PowerAction::Status, proto::PowerAction::Status),
        ];
        for (action, wire) in cases {
            let request =
                build_power_request(&credential, action, PowerOptions::default()).unwrap();
            assert_eq!(request.power_action(), wire, "action {}", action);
        }
    }

    #[test]
    fn test_options_and_vendor_are_forwarded() {
        let credential = Credential::new("bmc", "u", "p").unwrap().with_vendor("HP");
        let options = PowerOptions {
            soft_timeout_secs: 30,
            off_duration_secs: 10,
        };
        let request = build_power_request(&credential, PowerAction::Cycle, options).unwrap();
        assert_eq!(request.vendor.unwrap().name, "HP");
        assert_eq!(request.soft_timeout, 30);
        assert_eq!(request.off_duration, 10);
    }

    #[test]
    fn test_unspecified_action_rejected() {
        let credential = Credential::new("bmc", "u", "p").unwrap();
        let result =
            build_power_request(&credential, PowerAction::Unspecified, PowerOptions::default());
        assert!(matches!(
            result,
            Err(PbnjError::Validation {
                source: ValidationError::Field { ref field, .. },
                ..
            }) if field == "power_action"
        ));
    }

    #[test]
    fn test_out_of_range_duration_rejected() {
        let credential = Credential::new("bmc", "u", "p").unwrap();
        let options = PowerOptions {
            soft_timeout_secs: u32::MAX,
            off_duration_secs: 0,
        };
        assert!(build_power_request(&credential, PowerAction::Off, options).is_err());
    }
}
