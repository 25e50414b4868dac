use crate::core::domain::model::{bmc_user::BmcUser, credential::Credential};
use crate::core::domain::value_object::BmcUsername;
use crate::core::infrastructure::proto;

use super::power_request::{build_authn, build_vendor};

fn user_creds(user: &BmcUser) -> proto::UserCreds {
    proto::UserCreds {
        username: user.username().as_str().to_string(),
        password: user.password().as_str().to_string(),
        user_role: user.role().code(),
    }
}

/// Builds the `BMC/CreateUser` request.
pub fn build_create_user_request(
    credential: &Credential,
    user: &BmcUser,
) -> proto::CreateUserRequest {
    proto::CreateUserRequest {
        authn: Some(build_authn(credential)),
        vendor: build_vendor(credential),
        user_creds: Some(user_creds(user)),
    }
}

/// Builds the `BMC/UpdateUser` request. The account is matched by username.
pub fn build_update_user_request(
    credential: &Credential,
    user: &BmcUser,
) -> proto::UpdateUserRequest {
    proto::UpdateUserRequest {
        authn: Some(build_authn(credential)),
        vendor: build_vendor(credential),
        user_creds: Some(user_creds(user)),
    }
}

/// Builds the `BMC/DeleteUser` request.
pub fn build_delete_user_request(
    credential: &Credential,
    username: &BmcUsername,
) -> proto::DeleteUserRequest {
    proto::DeleteUserRequest {
        authn: Some(build_authn(credential)),
        vendor: build_vendor(credential),
        username: username.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::model::bmc_user::UserRole;

    fn credential() -> Credential {
        Credential::new("10.0.0.9", "ADMIN", "ADMIN").unwrap().with_vendor("supermicro")
    }

    #[test]
    fn test_create_user_carries_login_and_account_separately() {
        let user = BmcUser::new("ops", "s3cret", UserRole::User).unwrap();
        let request = build_create_user_request(&credential(), &user);

        let creds = request.user_creds.unwrap();
        assert_eq!(creds.username, "ops");
        assert_eq!(creds.password, "s3cret");
        assert_eq!(creds.user_role(), proto::UserRole::User);
        match request.authn.and_then(|a| a.authn) {
            Some(proto::authn::Authn::DirectAuthn(direct)) => assert_eq!(direct.username, "ADMIN"),
            None => panic!("request carries no direct authn"),
        }
        assert_eq!(request.vendor.unwrap().name, "supermicro");
    }

    #[test]
    fn test_update_user_defaults_to_admin_role() {
        let user = BmcUser::new("ops", "n3w", UserRole::default()).unwrap();
        let request = build_update_user_request(&credential(), &user);
        assert_eq!(request.user_creds.unwrap().user_role(), proto::UserRole::Admin);
    }

    #[test]
    fn test_delete_user_by_name() {
        let username = BmcUsername::new("ops").unwrap();
        let request = build_delete_user_request(&credential(), &username);
        assert_eq!(request.username, "ops");
        assert!(request.authn.is_some());
    }
}
