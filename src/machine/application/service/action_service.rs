use crate::core::domain::{
    error::PbnjResult,
    model::{
        bmc_user::BmcUser,
        credential::Credential,
        machine_action::{BootOptions, PowerAction, PowerOptions},
    },
    value_object::{BmcUsername, TaskId},
};
use crate::core::infrastructure::transport::{
    BmcService, DiagnosticService, MachineService, ServiceSet,
};
use crate::machine::application::request::{
    device_request::build_device_request,
    event_log_request::build_clear_event_log_request,
    power_request::build_power_request,
    user_request::{build_create_user_request, build_delete_user_request, build_update_user_request},
};
use std::sync::Arc;
use tracing::info;

/// Submits machine actions and hands back the id of the task they start.
///
/// Dispatch failures are returned as-is; retrying is left to the caller.
#[derive(Clone)]
pub struct ActionService {
    machine: Arc<dyn MachineService>,
    bmc: Arc<dyn BmcService>,
    diagnostic: Arc<dyn DiagnosticService>,
}

impl ActionService {
    pub fn new(services: &ServiceSet) -> Self {
        Self {
            machine: services.machine.clone(),
            bmc: services.bmc.clone(),
            diagnostic: services.diagnostic.clone(),
        }
    }

    pub async fn power(
        &self,
        credential: &Credential,
        action: PowerAction,
        options: PowerOptions,
    ) -> PbnjResult<TaskId> {
        let request = build_power_request(credential, action, options)?;
        let response = self.machine.power(request).await?;
        let task_id = TaskId::new(response.task_id)?;
        info!(
            bmc = credential.host().as_str(),
            %action,
            %task_id,
            "power action submitted"
        );
        Ok(task_id)
    }

    pub async fn boot_device(
        &self,
        credential: &Credential,
        options: BootOptions,
    ) -> PbnjResult<TaskId> {
        let request = build_device_request(credential, options)?;
        let response = self.machine.boot_device(request).await?;
        let task_id = TaskId::new(response.task_id)?;
        info!(
            bmc = credential.host().as_str(),
            device = %options.device,
            %task_id,
            "boot device change submitted"
        );
        Ok(task_id)
    }

    pub async fn create_user(&self, credential: &Credential, user: &BmcUser) -> PbnjResult<TaskId> {
        let request = build_create_user_request(credential, user);
        let response = self.bmc.create_user(request).await?;
        let task_id = TaskId::new(response.task_id)?;
        info!(
            bmc = credential.host().as_str(),
            user = user.username().as_str(),
            role = %user.role(),
            %task_id,
            "bmc user creation submitted"
        );
        Ok(task_id)
    }

    pub async fn update_user(&self, credential: &Credential, user: &BmcUser) -> PbnjResult<TaskId> {
        let request = build_update_user_request(credential, user);
        let response = self.bmc.update_user(request).await?;
        let task_id = TaskId::new(response.task_id)?;
        info!(
            bmc = credential.host().as_str(),
            user = user.username().as_str(),
            role = %user.role(),
            %task_id,
            "bmc user update submitted"
        );
        Ok(task_id)
    }

    pub async fn delete_user(
        &self,
        credential: &Credential,
        username: &BmcUsername,
    ) -> PbnjResult<TaskId> {
        let request = build_delete_user_request(credential, username);
        let response = self.bmc.delete_user(request).await?;
        let task_id = TaskId::new(response.task_id)?;
        info!(
            bmc = credential.host().as_str(),
            user = username.as_str(),
            %task_id,
            "bmc user deletion submitted"
        );
        Ok(task_id)
    }

    pub async fn clear_system_event_log(&self, credential: &Credential) -> PbnjResult<TaskId> {
        let request = build_clear_event_log_request(credential);
        let response = self.diagnostic.clear_system_event_log(request).await?;
        let task_id = TaskId::new(response.task_id)?;
        info!(
            bmc = credential.host().as_str(),
            %task_id,
            "system event log clear submitted"
        );
        Ok(task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::error::PbnjError;
    use crate::core::domain::model::{bmc_user::UserRole, machine_action::BootDevice};
    use crate::core::infrastructure::proto::{
        self, ClearSystemEventLogResponse, CreateUserResponse, DeleteUserResponse,
        DeviceResponse, PowerResponse, UpdateUserResponse,
    };
    use crate::core::infrastructure::transport::{
        MockBmcService, MockDiagnosticService, MockMachineService, MockTaskService,
    };

    fn credential() -> Credential {
        Credential::new("10.0.0.9", "ADMIN", "ADMIN").unwrap()
    }

    fn service(
        machine: MockMachineService,
        bmc: MockBmcService,
        diagnostic: MockDiagnosticService,
    ) -> ActionService {
        ActionService::new(&ServiceSet {
            machine: Arc::new(machine),
            bmc: Arc::new(bmc),
            diagnostic: Arc::new(diagnostic),
            task: Arc::new(MockTaskService::new()),
        })
    }

    fn machine_only(machine: MockMachineService) -> ActionService {
        service(machine, MockBmcService::new(), MockDiagnosticService::new())
    }

    #[tokio::test]
    async fn test_power_returns_task_id() {
        let mut machine = MockMachineService::new();
        machine
            .expect_power()
            .withf(|request| request.power_action() == proto::PowerAction::On)
            .times(1)
            .returning(|_| {
                Ok(PowerResponse {
                    task_id: "task-42".to_string(),
                })
            });

        let task_id = machine_only(machine)
            .power(&credential(), PowerAction::On, PowerOptions::default())
            .await
            .unwrap();
        assert_eq!(task_id.as_str(), "task-42");
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_not_retried() {
        let mut machine = MockMachineService::new();
        machine
            .expect_power()
            .times(1)
            .returning(|_| Err(PbnjError::Transport("Unavailable: connection refused".into())));

        let result = machine_only(machine)
            .power(&credential(), PowerAction::Status, PowerOptions::default())
            .await;
        assert!(matches!(result, Err(PbnjError::Transport(_))));
    }

    #[tokio::test]
    async fn test_empty_task_id_is_rejected() {
        let mut machine = MockMachineService::new();
        machine
            .expect_power()
            .returning(|_| Ok(PowerResponse::default()));

        let result = machine_only(machine)
            .power(&credential(), PowerAction::Status, PowerOptions::default())
            .await;
        assert!(matches!(result, Err(PbnjError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_unspecified_values_are_never_sent() {
        let mut machine = MockMachineService::new();
        machine.expect_power().never();
        machine.expect_boot_device().never();

        let service = machine_only(machine);
        let power = service
            .power(&credential(), PowerAction::Unspecified, PowerOptions::default())
            .await;
        assert!(matches!(power, Err(PbnjError::Validation { .. })));
        let boot = service
            .boot_device(&credential(), BootOptions::once(BootDevice::Unspecified))
            .await;
        assert!(matches!(boot, Err(PbnjError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_boot_device_returns_task_id() {
        let mut machine = MockMachineService::new();
        machine
            .expect_boot_device()
            .withf(|request| request.boot_device() == proto::BootDevice::Pxe)
            .times(1)
            .returning(|_| {
                Ok(DeviceResponse {
                    task_id: "task-7".to_string(),
                })
            });

        let task_id = machine_only(machine)
            .boot_device(&credential(), BootOptions::once(BootDevice::Pxe))
            .await
            .unwrap();
        assert_eq!(task_id.as_str(), "task-7");
    }

    #[tokio::test]
    async fn test_user_operations_return_task_ids() {
        let mut bmc = MockBmcService::new();
        bmc.expect_create_user()
            .withf(|request| {
                request
                    .user_creds
                    .as_ref()
                    .is_some_and(|c| c.username == "ops" && c.user_role() == proto::UserRole::User)
            })
            .times(1)
            .returning(|_| {
                Ok(CreateUserResponse {
                    task_id: "create-1".to_string(),
                })
            });
        bmc.expect_update_user().times(1).returning(|_| {
            Ok(UpdateUserResponse {
                task_id: "update-1".to_string(),
            })
        });
        bmc.expect_delete_user()
            .withf(|request| request.username == "ops")
            .times(1)
            .returning(|_| {
                Ok(DeleteUserResponse {
                    task_id: "delete-1".to_string(),
                })
            });

        let service = service(MockMachineService::new(), bmc, MockDiagnosticService::new());
        let user = BmcUser::new("ops", "s3cret", UserRole::User).unwrap();

        let created = service.create_user(&credential(), &user).await.unwrap();
        let updated = service.update_user(&credential(), &user).await.unwrap();
        let deleted = service
            .delete_user(&credential(), user.username())
            .await
            .unwrap();
        assert_eq!(created.as_str(), "create-1");
        assert_eq!(updated.as_str(), "update-1");
        assert_eq!(deleted.as_str(), "delete-1");
    }

    #[tokio::test]
    async fn test_user_dispatch_failure_is_returned() {
        let mut bmc = MockBmcService::new();
        bmc.expect_delete_user()
            .times(1)
            .returning(|_| Err(PbnjError::Transport("Unavailable: connection refused".into())));

        let service = service(MockMachineService::new(), bmc, MockDiagnosticService::new());
        let username = BmcUsername::new("ops").unwrap();
        let result = service.delete_user(&credential(), &username).await;
        assert!(result.unwrap_err().is_transport());
    }

    #[tokio::test]
    async fn test_clear_system_event_log_returns_task_id() {
        let mut diagnostic = MockDiagnosticService::new();
        diagnostic
            .expect_clear_system_event_log()
            .times(1)
            .returning(|_| {
                Ok(ClearSystemEventLogResponse {
                    task_id: "sel-1".to_string(),
                })
            });

        let service = service(MockMachineService::new(), MockBmcService::new(), diagnostic);
        let task_id = service.clear_system_event_log(&credential()).await.unwrap();
        assert_eq!(task_id.as_str(), "sel-1");
    }
}
