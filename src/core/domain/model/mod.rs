pub mod bmc_user;
pub mod client_config;
pub mod connection_config;
pub mod credential;
pub mod machine_action;
pub mod task_status;
