mod bmc_host;
mod bmc_password;
mod bmc_username;
mod service_host;
mod service_port;
mod task_id;

pub use bmc_host::BmcHost;
pub use bmc_password::BmcPassword;
pub use bmc_username::BmcUsername;
pub use service_host::ServiceHost;
pub use service_port::{DEFAULT_SERVICE_PORT, ServicePort};
pub use task_id::TaskId;

