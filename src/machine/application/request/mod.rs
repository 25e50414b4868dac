pub mod device_request;
pub mod event_log_request;
pub mod power_request;
pub mod user_request;
