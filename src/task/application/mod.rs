pub mod service;
pub mod task_handle;
