pub mod request;
pub mod service;
