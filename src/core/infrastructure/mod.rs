pub mod grpc_connector;
pub mod grpc_transport;
pub mod proto;
pub mod transport;
