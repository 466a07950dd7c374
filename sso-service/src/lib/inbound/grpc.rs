pub mod grpc_auth_server;
pub mod handlers;
pub mod validation;

pub use grpc_auth_server::AuthGrpcService;
