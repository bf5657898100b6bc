//! gRPC service implementations.

pub mod user;

pub use user::UserHandler;
