//! Types shared by the store and the gRPC service.

pub mod error;
pub mod types;
