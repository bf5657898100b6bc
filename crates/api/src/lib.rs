//! UserV1 gRPC server library.
//!
//! Exposes the building blocks (config, error mapping, handlers, generated
//! protobuf types, mounted services and the server assembly) so integration
//! tests and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod proto;
pub mod routes;
pub mod server;
