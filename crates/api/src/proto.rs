//! Generated protobuf types for the `user_v1` package.

tonic::include_proto!("user_v1");

/// Encoded descriptor set (with imports) registered with the reflection service.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("user_v1_descriptor");

/// Fully-qualified service name as seen by reflection clients.
pub const SERVICE_NAME: &str = "user_v1.UserV1";
