//! Services mounted on the gRPC server.

use tonic_reflection::pb::v1::server_reflection_server as reflection_v1;
use tonic_reflection::pb::v1alpha::server_reflection_server as reflection_v1alpha;
use userstore_db::DbPool;

use crate::handlers::UserHandler;
use crate::proto;
use crate::proto::user_v1_server::UserV1Server;

/// `user_v1.UserV1`, backed by the shared pool.
pub fn user_service(pool: DbPool) -> UserV1Server<UserHandler> {
    UserV1Server::new(UserHandler::new(pool))
}

/// gRPC reflection, v1 and v1alpha, built from the embedded descriptor set.
///
/// Older tooling (grpcurl < 1.9) only speaks v1alpha.
#[allow(clippy::type_complexity)]
pub fn reflection_services() -> Result<
    (
        reflection_v1::ServerReflectionServer<impl reflection_v1::ServerReflection>,
        reflection_v1alpha::ServerReflectionServer<impl reflection_v1alpha::ServerReflection>,
    ),
    tonic_reflection::server::Error,
> {
    let v1 = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(proto::FILE_DESCRIPTOR_SET)
        .build_v1()?;
    let v1alpha = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(proto::FILE_DESCRIPTOR_SET)
        .build_v1alpha()?;
    Ok((v1, v1alpha))
}
