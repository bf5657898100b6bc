//! Service listener: assembles the tonic server around a bound socket.

use std::future::Future;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tower_http::trace::TraceLayer;
use userstore_db::DbPool;

use crate::config::ServerConfig;
use crate::{proto, routes};

/// Errors that stop the server from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("Failed to build reflection service: {0}")]
    Reflection(#[from] tonic_reflection::server::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

/// Serve `UserV1` plus gRPC reflection on `listener` until `shutdown` resolves.
///
/// In-flight calls are allowed to finish once `shutdown` fires.
pub async fn serve<F>(
    listener: TcpListener,
    pool: DbPool,
    config: &ServerConfig,
    shutdown: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send,
{
    let (reflection_v1, reflection_v1alpha) = routes::reflection_services()?;

    tracing::info!(service = proto::SERVICE_NAME, "Registering gRPC services");

    let mut builder = Server::builder();
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder
        .layer(TraceLayer::new_for_grpc())
        .add_service(routes::user_service(pool))
        .add_service(reflection_v1)
        .add_service(reflection_v1alpha)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await?;

    Ok(())
}
