use tonic::Status;
use userstore_core::error::CoreError;

/// Application-level error type for gRPC handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for statement
/// failures. Converts into [`tonic::Status`] so handlers can return it with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `userstore_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => Status::not_found(core.to_string()),
                CoreError::Validation(msg) => Status::invalid_argument(msg),
            },
            AppError::Database(err) => classify_sqlx_error(&err),
        }
    }
}

/// Classify a sqlx error into a gRPC status.
///
/// - `RowNotFound` maps to `NOT_FOUND`.
/// - Everything else, constraint violations included, maps to `INTERNAL`
///   with the driver message passed through unmodified.
fn classify_sqlx_error(err: &sqlx::Error) -> Status {
    match err {
        sqlx::Error::RowNotFound => Status::not_found("Resource not found"),
        other => {
            tracing::error!(error = %other, "Database error");
            Status::internal(other.to_string())
        }
    }
}
