//! Handlers for the `user_v1.UserV1` service.
//!
//! Each RPC maps to exactly one `UserRepo` statement.

use tonic::{Request, Response, Status};
use userstore_core::error::CoreError;
use userstore_core::types::DbId;
use userstore_db::models::user::{User, UserFields};
use userstore_db::repositories::UserRepo;
use userstore_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::proto;
use crate::proto::user_v1_server::UserV1;

const ENTITY: &str = "User";

/// Server-side implementation of `UserV1`, backed by the shared pool.
#[derive(Clone)]
pub struct UserHandler {
    pool: DbPool,
}

impl UserHandler {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[tonic::async_trait]
impl UserV1 for UserHandler {
    async fn create(
        &self,
        request: Request<proto::CreateRequest>,
    ) -> Result<Response<proto::CreateResponse>, Status> {
        let response = create_user(&self.pool, request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn get(
        &self,
        request: Request<proto::GetRequest>,
    ) -> Result<Response<proto::GetResponse>, Status> {
        let response = get_user(&self.pool, request.into_inner().id).await?;
        Ok(Response::new(response))
    }

    async fn get_users(
        &self,
        _request: Request<()>,
    ) -> Result<Response<proto::GetUsersResponse>, Status> {
        let response = list_users(&self.pool).await?;
        Ok(Response::new(response))
    }

    async fn update(&self, request: Request<proto::UpdateRequest>) -> Result<Response<()>, Status> {
        update_user(&self.pool, request.into_inner()).await?;
        Ok(Response::new(()))
    }

    async fn delete(&self, request: Request<proto::DeleteRequest>) -> Result<Response<()>, Status> {
        delete_user(&self.pool, request.into_inner().id).await?;
        Ok(Response::new(()))
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

async fn create_user(
    pool: &DbPool,
    req: proto::CreateRequest,
) -> AppResult<proto::CreateResponse> {
    let input = fields_from_proto(require_user(req.user)?);
    let id = UserRepo::create(pool, &input).await?;
    tracing::info!(user_id = id, "User created");
    Ok(proto::CreateResponse { id })
}

async fn get_user(pool: &DbPool, id: DbId) -> AppResult<proto::GetResponse> {
    let user = UserRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(user_to_proto(user))
}

async fn list_users(pool: &DbPool) -> AppResult<proto::GetUsersResponse> {
    let users = UserRepo::list(pool).await?;
    tracing::debug!(count = users.len(), "Listed users");
    Ok(proto::GetUsersResponse {
        users: users.into_iter().map(user_to_proto).collect(),
    })
}

async fn update_user(pool: &DbPool, req: proto::UpdateRequest) -> AppResult<()> {
    let id = req.id;
    let input = fields_from_proto(require_user(req.user)?);
    if !UserRepo::update(pool, id, &input).await? {
        return Err(CoreError::NotFound { entity: ENTITY, id }.into());
    }
    tracing::info!(user_id = id, "User updated");
    Ok(())
}

async fn delete_user(pool: &DbPool, id: DbId) -> AppResult<()> {
    if !UserRepo::delete(pool, id).await? {
        return Err(CoreError::NotFound { entity: ENTITY, id }.into());
    }
    tracing::info!(user_id = id, "User deleted");
    Ok(())
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

fn require_user(user: Option<proto::User>) -> AppResult<proto::User> {
    user.ok_or_else(|| CoreError::Validation("user is required".to_string()).into())
}

fn fields_from_proto(user: proto::User) -> UserFields {
    UserFields {
        name: user.name,
        surname: user.surname,
        email: user.email,
        avatar: user.avatar,
        login: user.login,
        password: user.password,
        role: user.role,
        weight: user.weight,
        height: user.height,
        locked: user.locked,
    }
}

fn user_to_proto(user: User) -> proto::GetResponse {
    let (id, fields) = user.into_parts();
    proto::GetResponse {
        id,
        user: Some(proto::User {
            name: fields.name,
            surname: fields.surname,
            email: fields.email,
            avatar: fields.avatar,
            login: fields.login,
            password: fields.password,
            role: fields.role,
            weight: fields.weight,
            height: fields.height,
            locked: fields.locked,
        }),
    }
}
