//! User entity model and input DTO.

use sqlx::FromRow;
use userstore_core::types::DbId;

/// Full user row from the `users` table.
///
/// The password is stored exactly as supplied by the caller.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub avatar: String,
    pub login: String,
    pub password: String,
    /// Raw role discriminant; unknown values are kept as-is.
    pub role: i32,
    pub weight: f64,
    pub height: f64,
    pub locked: bool,
}

/// Every user column except `id`.
///
/// Used for inserts and for updates, which always overwrite all fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserFields {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub avatar: String,
    pub login: String,
    pub password: String,
    pub role: i32,
    pub weight: f64,
    pub height: f64,
    pub locked: bool,
}

impl User {
    /// Split the row into its id and the remaining fields.
    pub fn into_parts(self) -> (DbId, UserFields) {
        let fields = UserFields {
            name: self.name,
            surname: self.surname,
            email: self.email,
            avatar: self.avatar,
            login: self.login,
            password: self.password,
            role: self.role,
            weight: self.weight,
            height: self.height,
            locked: self.locked,
        };
        (self.id, fields)
    }
}
