//! Repository for the `users` table.

use sqlx::PgPool;
use userstore_core::types::DbId;

use crate::models::user::{User, UserFields};

/// Writable columns, in bind order for inserts and updates.
const FIELDS: [&str; 10] = [
    "name", "surname", "email", "avatar", "login", "password", "role", "weight", "height",
    "locked",
];

/// `id` followed by every writable column, for reads.
fn select_columns() -> String {
    format!("id, {}", FIELDS.join(", "))
}

/// `$1, $2, ...` for each writable column.
fn insert_placeholders() -> String {
    (1..=FIELDS.len())
        .map(|n| format!("${n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `name = $2, surname = $3, ...`; `$1` is reserved for the id.
fn update_assignments() -> String {
    FIELDS
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{col} = ${}", i + 2))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Provides CRUD operations for users. Every method is one statement.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the id assigned by the database.
    pub async fn create(pool: &PgPool, input: &UserFields) -> Result<DbId, sqlx::Error> {
        let query = format!(
            "INSERT INTO users ({}) VALUES ({}) RETURNING id",
            FIELDS.join(", "),
            insert_placeholders()
        );
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.email)
            .bind(&input.avatar)
            .bind(&input.login)
            .bind(&input.password)
            .bind(input.role)
            .bind(input.weight)
            .bind(input.height)
            .bind(input.locked)
            .fetch_one(pool)
            .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {} FROM users WHERE id = $1", select_columns());
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every user in whatever order the database returns them.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {} FROM users", select_columns());
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Overwrite every field of a user.
    ///
    /// Returns `true` if a row with the given `id` existed.
    pub async fn update(pool: &PgPool, id: DbId, input: &UserFields) -> Result<bool, sqlx::Error> {
        let query = format!("UPDATE users SET {} WHERE id = $1", update_assignments());
        let result = sqlx::query(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.email)
            .bind(&input.avatar)
            .bind(&input.login)
            .bind(&input.password)
            .bind(input.role)
            .bind(input.weight)
            .bind(input.height)
            .bind(input.locked)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a user. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
