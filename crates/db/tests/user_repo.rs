//! Integration tests for `UserRepo` against a real database.

use sqlx::PgPool;
use userstore_db::models::user::UserFields;
use userstore_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(name: &str, login: &str) -> UserFields {
    UserFields {
        name: name.to_string(),
        surname: "Smith".to_string(),
        email: format!("{login}@example.com"),
        avatar: format!("/avatars/{login}.png"),
        login: login.to_string(),
        password: "hunter2".to_string(),
        role: 1,
        weight: 60.5,
        height: 170.0,
        locked: false,
    }
}

// ---------------------------------------------------------------------------
// Create / find
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_find_returns_same_fields(pool: PgPool) {
    let input = new_user("Ann", "ann");
    let id = UserRepo::create(&pool, &input).await.unwrap();

    let user = UserRepo::find_by_id(&pool, id)
        .await
        .unwrap()
        .expect("created user should exist");

    let (found_id, fields) = user.into_parts();
    assert_eq!(found_id, id);
    assert_eq!(fields, input);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_assigns_distinct_ids(pool: PgPool) {
    let first = UserRepo::create(&pool, &new_user("Ann", "ann")).await.unwrap();
    let second = UserRepo::create(&pool, &new_user("Bob", "bob")).await.unwrap();
    assert_ne!(first, second);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    let found = UserRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_role_value_is_stored_verbatim(pool: PgPool) {
    let mut input = new_user("Ann", "ann");
    input.role = 42;
    let id = UserRepo::create(&pool, &input).await.unwrap();

    let user = UserRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(user.role, 42);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_empty_table(pool: PgPool) {
    let users = UserRepo::list(&pool).await.unwrap();
    assert!(users.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_every_row(pool: PgPool) {
    let mut ids = Vec::new();
    for login in ["ann", "bob", "cid"] {
        ids.push(UserRepo::create(&pool, &new_user(login, login)).await.unwrap());
    }

    let mut listed: Vec<i64> = UserRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    listed.sort_unstable();
    ids.sort_unstable();
    assert_eq!(listed, ids);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_overwrites_all_fields(pool: PgPool) {
    let id = UserRepo::create(&pool, &new_user("Ann", "ann")).await.unwrap();

    let replacement = UserFields {
        name: "Anna".to_string(),
        surname: "Jones".to_string(),
        email: "anna@example.com".to_string(),
        avatar: String::new(),
        login: "anna".to_string(),
        password: "correct horse".to_string(),
        role: 2,
        weight: 58.0,
        height: 171.5,
        locked: true,
    };
    let updated = UserRepo::update(&pool, id, &replacement).await.unwrap();
    assert!(updated);

    let (_, fields) = UserRepo::find_by_id(&pool, id)
        .await
        .unwrap()
        .unwrap()
        .into_parts();
    assert_eq!(fields, replacement);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_reports_no_match(pool: PgPool) {
    let updated = UserRepo::update(&pool, 999_999, &new_user("Ghost", "ghost"))
        .await
        .unwrap();
    assert!(!updated);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_row(pool: PgPool) {
    let id = UserRepo::create(&pool, &new_user("Ann", "ann")).await.unwrap();

    assert!(UserRepo::delete(&pool, id).await.unwrap());
    assert!(UserRepo::find_by_id(&pool, id).await.unwrap().is_none());

    // A second delete finds nothing to remove.
    assert!(!UserRepo::delete(&pool, id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_check(pool: PgPool) {
    userstore_db::health_check(&pool).await.unwrap();
}
