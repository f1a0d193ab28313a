use anyhow::Context;
use sqlx::PgPool;

use crate::users::repo_types::User;

/// Insert a user with the given secret. A duplicate secret violates
/// `uq_users_secret_key` and fails the insert.
pub async fn insert(db: &PgPool, secret_key: &str) -> anyhow::Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (secret_key)
        VALUES ($1)
        RETURNING id, secret_key, created_at
        "#,
    )
    .bind(secret_key)
    .fetch_one(db)
    .await
    .context("insert user")?;
    Ok(user)
}

/// Find a user by secret key.
pub async fn find_by_secret(db: &PgPool, secret_key: &str) -> anyhow::Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, secret_key, created_at
          FROM users
         WHERE secret_key = $1
        "#,
    )
    .bind(secret_key)
    .fetch_optional(db)
    .await
    .context("find user by secret")?;
    Ok(user)
}
