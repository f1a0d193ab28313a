use anyhow::Context;
use sqlx::PgPool;

use crate::entries::repo_types::{Entry, NewEntry};

/// Insert an entry. `energy_range` and `at_least_one` check constraints
/// reject rows that slipped past validation.
pub async fn insert(db: &PgPool, entry: NewEntry) -> anyhow::Result<Entry> {
    let row = sqlx::query_as::<_, Entry>(
        r#"
        INSERT INTO entries (user_id, timestamp, description, energy)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, timestamp, description, energy, created_at
        "#,
    )
    .bind(entry.user_id)
    .bind(entry.timestamp)
    .bind(entry.description)
    .bind(entry.energy)
    .fetch_one(db)
    .await
    .context("insert entry")?;
    Ok(row)
}

/// All entries of a user, newest `timestamp` first.
pub async fn list_by_user(db: &PgPool, user_id: i64) -> anyhow::Result<Vec<Entry>> {
    let rows = sqlx::query_as::<_, Entry>(
        r#"
        SELECT id, user_id, timestamp, description, energy, created_at
          FROM entries
         WHERE user_id = $1
         ORDER BY timestamp DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("list entries by user")?;
    Ok(rows)
}
