use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;
use crate::entries::{self, repo_types::{Entry, NewEntry}};
use crate::store::Store;
use crate::users::{self, repo_types::User};

/// Postgres-backed [`Store`]. Every call checks a connection out of the
/// pool for a single statement.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("run migrations")?;
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_user(&self, secret_key: &str) -> anyhow::Result<User> {
        users::repo::insert(&self.pool, secret_key).await
    }

    async fn find_user_by_secret(&self, secret_key: &str) -> anyhow::Result<Option<User>> {
        users::repo::find_by_secret(&self.pool, secret_key).await
    }

    async fn insert_entry(&self, entry: NewEntry) -> anyhow::Result<Entry> {
        entries::repo::insert(&self.pool, entry).await
    }

    async fn list_entries(&self, user_id: i64) -> anyhow::Result<Vec<Entry>> {
        entries::repo::list_by_user(&self.pool, user_id).await
    }
}
