use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::entries::repo_types::{Entry, NewEntry};
use crate::entries::validation::ENERGY_RANGE;
use crate::users::repo_types::User;

/// Durable storage behind the identity and entry services.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_user(&self, secret_key: &str) -> anyhow::Result<User>;
    async fn find_user_by_secret(&self, secret_key: &str) -> anyhow::Result<Option<User>>;
    async fn insert_entry(&self, entry: NewEntry) -> anyhow::Result<Entry>;
    /// Entries of one user, newest `timestamp` first.
    async fn list_entries(&self, user_id: i64) -> anyhow::Result<Vec<Entry>>;
}

/// In-process store with the schema's unique, foreign key and check constraints.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    entries: Vec<Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, secret_key: &str) -> anyhow::Result<User> {
        let mut t = self.tables()?;
        if t.users.iter().any(|u| u.secret_key == secret_key) {
            anyhow::bail!("duplicate key value violates unique constraint \"uq_users_secret_key\"");
        }
        let user = User {
            id: t.users.len() as i64 + 1,
            secret_key: secret_key.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        t.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_secret(&self, secret_key: &str) -> anyhow::Result<Option<User>> {
        let t = self.tables()?;
        Ok(t.users.iter().find(|u| u.secret_key == secret_key).cloned())
    }

    async fn insert_entry(&self, entry: NewEntry) -> anyhow::Result<Entry> {
        let mut t = self.tables()?;
        if !t.users.iter().any(|u| u.id == entry.user_id) {
            anyhow::bail!("insert violates foreign key constraint \"entries_user_id_fkey\"");
        }
        if entry.description.is_none() && entry.energy.is_none() {
            anyhow::bail!("new row violates check constraint \"at_least_one\"");
        }
        if entry.energy.is_some_and(|e| !ENERGY_RANGE.contains(&e)) {
            anyhow::bail!("new row violates check constraint \"energy_range\"");
        }
        let row = Entry {
            id: t.entries.len() as i64 + 1,
            user_id: entry.user_id,
            timestamp: entry.timestamp,
            description: entry.description,
            energy: entry.energy,
            created_at: OffsetDateTime::now_utc(),
        };
        t.entries.push(row.clone());
        Ok(row)
    }

    async fn list_entries(&self, user_id: i64) -> anyhow::Result<Vec<Entry>> {
        let t = self.tables()?;
        let mut rows: Vec<Entry> = t
            .entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(rows)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Fails every call, to show which paths never reach storage.
    pub(crate) struct BrokenStore;

    #[async_trait]
    impl Store for BrokenStore {
        async fn insert_user(&self, _secret_key: &str) -> anyhow::Result<User> {
            anyhow::bail!("connection refused")
        }
        async fn find_user_by_secret(&self, _secret_key: &str) -> anyhow::Result<Option<User>> {
            anyhow::bail!("connection refused")
        }
        async fn insert_entry(&self, _entry: NewEntry) -> anyhow::Result<Entry> {
            anyhow::bail!("connection refused")
        }
        async fn list_entries(&self, _user_id: i64) -> anyhow::Result<Vec<Entry>> {
            anyhow::bail!("connection refused")
        }
    }
}
