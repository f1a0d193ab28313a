use time::OffsetDateTime;
use tracing::{error, info, instrument, warn};

use crate::entries::repo_types::{Entry, NewEntry};
use crate::entries::validation::EntryContent;
use crate::error::{AppError, AppResult};
use crate::store::Store;
use crate::users::repo_types::User;

/// Validate and persist one entry for `user`. Invalid content is rejected
/// before the store is touched.
#[instrument(skip_all, fields(user_id = user.id))]
pub async fn create_entry(
    store: &dyn Store,
    user: &User,
    timestamp: OffsetDateTime,
    description: Option<String>,
    energy: Option<i32>,
) -> AppResult<Entry> {
    let content = EntryContent::new(description, energy).map_err(|e| {
        warn!(error = %e, "entry rejected");
        e
    })?;
    let (description, energy) = content.into_parts();

    let entry = store
        .insert_entry(NewEntry {
            user_id: user.id,
            timestamp,
            description,
            energy,
        })
        .await
        .map_err(|e| {
            error!(error = %format!("{e:#}"), "insert entry failed");
            AppError::Storage(e)
        })?;

    info!(entry_id = entry.id, "entry created");
    Ok(entry)
}

/// Snapshot of all entries of `user`, newest `timestamp` first.
#[instrument(skip_all, fields(user_id = user.id))]
pub async fn list_entries(store: &dyn Store, user: &User) -> AppResult<Vec<Entry>> {
    store.list_entries(user.id).await.map_err(|e| {
        error!(error = %format!("{e:#}"), "list entries failed");
        AppError::Storage(e)
    })
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::entries::validation::ValidationError;
    use crate::store::{testing::BrokenStore, MemoryStore};

    async fn store_with_user() -> (MemoryStore, User) {
        let store = MemoryStore::new();
        let user = store.insert_user("TestSecret").await.unwrap();
        (store, user)
    }

    #[tokio::test]
    async fn fresh_user_has_no_entries() {
        let (store, user) = store_with_user().await;
        assert!(list_entries(&store, &user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn single_field_entries_keep_the_other_absent() {
        let (store, user) = store_with_user().await;
        let ts = datetime!(2025-01-01 10:00 UTC);

        let note = create_entry(&store, &user, ts, Some("slept well".into()), None)
            .await
            .unwrap();
        assert_eq!(note.description.as_deref(), Some("slept well"));
        assert_eq!(note.energy, None);

        let rating = create_entry(&store, &user, ts, None, Some(7)).await.unwrap();
        assert_eq!(rating.description, None);
        assert_eq!(rating.energy, Some(7));
        assert_eq!(rating.user_id, user.id);
        assert_eq!(rating.timestamp, ts);
    }

    #[tokio::test]
    async fn invalid_content_creates_no_row() {
        let (store, user) = store_with_user().await;
        let ts = datetime!(2025-01-01 11:00 UTC);

        let err = create_entry(&store, &user, ts, None, None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ValidationError::Empty)));

        for bad in [0, 11, -3] {
            let err = create_entry(&store, &user, ts, None, Some(bad))
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                AppError::Validation(ValidationError::EnergyOutOfRange(v)) if v == bad
            ));
        }

        assert!(list_entries(&store, &user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn validation_happens_before_storage() {
        let user = User {
            id: 1,
            secret_key: "TestSecret".into(),
            created_at: OffsetDateTime::now_utc(),
        };
        let ts = datetime!(2025-01-01 11:00 UTC);

        let err = create_entry(&BrokenStore, &user, ts, None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = create_entry(&BrokenStore, &user, ts, None, Some(5))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn list_failure_surfaces_as_storage_error() {
        let user = User {
            id: 1,
            secret_key: "TestSecret".into(),
            created_at: OffsetDateTime::now_utc(),
        };
        let err = list_entries(&BrokenStore, &user).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn entries_are_listed_newest_first() {
        let (store, user) = store_with_user().await;
        let t1 = datetime!(2025-01-01 08:00 UTC);
        let t2 = datetime!(2025-01-01 12:00 UTC);
        let t3 = datetime!(2025-01-02 09:00 UTC);

        // inserted out of order on purpose
        create_entry(&store, &user, t2, Some("t2".into()), None).await.unwrap();
        create_entry(&store, &user, t3, Some("t3".into()), None).await.unwrap();
        create_entry(&store, &user, t1, Some("t1".into()), None).await.unwrap();

        let listed: Vec<_> = list_entries(&store, &user)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.timestamp)
            .collect();
        assert_eq!(listed, vec![t3, t2, t1]);
    }

    #[tokio::test]
    async fn entries_of_other_users_are_invisible() {
        let (store, user) = store_with_user().await;
        let other = store.insert_user("OtherUser1").await.unwrap();
        let ts = datetime!(2025-01-01 10:00 UTC);
        create_entry(&store, &other, ts, None, Some(2)).await.unwrap();

        assert!(list_entries(&store, &user).await.unwrap().is_empty());
        assert_eq!(list_entries(&store, &other).await.unwrap().len(), 1);
    }
}
