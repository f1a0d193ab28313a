use axum::{extract::State, response::Redirect, routing::get, Router};
use time::{Duration, OffsetDateTime};
use tracing::{info, instrument};

use crate::{
    entries::{repo_types::Entry, services as entry_services},
    error::AppResult,
    state::AppState,
    store::Store,
    users::{repo_types::User, services as user_services},
};

/// (hours before now, description, energy)
const DEMO_ENTRIES: &[(i64, Option<&str>, Option<i32>)] = &[
    (2, Some("Coffee and a short walk"), Some(7)),
    (5, None, Some(5)),
    (9, Some("Long meeting, felt drained"), Some(3)),
    (26, Some("Slept eight hours"), Some(8)),
    (31, Some("Skipped lunch"), None),
    (50, None, Some(6)),
    (74, Some("Evening run"), Some(9)),
];

pub fn router() -> Router<AppState> {
    Router::new().route("/demo", get(create_demo_user))
}

#[instrument(skip_all)]
pub async fn create_demo_user(State(state): State<AppState>) -> AppResult<Redirect> {
    let store = state.store.as_ref();
    let user = user_services::create_user(store, &state.secrets).await?;
    let entries = seed_entries(store, &user, OffsetDateTime::now_utc()).await?;
    info!(user_id = user.id, count = entries.len(), "demo user seeded");
    Ok(Redirect::temporary(&format!("/u/{}", user.secret_key)))
}

/// Writes the demo dataset for `user` through the regular entry service.
pub async fn seed_entries(
    store: &dyn Store,
    user: &User,
    now: OffsetDateTime,
) -> AppResult<Vec<Entry>> {
    let mut created = Vec::with_capacity(DEMO_ENTRIES.len());
    for &(hours_ago, description, energy) in DEMO_ENTRIES {
        let entry = entry_services::create_entry(
            store,
            user,
            now - Duration::hours(hours_ago),
            description.map(str::to_string),
            energy,
        )
        .await?;
        created.push(entry);
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn seeded_entries_list_newest_first() {
        let store = MemoryStore::new();
        let user = store.insert_user("DemoSecret").await.unwrap();
        let now = datetime!(2025-03-10 12:00 UTC);

        let created = seed_entries(&store, &user, now).await.unwrap();
        assert_eq!(created.len(), DEMO_ENTRIES.len());

        let listed = entry_services::list_entries(&store, &user).await.unwrap();
        assert_eq!(listed.len(), DEMO_ENTRIES.len());
        assert_eq!(listed[0].timestamp, datetime!(2025-03-10 10:00 UTC));
        assert!(listed.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }
}
