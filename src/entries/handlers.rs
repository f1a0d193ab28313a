use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{
    entries::{
        dto::{CreateEntryRequest, EntryResponse},
        services,
    },
    error::AppResult,
    extract::AppJson,
    state::AppState,
    users::extractors::SecretUser,
};

pub fn api_routes() -> Router<AppState> {
    Router::new().route("/api/u/:secret/entries", get(list_entries).post(create_entry))
}

#[instrument(skip_all)]
pub async fn list_entries(
    State(state): State<AppState>,
    SecretUser(user): SecretUser,
) -> AppResult<Json<Vec<EntryResponse>>> {
    let entries = services::list_entries(state.store.as_ref(), &user).await?;
    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}

#[instrument(skip_all)]
pub async fn create_entry(
    State(state): State<AppState>,
    SecretUser(user): SecretUser,
    AppJson(body): AppJson<CreateEntryRequest>,
) -> AppResult<Json<EntryResponse>> {
    let entry = services::create_entry(
        state.store.as_ref(),
        &user,
        body.timestamp,
        body.description,
        body.energy,
    )
    .await?;
    Ok(Json(entry.into()))
}
