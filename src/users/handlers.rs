use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Router,
};
use tracing::{debug, instrument};

use crate::{
    error::{AppError, AppResult},
    state::AppState,
    users::{extractors::SecretUser, services},
};

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/new", get(create_new_user))
        .route("/u/:secret", get(user_page))
}

pub async fn root() -> Redirect {
    Redirect::temporary("/new")
}

#[instrument(skip_all)]
pub async fn create_new_user(State(state): State<AppState>) -> AppResult<Redirect> {
    let user = services::create_user(state.store.as_ref(), &state.secrets).await?;
    Ok(Redirect::temporary(&format!("/u/{}", user.secret_key)))
}

/// Serves the client UI. Markup is read on every request.
#[instrument(skip_all)]
pub async fn user_page(
    State(state): State<AppState>,
    SecretUser(user): SecretUser,
) -> AppResult<Html<String>> {
    let path = state.config.frontend_dir.join("index.html");
    let html = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| AppError::Internal(format!("read {}: {e}", path.display())))?;
    debug!(user_id = user.id, "serving user page");
    Ok(Html(html))
}
