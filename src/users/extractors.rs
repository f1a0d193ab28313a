use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::users::{repo_types::User, services};

/// Resolves the `{secret}` path segment to its owner, or rejects with 404.
pub struct SecretUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for SecretUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(secret) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;

        let user = services::resolve(state.store.as_ref(), &secret).await?;
        Ok(SecretUser(user))
    }
}
