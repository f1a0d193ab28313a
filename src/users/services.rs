use tracing::{debug, error, info, instrument};

use crate::error::{AppError, AppResult};
use crate::store::Store;
use crate::users::repo_types::{secret_hint, User};
use crate::users::secret::{is_well_formed_secret, SecretGenerator};

/// Create a user with a fresh secret. A secret collision fails the write
/// and surfaces as a storage error; nothing is retried here.
#[instrument(skip_all)]
pub async fn create_user(store: &dyn Store, secrets: &SecretGenerator) -> AppResult<User> {
    let secret = secrets();
    let user = store.insert_user(&secret).await.map_err(|e| {
        error!(error = %format!("{e:#}"), "create user failed");
        AppError::Storage(e)
    })?;
    info!(user_id = user.id, secret = %user.secret_hint(), "user created");
    Ok(user)
}

/// Look up the user owning `secret`. Malformed and unknown secrets both
/// yield [`AppError::NotFound`].
#[instrument(skip_all, fields(secret = %secret_hint(secret)))]
pub async fn resolve(store: &dyn Store, secret: &str) -> AppResult<User> {
    if !is_well_formed_secret(secret) {
        debug!("malformed secret");
        return Err(AppError::NotFound);
    }
    match store.find_user_by_secret(secret).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => {
            debug!("unknown secret");
            Err(AppError::NotFound)
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "find user by secret failed");
            Err(AppError::Storage(e))
        }
    }
}
