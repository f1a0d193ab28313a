use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub secret_key: String, // bearer credential, only ever shown through the redirect URL
    pub created_at: OffsetDateTime,
}

impl User {
    /// Short prefix of the secret, safe to put in logs.
    pub fn secret_hint(&self) -> &str {
        secret_hint(&self.secret_key)
    }
}

pub(crate) fn secret_hint(secret: &str) -> &str {
    let end = secret
        .char_indices()
        .nth(3)
        .map(|(i, _)| i)
        .unwrap_or(secret.len());
    &secret[..end]
}
