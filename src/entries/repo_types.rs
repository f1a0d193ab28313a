use sqlx::FromRow;
use time::OffsetDateTime;

/// Entry record in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Entry {
    pub id: i64,
    pub user_id: i64,
    pub timestamp: OffsetDateTime, // the moment the entry describes, caller supplied
    pub description: Option<String>,
    pub energy: Option<i32>,
    pub created_at: OffsetDateTime, // write time, server assigned
}

/// Row to insert. The store enforces the same constraints as the schema,
/// whether or not the caller validated first.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub user_id: i64,
    pub timestamp: OffsetDateTime,
    pub description: Option<String>,
    pub energy: Option<i32>,
}
