//! SQLite query layer for the snippet store.
//!
//! All queries are single parameterized statements against one table;
//! expiry is enforced at read time by comparing against the current
//! instant, so expired rows simply stop being visible.

use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;

use crate::error::SnipboxError;

/// A row from the `snippets` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Snippet {
    /// Auto-assigned id, positive, never reused.
    pub id: i64,
    /// Snippet title.
    pub title: String,
    /// Snippet body, may span multiple lines.
    pub content: String,
    /// Insertion time (UTC).
    pub created: DateTime<Utc>,
    /// Expiry time (UTC), strictly after `created`.
    pub expires: DateTime<Utc>,
}

/// Create the snippets table and supporting index if they do not exist.
///
/// Idempotent; runs at startup after the connectivity check.
pub async fn migrate(pool: &SqlitePool) -> Result<(), SnipboxError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS snippets ( \
         id INTEGER PRIMARY KEY AUTOINCREMENT, \
         title TEXT NOT NULL, \
         content TEXT NOT NULL, \
         created TEXT NOT NULL, \
         expires TEXT NOT NULL)",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_snippets_created ON snippets (created)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Insert a new snippet expiring `expiry_days` days from now.
///
/// Returns the id assigned by the store.
pub async fn insert_snippet(
    pool: &SqlitePool,
    title: &str,
    content: &str,
    expiry_days: i64,
) -> Result<i64, SnipboxError> {
    let created = Utc::now();
    let expires = created + Duration::days(expiry_days);

    let result = sqlx::query(
        "INSERT INTO snippets (title, content, created, expires) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(title)
    .bind(content)
    .bind(created)
    .bind(expires)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Fetch a single snippet by id.
///
/// Returns `None` when no row matches or the matching row has expired;
/// callers map that to a 404 response.
pub async fn fetch_snippet(pool: &SqlitePool, id: i64) -> Result<Option<Snippet>, SnipboxError> {
    let snippet = sqlx::query_as::<_, Snippet>(
        "SELECT id, title, content, created, expires \
         FROM snippets \
         WHERE id = ?1 AND expires > ?2",
    )
    .bind(id)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(snippet)
}

/// Fetch up to `limit` non-expired snippets, newest first.
///
/// The id tiebreak keeps ordering stable for rows created within the
/// same timestamp granularity.
pub async fn latest_snippets(pool: &SqlitePool, limit: i64) -> Result<Vec<Snippet>, SnipboxError> {
    let snippets = sqlx::query_as::<_, Snippet>(
        "SELECT id, title, content, created, expires \
         FROM snippets \
         WHERE expires > ?1 \
         ORDER BY created DESC, id DESC \
         LIMIT ?2",
    )
    .bind(Utc::now())
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(snippets)
}
