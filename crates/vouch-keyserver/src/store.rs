//! SQLite-backed key store.

use sqlx::SqlitePool;

/// A registered public key.
#[derive(Debug, Clone)]
pub struct StoredKey {
    pub kid: String,
    pub public_key: String,
    pub created_at: i64,
}

/// Insert a key under the given identifier.
pub async fn insert_key(
    pool: &SqlitePool,
    kid: &str,
    public_key: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO keys (kid, public_key, created_at) VALUES (?, ?, ?)")
        .bind(kid)
        .bind(public_key)
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await?;
    Ok(())
}

/// Fetch a key by identifier.
pub async fn get_key(pool: &SqlitePool, kid: &str) -> Result<Option<StoredKey>, sqlx::Error> {
    let row: Option<(String, String, i64)> =
        sqlx::query_as("SELECT kid, public_key, created_at FROM keys WHERE kid = ?")
            .bind(kid)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(|(kid, public_key, created_at)| StoredKey {
        kid,
        public_key,
        created_at,
    }))
}

/// Delete a key by identifier. Returns whether a row was removed.
pub async fn delete_key(pool: &SqlitePool, kid: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM keys WHERE kid = ?")
        .bind(kid)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
