//! # Document Repository
//!
//! A durable key-value store of JSON documents, backed by the `kv_store`
//! table. The ledger keeps each collection as one document.
//!
//! ## Atomic Multi-Key Writes
//! ```text
//! put_many([("business_sales", ..), ("business_products", ..)])
//!      │
//!      ▼
//! ┌─────────────────────────────────────────────┐
//! │  BEGIN                                      │
//! │    UPSERT business_sales                    │
//! │    UPSERT business_products                 │
//! │  COMMIT  ← both documents or neither        │
//! └─────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const UPSERT_SQL: &str = r#"
    INSERT INTO kv_store (key, value, updated_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = excluded.updated_at
"#;

/// Repository for JSON documents stored by key.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: SqlitePool,
}

impl DocumentRepository {
    /// Creates a new DocumentRepository.
    pub fn new(pool: SqlitePool) -> Self {
        DocumentRepository { pool }
    }

    /// Reads the raw document stored under `key`.
    ///
    /// ## Returns
    /// * `Ok(Some(text))` - Document found
    /// * `Ok(None)` - Nothing stored under this key yet
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        debug!(key = %key, "Reading document");

        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    /// Stores `value` under `key`, replacing any previous document.
    pub async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing document");

        sqlx::query(UPSERT_SQL)
            .bind(key)
            .bind(value)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Stores several documents in one transaction.
    ///
    /// If any write fails the transaction is rolled back (on drop) and no
    /// document changes.
    pub async fn put_many(&self, entries: &[(&str, String)]) -> DbResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let now = Utc::now().to_rfc3339();
        for (key, value) in entries {
            debug!(key = %key, bytes = value.len(), "Writing document");

            sqlx::query(UPSERT_SQL)
                .bind(*key)
                .bind(value.as_str())
                .bind(now.as_str())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// Removes the document under `key`. Returns whether one existed.
    pub async fn delete(&self, key: &str) -> DbResult<bool> {
        debug!(key = %key, "Deleting document");

        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts stored documents.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kv_store")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_put_get_overwrite_delete() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let docs = db.documents();

        assert_eq!(docs.get("business_products").await.unwrap(), None);

        docs.put("business_products", "[]").await.unwrap();
        docs.put("business_products", "[1]").await.unwrap();
        assert_eq!(
            docs.get("business_products").await.unwrap().as_deref(),
            Some("[1]")
        );
        assert_eq!(docs.count().await.unwrap(), 1);

        assert!(docs.delete("business_products").await.unwrap());
        assert!(!docs.delete("business_products").await.unwrap());
        assert_eq!(docs.get("business_products").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_many_writes_every_key() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let docs = db.documents();

        docs.put_many(&[
            ("business_sales", "[\"s\"]".to_string()),
            ("business_products", "[\"p\"]".to_string()),
        ])
        .await
        .unwrap();

        assert_eq!(docs.count().await.unwrap(), 2);
        assert_eq!(
            docs.get("business_sales").await.unwrap().as_deref(),
            Some("[\"s\"]")
        );
    }

    #[tokio::test]
    async fn test_writes_fail_on_closed_pool() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(db.documents().put("k", "v").await.is_err());
        assert!(db
            .documents()
            .put_many(&[("k", "v".to_string())])
            .await
            .is_err());
    }
}
