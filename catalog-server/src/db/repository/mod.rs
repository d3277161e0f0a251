//! Repository Module
//!
//! Read-only query functions over the catalog store. 所有查询都是
//! 每请求独立的无状态读取，失败不重试，由调用方转为 500 响应。

pub mod catalog;
pub mod related;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory pool with the catalog schema and a small seeded shop.
    ///
    /// Seed layout (used by both catalog and related-products tests):
    ///
    /// | transaction | lines (sku × qty) |
    /// |-------------|-------------------|
    /// | T1 | BRA-001×1, BRA-002×5, SWIM-001×2 |
    /// | T2 | BRA-001×2, BRA-010×1, PAN-001×3 |
    /// | T3 | BRA-010×4 |
    /// | T4 | SWIM-001×7 |
    /// | T5 | BRA-001×NULL, BRA-004×NULL |
    pub async fn seeded_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE product (
                sku TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                handle TEXT NOT NULL,
                size TEXT NOT NULL,
                cup TEXT NOT NULL,
                BKStorage INTEGER,
                Brooklyn INTEGER,
                Chinatown INTEGER,
                Flushing INTEGER,
                BK59ST INTEGER,
                CA INTEGER
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query(
            "CREATE TABLE sell_record (
                transaction_id TEXT NOT NULL,
                sku TEXT NOT NULL,
                quantity INTEGER,
                PRIMARY KEY (transaction_id, sku)
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        let products = [
            // (sku, name, category, handle, size, cup, brooklyn_stock)
            ("BRA-001", "Aria Lace 32A", "Bras", "aria", "32", "A", Some(4)),
            ("BRA-002", "Aria Lace 34B", "Bras", "aria", "34", "B", Some(2)),
            ("BRA-003", "Aria Lace 34C", "Bras", "aria", "34", "C", None),
            ("BRA-010", "Bella Mesh 36B", "Bras", "bella", "36", "B", Some(1)),
            ("BRA-004", "Bella Mesh 34D", "Bras", "bella", "34", "D", None),
            ("PAN-001", "Daisy Brief M", "Panties", "daisy", "M", "NA", Some(9)),
            ("SWIM-001", "Coral Top 34B", "Swimwear", "coral", "34", "B", Some(6)),
        ];
        for (sku, name, category, handle, size, cup, brooklyn) in products {
            sqlx::query(
                "INSERT INTO product (sku, name, category, handle, size, cup, Brooklyn) VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(sku)
            .bind(name)
            .bind(category)
            .bind(handle)
            .bind(size)
            .bind(cup)
            .bind(brooklyn)
            .execute(&pool)
            .await
            .unwrap();
        }

        let sells: [(&str, &str, Option<i64>); 9] = [
            ("T1", "BRA-001", Some(1)),
            ("T1", "BRA-002", Some(5)),
            ("T1", "SWIM-001", Some(2)),
            ("T2", "BRA-001", Some(2)),
            ("T2", "BRA-010", Some(1)),
            ("T2", "PAN-001", Some(3)),
            ("T3", "BRA-010", Some(4)),
            ("T4", "SWIM-001", Some(7)),
            ("T5", "BRA-001", None),
        ];
        for (transaction_id, sku, quantity) in sells {
            sqlx::query(
                "INSERT INTO sell_record (transaction_id, sku, quantity) VALUES (?, ?, ?)",
            )
            .bind(transaction_id)
            .bind(sku)
            .bind(quantity)
            .execute(&pool)
            .await
            .unwrap();
        }
        // BRA-004 only ever sold with unknown quantity
        sqlx::query(
            "INSERT INTO sell_record (transaction_id, sku, quantity) VALUES ('T5', 'BRA-004', NULL)",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }
}
