//! Catalog filter queries (筛选解析)
//!
//! 每个函数返回某一维度的去重取值集合，已知维度作为合取过滤条件。
//! 纯读取，无排序信号。

use super::RepoResult;
use crate::db::models::{CategoryRow, CupRow, HandleRow, ProductSummary, SizeRow};
use sqlx::SqlitePool;

/// All distinct categories, ascending
pub async fn list_categories(pool: &SqlitePool) -> RepoResult<Vec<CategoryRow>> {
    let rows = sqlx::query_as::<_, CategoryRow>(
        "SELECT DISTINCT category FROM product ORDER BY category",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Distinct handles, optionally restricted to one category, ascending
pub async fn list_handles(
    pool: &SqlitePool,
    category: Option<&str>,
) -> RepoResult<Vec<HandleRow>> {
    let rows = match category {
        Some(category) => {
            sqlx::query_as::<_, HandleRow>(
                "SELECT DISTINCT handle FROM product WHERE category = ? ORDER BY handle",
            )
            .bind(category)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, HandleRow>("SELECT DISTINCT handle FROM product ORDER BY handle")
                .fetch_all(pool)
                .await?
        }
    };
    Ok(rows)
}

/// Distinct sizes for a handle, ascending
pub async fn list_sizes(pool: &SqlitePool, handle: &str) -> RepoResult<Vec<SizeRow>> {
    let rows = sqlx::query_as::<_, SizeRow>(
        "SELECT DISTINCT size FROM product WHERE handle = ? ORDER BY size",
    )
    .bind(handle)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Distinct cups for a handle + size, ascending
pub async fn list_cups(pool: &SqlitePool, handle: &str, size: &str) -> RepoResult<Vec<CupRow>> {
    let rows = sqlx::query_as::<_, CupRow>(
        "SELECT DISTINCT cup FROM product WHERE handle = ? AND size = ? ORDER BY cup",
    )
    .bind(handle)
    .bind(size)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Products matching a handle with optional cup/size refinements.
///
/// 省略的条件不参与过滤；结果按 sku 的稳定目录顺序返回。
pub async fn list_products(
    pool: &SqlitePool,
    handle: &str,
    cup: Option<&str>,
    size: Option<&str>,
) -> RepoResult<Vec<ProductSummary>> {
    let mut sql = String::from("SELECT sku, name FROM product WHERE handle = ?");
    if cup.is_some() {
        sql.push_str(" AND cup = ?");
    }
    if size.is_some() {
        sql.push_str(" AND size = ?");
    }
    sql.push_str(" ORDER BY sku");

    let mut query = sqlx::query_as::<_, ProductSummary>(&sql).bind(handle);
    if let Some(cup) = cup {
        query = query.bind(cup);
    }
    if let Some(size) = size {
        query = query.bind(size);
    }

    let rows = query.fetch_all(pool).await?;
    Ok(rows)
}
