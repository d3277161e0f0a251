//! Related-products ranking (关联商品)
//!
//! 参考商品出现过的交易里同单出现的其它 SKU 即为关联商品。共现发现
//! 不限分类，之后再按请求的分类过滤；排序键是该 SKU 的全量历史销量
//! (降序)，并以 sku 升序作为确定性的次级排序，保证分页可复现。

use super::RepoResult;
use crate::db::models::RelatedProduct;
use sqlx::SqlitePool;

/// Ranked page of products co-purchased with `reference_sku`.
///
/// `page_number` and `page_size` must already be validated (>= 1).
/// 窗口为左开右闭 (offset, offset+page_size]，每页最多 page_size 行，
/// 页与页之间不重叠、不跳行。无交易或无幸存者时返回空页而非错误。
pub async fn rank_related(
    pool: &SqlitePool,
    reference_sku: &str,
    category: &str,
    page_number: i64,
    page_size: i64,
) -> RepoResult<Vec<RelatedProduct>> {
    let offset = (page_number - 1) * page_size;

    let rows = sqlx::query_as::<_, RelatedProduct>(
        "WITH co_occurring AS (
            SELECT DISTINCT s.sku
            FROM sell_record s
            WHERE s.transaction_id IN (
                SELECT transaction_id FROM sell_record WHERE sku = ?1
            )
              AND s.sku <> ?1
        ),
        weighted AS (
            SELECT
                p.sku,
                p.name,
                p.cup,
                p.size,
                COALESCE((
                    SELECT SUM(COALESCE(s.quantity, 0))
                    FROM sell_record s
                    WHERE s.sku = p.sku
                ), 0) AS popularity_weight,
                COALESCE(p.BKStorage, 0) AS bk_storage,
                COALESCE(p.Brooklyn, 0) AS brooklyn,
                COALESCE(p.Chinatown, 0) AS chinatown,
                COALESCE(p.Flushing, 0) AS flushing,
                COALESCE(p.BK59ST, 0) AS bk59st,
                COALESCE(p.CA, 0) AS ca
            FROM co_occurring c
            JOIN product p ON p.sku = c.sku
            WHERE p.category = ?2
        ),
        ranked AS (
            SELECT
                w.*,
                ROW_NUMBER() OVER (ORDER BY w.popularity_weight DESC, w.sku ASC) AS row_num
            FROM weighted w
        )
        SELECT sku, name, cup, size, popularity_weight,
               bk_storage, brooklyn, chinatown, flushing, bk59st, ca
        FROM ranked
        WHERE row_num > ?3 AND row_num <= ?4
        ORDER BY row_num",
    )
    .bind(reference_sku)
    .bind(category)
    .bind(offset)
    .bind(offset + page_size)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
