//! Related product row

use serde::{Deserialize, Serialize};

/// One ranked related product with per-location stock counts.
///
/// JSON 字段名（含各门店库存列的大小写）是旧前端的固定契约，不可改动；
/// 数据库侧以下划线别名选出，serde rename 还原对外拼写。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RelatedProduct {
    pub sku: String,
    pub name: String,
    pub cup: String,
    pub size: String,
    /// 该商品全量历史销量之和 — 唯一的排序信号
    #[serde(rename = "popularityWeight")]
    pub popularity_weight: i64,
    #[serde(rename = "BKStorage")]
    pub bk_storage: i64,
    #[serde(rename = "Brooklyn")]
    pub brooklyn: i64,
    #[serde(rename = "Chinatown")]
    pub chinatown: i64,
    #[serde(rename = "Flushing")]
    pub flushing: i64,
    #[serde(rename = "BK59ST")]
    pub bk59st: i64,
    #[serde(rename = "CA")]
    pub ca: i64,
}
