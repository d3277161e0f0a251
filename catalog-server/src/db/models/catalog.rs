//! Filter dimension rows (逐级收窄查询的返回行)

use serde::{Deserialize, Serialize};

/// Distinct category value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CategoryRow {
    pub category: String,
}

/// Distinct handle value (商品系列键，跨 size/cup 变体)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct HandleRow {
    pub handle: String,
}

/// Distinct size value for a handle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SizeRow {
    pub size: String,
}

/// Distinct cup value for a handle + size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CupRow {
    pub cup: String,
}

/// Product lookup result — sku + display name only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductSummary {
    pub sku: String,
    pub name: String,
}
