//! Product lookup Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::ProductSummary;
use crate::db::repository::catalog;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ProductDetailsQuery {
    pub handle: Option<String>,
    pub cup: Option<String>,
    pub size: Option<String>,
}

/// GET /api/product-details?handle=&cup=&size= - 按条件查询商品
///
/// handle 必填；cup/size 各自独立可选，旧前端未选择时会传空字符串，
/// 按缺省处理。
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ProductDetailsQuery>,
) -> AppResult<Json<Vec<ProductSummary>>> {
    let handle = query
        .handle
        .as_deref()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| AppError::validation("handle is required"))?;
    let cup = query.cup.as_deref().filter(|c| !c.is_empty());
    let size = query.size.as_deref().filter(|s| !s.is_empty());

    let products = catalog::list_products(&state.db.pool, handle, cup, size).await?;
    Ok(Json(products))
}
