//! Handle API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::HandleRow;
use crate::db::repository::catalog;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct HandlesQuery {
    pub category: Option<String>,
}

/// GET /api/handles?category= - 获取系列列表，可按分类过滤
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<HandlesQuery>,
) -> AppResult<Json<Vec<HandleRow>>> {
    // 空字符串视为未选择分类
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let handles = catalog::list_handles(&state.db.pool, category).await?;
    Ok(Json(handles))
}
