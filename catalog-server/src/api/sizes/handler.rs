//! Size API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::SizeRow;
use crate::db::repository::catalog;
use crate::utils::AppResult;

/// GET /api/sizes/:handle - 获取某系列的尺码列表
pub async fn list(
    State(state): State<ServerState>,
    Path(handle): Path<String>,
) -> AppResult<Json<Vec<SizeRow>>> {
    let sizes = catalog::list_sizes(&state.db.pool, &handle).await?;
    Ok(Json(sizes))
}
