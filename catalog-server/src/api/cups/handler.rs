//! Cup API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::CupRow;
use crate::db::repository::catalog;
use crate::utils::AppResult;

/// GET /api/cups/:handle/:size - 获取某系列某尺码的罩杯列表
pub async fn list(
    State(state): State<ServerState>,
    Path((handle, size)): Path<(String, String)>,
) -> AppResult<Json<Vec<CupRow>>> {
    let cups = catalog::list_cups(&state.db.pool, &handle, &size).await?;
    Ok(Json(cups))
}
