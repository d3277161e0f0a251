//! Category API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::CategoryRow;
use crate::db::repository::catalog;
use crate::utils::AppResult;

/// GET /api/categories - 获取所有分类
///
/// 走进程级 TTL 缓存：窗口内即使存储数据变化，返回也保持不变。
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<CategoryRow>>> {
    let pool = state.db.pool.clone();
    let categories = state
        .category_cache
        .get_or_refresh(move || async move { catalog::list_categories(&pool).await })
        .await?;
    Ok(Json(categories))
}
