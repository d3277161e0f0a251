//! Related products Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::RelatedProduct;
use crate::db::repository::related;
use crate::utils::{AppError, AppResult};

/// 旧前端的分页默认值
const DEFAULT_PAGE_NUMBER: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 20;

#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    pub sku: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "pageNumber")]
    pub page_number: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// 解析分页参数：缺省走默认值，给了但不是正整数则报验证错误
fn parse_page_param(raw: Option<&str>, name: &str, default: i64) -> Result<i64, AppError> {
    match raw {
        None => Ok(default),
        Some("") => Ok(default),
        Some(s) => match s.parse::<i64>() {
            Ok(v) if v >= 1 => Ok(v),
            _ => Err(AppError::validation(format!(
                "{name} must be a positive integer"
            ))),
        },
    }
}

/// GET /api/related-products?sku=&category=&pageNumber=&pageSize=
///
/// 返回与 sku 历史同单共现、且属于指定分类的商品的一页，按全量销量
/// 降序 (sku 升序决胜) 排列。
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<RelatedQuery>,
) -> AppResult<Json<Vec<RelatedProduct>>> {
    let sku = query
        .sku
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("sku is required"))?;
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::validation("category is required"))?;

    let page_number = parse_page_param(
        query.page_number.as_deref(),
        "pageNumber",
        DEFAULT_PAGE_NUMBER,
    )?;
    let page_size = parse_page_param(query.page_size.as_deref(), "pageSize", DEFAULT_PAGE_SIZE)?;

    let page = related::rank_related(&state.db.pool, sku, category, page_number, page_size).await?;
    Ok(Json(page))
}
