//! Wire/query models
//!
//! 所有字段名都是对外契约的一部分，serde rename 固定为旧前端期望的拼写。

pub mod catalog;
pub mod related;

pub use catalog::{CategoryRow, CupRow, HandleRow, ProductSummary, SizeRow};
pub use related::RelatedProduct;
