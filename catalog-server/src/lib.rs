//! Catalog Server - 商品目录查询服务
//!
//! # 架构概述
//!
//! 本模块是目录查询服务的主入口，提供以下核心功能：
//!
//! - **筛选解析** (`db/repository/catalog`): 按 category → handle → size → cup
//!   逐级收窄的去重取值查询
//! - **关联商品** (`db/repository/related`): 基于历史同单共现的关联商品排序与分页
//! - **分类缓存** (`cache`): 进程级 TTL 缓存 (仅分类列表)
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (连接池、模型、查询)
//! ├── cache/         # 分类缓存
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod cache;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use cache::{CategoryCache, Clock, SystemClock};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______      __        __
  / ____/___ _/ /_____ _/ /___  ____ _
 / /   / __ `/ __/ __ `/ / __ \/ __ `/
/ /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
\____/\__,_/\__/\__,_/_/\____/\__, /
                             /____/
    "#
    );
}
