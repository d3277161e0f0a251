use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CategoryCache, SystemClock};
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 每个请求都是对共享存储的无状态读取；ServerState 本身通过 Clone
/// 浅拷贝进入各个 handler，内部均为 Arc 持有，所有权成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
/// | category_cache | CategoryCache | 分类列表 TTL 缓存 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务 (连接池)
    pub db: DbService,
    /// 分类列表缓存 (进程级、仅按时间失效)
    pub category_cache: CategoryCache,
}

impl ServerState {
    /// 初始化服务器状态：打开连接池、执行迁移、构造分类缓存
    ///
    /// 缓存在此构造一次并随 state 传递，避免隐藏的可变全局量。
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_url, config.max_connections).await?;

        let category_cache = CategoryCache::new(
            Duration::from_secs(config.category_cache_ttl_secs),
            Arc::new(SystemClock),
        );

        Ok(Self {
            config: config.clone(),
            db,
            category_cache,
        })
    }
}
