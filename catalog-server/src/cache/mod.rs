//! 分类缓存
//!
//! 进程级 TTL 缓存，只缓存分类列表。失效仅按时间，无写穿；到期后的
//! 并发刷新可能重复加载一次，属可接受行为而非正确性问题。

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::db::models::CategoryRow;
use crate::db::repository::RepoResult;

/// Time source, injectable so tests can drive expiry without sleeping
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock implementation used in production
#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug)]
struct CacheSlot {
    refreshed_at: Instant,
    categories: Vec<CategoryRow>,
}

/// 分类列表缓存
///
/// 进程启动时构造一次，随 [`ServerState`](crate::core::ServerState)
/// 传入 handler，不使用隐藏的全局量。
#[derive(Clone)]
pub struct CategoryCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    inner: Arc<RwLock<Option<CacheSlot>>>,
}

impl CategoryCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Return the cached list while fresh, otherwise reload via `load`.
    ///
    /// 加载失败时错误向上传播，已有的缓存槽保持原样 (不缓存部分结果)。
    pub async fn get_or_refresh<F, Fut>(&self, load: F) -> RepoResult<Vec<CategoryRow>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RepoResult<Vec<CategoryRow>>>,
    {
        {
            let slot = self.inner.read().await;
            if let Some(slot) = slot.as_ref()
                && self.clock.now().duration_since(slot.refreshed_at) < self.ttl
            {
                return Ok(slot.categories.clone());
            }
        }

        let categories = load().await?;

        let mut slot = self.inner.write().await;
        *slot = Some(CacheSlot {
            refreshed_at: self.clock.now(),
            categories: categories.clone(),
        });

        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoError;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Manually advanced clock
    struct ManualClock {
        base: Instant,
        offset: Mutex<Duration>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                base: Instant::now(),
                offset: Mutex::new(Duration::ZERO),
            }
        }

        fn advance(&self, by: Duration) {
            *self.offset.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.base + *self.offset.lock().unwrap()
        }
    }

    fn rows(names: &[&str]) -> Vec<CategoryRow> {
        names
            .iter()
            .map(|n| CategoryRow {
                category: n.to_string(),
            })
            .collect()
    }

    #[tokio::test]
    async fn serves_cached_list_within_ttl() {
        let clock = Arc::new(ManualClock::new());
        let cache = CategoryCache::new(Duration::from_secs(1800), clock.clone());
        let loads = Arc::new(AtomicUsize::new(0));

        let l = loads.clone();
        let first = cache
            .get_or_refresh(move || {
                l.fetch_add(1, Ordering::SeqCst);
                async { Ok(rows(&["Bras"])) }
            })
            .await
            .unwrap();

        clock.advance(Duration::from_secs(1799));

        // The underlying data "changed", but the window has not elapsed
        let l = loads.clone();
        let second = cache
            .get_or_refresh(move || {
                l.fetch_add(1, Ordering::SeqCst);
                async { Ok(rows(&["Bras", "Swimwear"])) }
            })
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn reloads_after_expiry() {
        let clock = Arc::new(ManualClock::new());
        let cache = CategoryCache::new(Duration::from_secs(1800), clock.clone());

        cache
            .get_or_refresh(|| async { Ok(rows(&["Bras"])) })
            .await
            .unwrap();

        clock.advance(Duration::from_secs(1800));

        let refreshed = cache
            .get_or_refresh(|| async { Ok(rows(&["Bras", "Swimwear"])) })
            .await
            .unwrap();
        assert_eq!(refreshed, rows(&["Bras", "Swimwear"]));
    }

    #[tokio::test]
    async fn failed_reload_propagates_and_keeps_slot() {
        let clock = Arc::new(ManualClock::new());
        let cache = CategoryCache::new(Duration::from_secs(60), clock.clone());

        cache
            .get_or_refresh(|| async { Ok(rows(&["Bras"])) })
            .await
            .unwrap();

        clock.advance(Duration::from_secs(61));

        let err = cache
            .get_or_refresh(|| async { Err(RepoError::Database("connection reset".into())) })
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Database(_)));

        // The stale slot was not overwritten; the next successful load wins
        let after = cache
            .get_or_refresh(|| async { Ok(rows(&["Bras", "Panties"])) })
            .await
            .unwrap();
        assert_eq!(after, rows(&["Bras", "Panties"]));
    }
}
