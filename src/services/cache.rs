use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use crate::models::RankingResponse;

/// In-process cache of ranked results
///
/// Rankings depend on the clock, so entries live only for a short TTL and
/// are dropped as soon as the profile or the opportunity pool changes.
pub struct ScoreCache {
    rankings: Cache<String, Arc<RankingResponse>>,
}

impl ScoreCache {
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let rankings = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .support_invalidation_closures()
            .build();

        Self { rankings }
    }

    pub async fn get(&self, key: &str) -> Option<Arc<RankingResponse>> {
        let hit = self.rankings.get(key).await;
        if hit.is_some() {
            tracing::trace!("Ranking cache hit: {}", key);
        } else {
            tracing::trace!("Ranking cache miss: {}", key);
        }
        hit
    }

    pub async fn insert(&self, key: String, ranking: RankingResponse) {
        tracing::trace!("Ranking cache set: {}", key);
        self.rankings.insert(key, Arc::new(ranking)).await;
    }

    /// Drop every cached ranking for one profile
    pub fn invalidate_profile(&self, profile_id: &str) -> Result<(), CacheError> {
        let prefix = CacheKey::profile_prefix(profile_id);
        self.rankings
            .invalidate_entries_if(move |key, _| key.starts_with(&prefix))
            .map_err(|e| CacheError::Invalidation(e.to_string()))?;
        tracing::debug!("Invalidated cached rankings for profile {}", profile_id);
        Ok(())
    }

    /// Drop everything, e.g. after new opportunities arrive
    pub fn invalidate_all(&self) {
        self.rankings.invalidate_all();
        tracing::debug!("Invalidated all cached rankings");
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.rankings.entry_count(),
        }
    }
}

/// Errors that can occur with cache operations
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache invalidation error: {0}")]
    Invalidation(String),
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    fn profile_prefix(profile_id: &str) -> String {
        format!("ranking:{}:", profile_id)
    }

    /// Build a cache key for a profile ranking with its query parameters
    pub fn ranking(profile_id: &str, tier: Option<&str>, limit: usize) -> String {
        format!(
            "{}{}:{}",
            Self::profile_prefix(profile_id),
            tier.unwrap_or("all"),
            limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(profile_id: &str) -> RankingResponse {
        RankingResponse {
            profile_id: profile_id.to_string(),
            scores: vec![],
            total_candidates: 3,
            skipped: 1,
            cached: false,
        }
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(CacheKey::ranking("acme", None, 50), "ranking:acme:all:50");
        assert_eq!(
            CacheKey::ranking("acme", Some("priority"), 10),
            "ranking:acme:priority:10"
        );
    }

    #[tokio::test]
    async fn test_cache_set_get() {
        let cache = ScoreCache::new(100, 60);
        let key = CacheKey::ranking("acme", None, 50);

        assert!(cache.get(&key).await.is_none());
        cache.insert(key.clone(), ranking("acme")).await;
        let cached = cache.get(&key).await;
        assert!(cached.is_some_and(|r| r.total_candidates == 3 && r.skipped == 1));
    }

    #[tokio::test]
    async fn test_invalidate_profile_only_hits_that_profile() {
        let cache = ScoreCache::new(100, 60);
        let acme = CacheKey::ranking("acme", None, 50);
        let acme_priority = CacheKey::ranking("acme", Some("priority"), 50);
        let other = CacheKey::ranking("acme-two", None, 50);

        cache.insert(acme.clone(), ranking("acme")).await;
        cache.insert(acme_priority.clone(), ranking("acme")).await;
        cache.insert(other.clone(), ranking("acme-two")).await;

        cache.invalidate_profile("acme").unwrap();
        cache.rankings.run_pending_tasks().await;

        assert!(cache.get(&acme).await.is_none());
        assert!(cache.get(&acme_priority).await.is_none());
        assert!(cache.get(&other).await.is_some());
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let cache = ScoreCache::new(100, 60);
        let key = CacheKey::ranking("acme", None, 50);
        cache.insert(key.clone(), ranking("acme")).await;

        cache.invalidate_all();

        assert!(cache.get(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_stats_count_entries() {
        let cache = ScoreCache::new(100, 60);
        cache.insert(CacheKey::ranking("acme", None, 50), ranking("acme")).await;
        cache.insert(CacheKey::ranking("beta", None, 50), ranking("beta")).await;
        cache.rankings.run_pending_tasks().await;

        assert_eq!(cache.stats(), CacheStats { entries: 2 });
    }
}
