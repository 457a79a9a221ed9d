//! Expression cache behavior: miss/hit, bulk invalidation, TTL expiry and
//! degradation when the backing store is unavailable.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use wordscreen::cache::TRACKED_KEYS_KEY;
use wordscreen::{
    CacheStore, ExpressionCache, FilterConfig, FilterError, MemoryStore, ProfanityFilter, Result,
};

/// In-memory stub that counts store traffic.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    gets: AtomicUsize,
    puts: AtomicUsize,
}

#[async_trait]
impl CacheStore for CountingStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(key, value, ttl).await
    }

    async fn forget(&self, key: &str) -> Result<()> {
        self.inner.forget(key).await
    }
}

/// Stub collaborator that is always down.
struct FailingStore;

#[async_trait]
impl CacheStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(FilterError::Cache("backend offline".to_string()))
    }

    async fn put(&self, _key: &str, _value: String, _ttl: Duration) -> Result<()> {
        Err(FilterError::Cache("backend offline".to_string()))
    }

    async fn forget(&self, _key: &str) -> Result<()> {
        Err(FilterError::Cache("backend offline".to_string()))
    }
}

#[tokio::test]
async fn test_miss_compiles_then_hit_skips_recompilation() {
    let store = Arc::new(CountingStore::default());
    let cache = ExpressionCache::new(store.clone());
    let config = FilterConfig::default();

    ProfanityFilter::with_cache(&config, &cache)
        .await
        .expect("first construction");

    // one put for the expression set, one for the tracked-keys registry
    assert_eq!(store.puts.load(Ordering::SeqCst), 2);

    let registry = store
        .inner
        .get(TRACKED_KEYS_KEY)
        .await
        .expect("registry get")
        .expect("registry present");
    let tracked: Vec<String> = serde_json::from_str(&registry).expect("registry json");
    assert_eq!(tracked.len(), 1);

    let filter = ProfanityFilter::with_cache(&config, &cache)
        .await
        .expect("second construction");

    // the second construction was served from cache, nothing new written
    assert_eq!(store.puts.load(Ordering::SeqCst), 2);

    let result = filter.check("oi! cunt!").expect("check");
    assert_eq!(result.clean_string(), "oi! ****!");
}

#[tokio::test]
async fn test_cached_filter_behaves_like_a_fresh_one() {
    let cache = ExpressionCache::new(Arc::new(MemoryStore::new()));
    let config = FilterConfig::default();

    let direct = ProfanityFilter::with_config(&config).expect("direct");
    ProfanityFilter::with_cache(&config, &cache).await.expect("warm");
    let cached = ProfanityFilter::with_cache(&config, &cache).await.expect("cached");

    for input in ["This is a f-u-c-k-i-n-g sentence", "Scunthorpe", "cuntfuck shit"] {
        let a = direct.check(input).expect("direct check");
        let b = cached.check(input).expect("cached check");
        assert_eq!(a.clean_string(), b.clean_string());
        assert_eq!(a.profanities_count(), b.profanities_count());
    }
}

#[tokio::test]
async fn test_distinct_lists_get_distinct_entries() {
    let store = Arc::new(MemoryStore::new());
    let cache = ExpressionCache::new(store.clone());

    let first = FilterConfig::default();
    let second = FilterConfig::with_lists(
        vec!["fuck".to_string()],
        vec!["scunthorpe".to_string()],
    );

    ProfanityFilter::with_cache(&first, &cache).await.expect("first");
    ProfanityFilter::with_cache(&second, &cache).await.expect("second");

    // two expression entries plus the registry
    assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn test_invalidate_all_forgets_every_tracked_entry() {
    let store = Arc::new(MemoryStore::new());
    let cache = ExpressionCache::new(store.clone());
    let config = FilterConfig::default();

    ProfanityFilter::with_cache(&config, &cache).await.expect("warm");
    assert!(!store.is_empty());

    cache.invalidate_all().await.expect("invalidate");

    assert!(store.is_empty());
    assert_eq!(store.get(TRACKED_KEYS_KEY).await.expect("get"), None);
}

#[tokio::test]
async fn test_expired_entry_recompiles() {
    let store = Arc::new(CountingStore::default());
    let cache = ExpressionCache::with_ttl(store.clone(), Duration::from_millis(10));
    let config = FilterConfig::default();

    ProfanityFilter::with_cache(&config, &cache).await.expect("warm");
    assert_eq!(store.puts.load(Ordering::SeqCst), 2);

    std::thread::sleep(Duration::from_millis(30));

    ProfanityFilter::with_cache(&config, &cache).await.expect("after expiry");

    // the entry (and registry) were rewritten after expiring
    assert_eq!(store.puts.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_unavailable_store_degrades_to_compilation() {
    let cache = ExpressionCache::new(Arc::new(FailingStore));
    let config = FilterConfig::default();

    let filter = ProfanityFilter::with_cache(&config, &cache)
        .await
        .expect("construction survives a dead cache");

    let result = filter.check("This is a fucking sentence").expect("check");
    assert_eq!(result.clean_string(), "This is a ******* sentence");
}
