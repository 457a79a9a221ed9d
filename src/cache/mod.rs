//! Expression caching
//!
//! Compiling the full expression set is the expensive part of constructing a
//! filter, and it is a pure function of the profanity and false-positive
//! lists. [`ExpressionCache`] memoizes compiled sets in an injected
//! [`CacheStore`] keyed by a content hash of those lists, with a
//! time-to-live and a tracked-keys registry so every entry this subsystem
//! ever wrote can be enumerated and removed in one sweep.
//!
//! Store failures are downgraded to cache misses: a broken cache backend
//! costs a recompilation, never a failed check.

mod memory;
mod store;

pub use memory::MemoryStore;
pub use store::CacheStore;

use crate::core::expression::CachedExpressionSet;
use crate::utils::error::Result;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Prefix of every expression-set cache key.
pub const CACHE_KEY_PREFIX: &str = "profanity_expressions_";

/// Registry entry listing every key this subsystem has written.
pub const TRACKED_KEYS_KEY: &str = "profanity_cache_keys";

/// Default entry time-to-live (24 hours).
pub const DEFAULT_TTL: Duration = Duration::from_secs(86_400);

/// Caching layer over a [`CacheStore`] for compiled expression sets.
pub struct ExpressionCache {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
    /// Serializes the read-modify-write on the tracked-keys registry
    registry_lock: Mutex<()>,
}

impl ExpressionCache {
    /// Wrap a store with the default time-to-live.
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self::with_ttl(store, DEFAULT_TTL)
    }

    /// Wrap a store with an explicit time-to-live.
    pub fn with_ttl(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            registry_lock: Mutex::new(()),
        }
    }

    /// Derive the cache key for a pair of word lists: a hash over their
    /// serialized content. The hash is order-sensitive; reordering the same
    /// logical lists produces a different key.
    pub fn cache_key(profanities: &[String], false_positives: &[String]) -> String {
        let payload = serde_json::json!({
            "profanities": profanities,
            "false_positives": false_positives
        });
        let digest = Sha256::digest(payload.to_string().as_bytes());
        format!("{CACHE_KEY_PREFIX}{}", hex::encode(digest))
    }

    /// Look up a cached expression set. Store failures and undeserializable
    /// payloads are logged and treated as misses.
    pub async fn load(&self, key: &str) -> Option<CachedExpressionSet> {
        let payload = match self.store.get(key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(e) => {
                warn!("expression cache unavailable, treating as miss: {e}");
                return None;
            }
        };

        match serde_json::from_str(&payload) {
            Ok(set) => {
                debug!("expression cache hit for {key}");
                Some(set)
            }
            Err(e) => {
                warn!("discarding undeserializable cache entry {key}: {e}");
                None
            }
        }
    }

    /// Write an expression set back and track its key for bulk
    /// invalidation. Failures are logged; the compiled set in hand is still
    /// perfectly usable.
    pub async fn save(&self, key: &str, set: &CachedExpressionSet) {
        let payload = match serde_json::to_string(set) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("failed to serialize expression set for caching: {e}");
                return;
            }
        };

        if let Err(e) = self.store.put(key, payload, self.ttl).await {
            warn!("failed to cache compiled expressions: {e}");
            return;
        }

        if let Err(e) = self.track_key(key).await {
            warn!("failed to track cache key {key}: {e}");
        }
    }

    /// Remove every entry this subsystem has written, then the registry
    /// itself.
    pub async fn invalidate_all(&self) -> Result<()> {
        let _guard = self.registry_lock.lock().await;

        let keys = self.tracked_keys().await?;
        for key in &keys {
            self.store.forget(key).await?;
        }
        self.store.forget(TRACKED_KEYS_KEY).await?;

        debug!("invalidated {} cached expression sets", keys.len());
        Ok(())
    }

    async fn track_key(&self, key: &str) -> Result<()> {
        let _guard = self.registry_lock.lock().await;

        let mut keys = self.tracked_keys().await?;
        if keys.iter().any(|k| k == key) {
            return Ok(());
        }
        keys.push(key.to_string());

        let payload = serde_json::to_string(&keys)?;
        self.store.put(TRACKED_KEYS_KEY, payload, self.ttl).await
    }

    async fn tracked_keys(&self) -> Result<Vec<String>> {
        match self.store.get(TRACKED_KEYS_KEY).await? {
            Some(payload) => Ok(serde_json::from_str(&payload).unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }
}
