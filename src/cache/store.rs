//! Cache collaborator contract

use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Key-value store the expression cache delegates to. Implementations are
/// external collaborators (an in-memory map, Redis, anything with
/// get/put/forget semantics); values are opaque serialized strings.
///
/// Operations are fallible and potentially latent; timeout policy belongs to
/// the implementation, not to this crate.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch a value. `Ok(None)` is a miss.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value with a time-to-live.
    async fn put(&self, key: &str, value: String, ttl: Duration) -> Result<()>;

    /// Remove a value. Removing an absent key is not an error.
    async fn forget(&self, key: &str) -> Result<()>;
}
