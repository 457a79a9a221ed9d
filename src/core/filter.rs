//! Profanity filter facade
//!
//! [`ProfanityFilter`] wires the expression compiler, the language
//! normalizer and the detection engine together behind a single `check`
//! operation. Construction either compiles the configuration directly or
//! goes through an [`ExpressionCache`] to reuse a previously compiled set.

use crate::cache::ExpressionCache;
use crate::config::FilterConfig;
use crate::core::detector::ProfanityDetector;
use crate::core::expression::CompiledExpressionSet;
use crate::core::normalizer::{TextNormalizer, normalizer_for};
use crate::core::types::CheckResult;
use crate::utils::error::{FilterError, Result};
use tracing::{debug, warn};

/// Detects and masks profanities in arbitrary text.
///
/// Immutable after construction; sessions are independent, so one filter can
/// serve concurrent checks from multiple threads.
pub struct ProfanityFilter {
    detector: ProfanityDetector,
    normalizer: Box<dyn TextNormalizer>,
}

impl ProfanityFilter {
    /// Build a filter from the built-in default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(&FilterConfig::default())
    }

    /// Build a filter from a configuration, compiling every expression.
    pub fn with_config(config: &FilterConfig) -> Result<Self> {
        let set = CompiledExpressionSet::compile(config)?;
        Self::assemble(config, set)
    }

    /// Build a filter through an expression cache. A cache hit skips
    /// recompilation; a miss compiles and writes back. Cache failures are
    /// never fatal, they degrade to a plain compile.
    pub async fn with_cache(config: &FilterConfig, cache: &ExpressionCache) -> Result<Self> {
        config.validate()?;

        let key = ExpressionCache::cache_key(&config.profanities, &config.false_positives);

        if let Some(cached) = cache.load(&key).await {
            match CompiledExpressionSet::from_cached(&cached) {
                Ok(set) => {
                    debug!("compiled expressions restored from cache");
                    return Self::assemble(config, set);
                }
                Err(e) => {
                    warn!("cached expression set failed to rehydrate, recompiling: {e}");
                }
            }
        }

        let set = CompiledExpressionSet::compile(config)?;
        cache.save(&key, &set.to_cached(config)).await;
        Self::assemble(config, set)
    }

    fn assemble(config: &FilterConfig, set: CompiledExpressionSet) -> Result<Self> {
        let normalizer = normalizer_for(config)?;
        let detector = ProfanityDetector::new(set, &config.false_positives);
        Ok(Self {
            detector,
            normalizer,
        })
    }

    /// Check a string for profanities, returning the masked copy and the
    /// match statistics. Blank input is an error, not a clean result.
    pub fn check(&self, text: &str) -> Result<CheckResult> {
        if text.trim().is_empty() {
            return Err(FilterError::EmptyInput);
        }

        let normalized = self.normalizer.normalize(text);
        self.detector.scan(text, &normalized)
    }
}
