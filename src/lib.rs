//! # wordscreen
//!
//! Obfuscation-tolerant profanity detection and masking.
//!
//! The filter compiles every configured profanity into a resilient pattern
//! that survives character substitution (`fÛck`, `a$$`), repeated letters
//! (`ffuucckk`) and inserted separators (`f-u-c-k`, `f.u.c.k`), scans
//! normalized text to a fixed point so adjacent and concatenated
//! profanities are all found, and masks confirmed spans in a copy of the
//! original string with casing and spacing preserved. Legitimate words that
//! merely contain a profane substring ("Scunthorpe", "Flicker", "Analyst")
//! are recovered to their full word and checked against a false-positive
//! list before anything is masked.
//!
//! ## Quick start
//!
//! ```
//! use wordscreen::ProfanityFilter;
//!
//! # fn main() -> wordscreen::Result<()> {
//! let filter = ProfanityFilter::new()?;
//!
//! let result = filter.check("This is a fucking sentence")?;
//! assert!(result.has_profanity());
//! assert_eq!(result.profanities_count(), 1);
//! assert_eq!(result.clean_string(), "This is a ******* sentence");
//!
//! let result = filter.check("I live in Scunthorpe")?;
//! assert!(!result.has_profanity());
//! # Ok(())
//! # }
//! ```
//!
//! ## Caching compiled expressions
//!
//! Compilation is a pure function of the word lists, so the compiled set
//! can be memoized in any key-value backend implementing [`CacheStore`]:
//!
//! ```
//! use std::sync::Arc;
//! use wordscreen::{ExpressionCache, FilterConfig, MemoryStore, ProfanityFilter};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> wordscreen::Result<()> {
//! let cache = ExpressionCache::new(Arc::new(MemoryStore::new()));
//! let config = FilterConfig::default();
//!
//! // first construction compiles and caches; later ones reuse the entry
//! let filter = ProfanityFilter::with_cache(&config, &cache).await?;
//! assert!(filter.check("oi! cunt!")?.has_profanity());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::cache::{CacheStore, ExpressionCache, MemoryStore};
pub use crate::config::{FilterConfig, Language};
pub use crate::core::expression::{CachedExpressionSet, CompiledExpression, CompiledExpressionSet};
pub use crate::core::filter::ProfanityFilter;
pub use crate::core::normalizer::{TextNormalizer, normalizer_for};
pub use crate::core::types::CheckResult;
pub use crate::utils::error::{FilterError, Result};
