//! Core detection engine
//!
//! Expression compilation, text normalization, the scan loop and the public
//! filter facade.

pub mod detector;
pub mod expression;
pub mod filter;
pub mod normalizer;
pub mod types;

pub use detector::ProfanityDetector;
pub use expression::{CachedExpressionSet, CompiledExpression, CompiledExpressionSet};
pub use filter::ProfanityFilter;
pub use normalizer::{EnglishNormalizer, FrenchNormalizer, TextNormalizer, normalizer_for};
pub use types::CheckResult;
