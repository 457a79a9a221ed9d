//! Language-specific text normalization
//!
//! A normalizer canonicalizes visual stand-ins for plain letters before the
//! compiled patterns run, so a single pattern set matches many Unicode
//! variants without enumerating every homoglyph in the substitution table.
//! Exactly one normalizer is active per detection session, selected from the
//! configured language by [`normalizer_for`].

mod english;
mod french;

pub use english::EnglishNormalizer;
pub use french::FrenchNormalizer;

use crate::config::{FilterConfig, Language};
use crate::utils::error::Result;

/// Contract every language normalizer implements.
///
/// `normalize` must be pure and must preserve the number of characters of
/// its input: the detection engine masks the original text positionally
/// through a character-index mapping built against the normalized text, so
/// a length-changing transform would corrupt the masked output.
pub trait TextNormalizer: Send + Sync {
    /// Canonicalize special characters into plain letters.
    fn normalize(&self, text: &str) -> String;

    /// The language this normalizer serves.
    fn language(&self) -> Language;
}

/// Select the normalizer for the configured language.
pub fn normalizer_for(config: &FilterConfig) -> Result<Box<dyn TextNormalizer>> {
    match config.language {
        Language::English => Ok(Box::new(EnglishNormalizer)),
        Language::French => Ok(Box::new(FrenchNormalizer::new(&config.substitutions)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_selects_by_language() {
        let english = normalizer_for(&FilterConfig::default()).expect("normalizer");
        assert_eq!(english.language(), Language::English);

        let config = FilterConfig {
            language: Language::French,
            ..FilterConfig::default()
        };
        let french = normalizer_for(&config).expect("normalizer");
        assert_eq!(french.language(), Language::French);
    }
}
