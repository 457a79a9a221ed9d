//! French text normalization

use super::TextNormalizer;
use crate::config::Language;
use crate::utils::error::{FilterError, Result};
use regex::Regex;
use std::collections::BTreeMap;

/// Replaces look-alike characters standing alone between word boundaries
/// with their base letter, driven by the configured substitution table.
/// Characters inside words are left to the compiled patterns.
pub struct FrenchNormalizer {
    replacements: Vec<(Regex, String)>,
}

impl FrenchNormalizer {
    /// Build the boundary patterns from the substitution table.
    pub fn new(substitutions: &BTreeMap<char, Vec<char>>) -> Result<Self> {
        let mut replacements = Vec::with_capacity(substitutions.len());
        for (letter, looks) in substitutions {
            let class: String = looks
                .iter()
                .map(|c| regex::escape(&c.to_string()))
                .collect();
            let pattern = format!("\\b[{class}]\\b");
            let regex = Regex::new(&pattern).map_err(|e| {
                FilterError::Config(format!(
                    "invalid normalizer pattern for letter '{letter}': {e}"
                ))
            })?;
            replacements.push((regex, letter.to_string()));
        }
        Ok(Self { replacements })
    }
}

impl TextNormalizer for FrenchNormalizer {
    fn normalize(&self, text: &str) -> String {
        let mut normalized = text.to_string();
        for (regex, letter) in &self.replacements {
            normalized = regex.replace_all(&normalized, letter.as_str()).into_owned();
        }
        normalized
    }

    fn language(&self) -> Language {
        Language::French
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;

    fn normalizer() -> FrenchNormalizer {
        FrenchNormalizer::new(&FilterConfig::default().substitutions).expect("normalizer")
    }

    #[test]
    fn test_replaces_standalone_lookalikes() {
        assert_eq!(normalizer().normalize("il a é crit"), "il a e crit");
    }

    #[test]
    fn test_leaves_embedded_characters_alone() {
        // in-word variants are the compiled patterns' job
        assert_eq!(normalizer().normalize("fÛck"), "fÛck");
    }

    #[test]
    fn test_preserves_length() {
        let input = "un é et un ç";
        assert_eq!(
            normalizer().normalize(input).chars().count(),
            input.chars().count()
        );
    }
}
