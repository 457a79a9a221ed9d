//! English text normalization

use super::TextNormalizer;
use crate::config::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Accented characters collapsed to their base letter, wherever they appear.
static ACCENT_MAP: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let groups: &[(char, &str)] = &[
        ('a', "áàâäãåÁÀÂÄÃÅ"),
        ('c', "çÇ"),
        ('e', "èéêëÈÉÊË"),
        ('i', "íìîïÍÌÎÏ"),
        ('n', "ñÑ"),
        ('o', "óòôöõÓÒÔÖÕøØ"),
        ('u', "úùûüÚÙÛÜ"),
        ('y', "ýÿÝ"),
    ];

    let mut map = HashMap::new();
    for (base, variants) in groups {
        for variant in variants.chars() {
            map.insert(variant, *base);
        }
    }
    map
});

/// Collapses accented variants (`fÛck` -> `fuck`) into base letters so the
/// substitution table stays small. One character in, one character out.
pub struct EnglishNormalizer;

impl TextNormalizer for EnglishNormalizer {
    fn normalize(&self, text: &str) -> String {
        text.chars()
            .map(|c| ACCENT_MAP.get(&c).copied().unwrap_or(c))
            .collect()
    }

    fn language(&self) -> Language {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_accents() {
        let normalizer = EnglishNormalizer;
        assert_eq!(normalizer.normalize("fÛck"), "fuck");
        assert_eq!(normalizer.normalize("crème brûlée"), "creme brulee");
    }

    #[test]
    fn test_preserves_plain_text_and_length() {
        let normalizer = EnglishNormalizer;
        assert_eq!(normalizer.normalize("plain text!"), "plain text!");
        let input = "naïve Ångström";
        assert_eq!(
            normalizer.normalize(input).chars().count(),
            input.chars().count()
        );
    }
}
