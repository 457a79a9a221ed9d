//! Profanity expression compilation
//!
//! Turns the configured word lists into obfuscation-tolerant match patterns.
//! Every canonical letter of a profanity is rewritten into a character class
//! of its look-alikes quantified one-or-more (tolerating doubled letters),
//! and a separator fragment is threaded between the letters so that noise
//! characters (`f-u-c-k`, `f.u.c.k`, `f u c k`) cannot defeat the match.
//!
//! Compilation is a pure function of the configuration: identical inputs
//! always produce identical pattern strings, which is what makes the
//! compiled set cacheable by content hash.

use crate::config::FilterConfig;
use crate::utils::error::{FilterError, Result};
use fancy_regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Token standing in for the separator fragment while a word is being
/// rewritten through the substitution table. Replaced with the real
/// fragment before the pattern reaches the regex compiler.
pub(crate) const SEPARATOR_PLACEHOLDER: &str = "{!!}";

/// One compiled matcher for one profanity word.
#[derive(Debug)]
pub struct CompiledExpression {
    /// The canonical profanity word this expression was derived from
    pub word: String,
    /// The pattern source, kept for cache serialization
    pub pattern: String,
    /// The compiled pattern
    pub(crate) regex: Regex,
}

impl CompiledExpression {
    fn new(word: String, pattern: String) -> Result<Self> {
        let regex = Regex::new(&pattern).map_err(|e| {
            FilterError::Config(format!("invalid expression for profanity '{word}': {e}"))
        })?;
        Ok(Self {
            word,
            pattern,
            regex,
        })
    }
}

/// The full compiled output for one configuration: the separator fragment,
/// the per-letter fragments and one expression per profanity word, in
/// configured order.
#[derive(Debug)]
pub struct CompiledExpressionSet {
    pub(crate) separator_expression: String,
    pub(crate) character_expressions: BTreeMap<char, String>,
    pub(crate) expressions: Vec<CompiledExpression>,
}

/// Serializable form of a [`CompiledExpressionSet`], stored by the cache
/// layer. Holds pattern sources rather than compiled state; rehydration
/// recompiles them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedExpressionSet {
    /// The profanity list the set was compiled from
    pub profanities: Vec<String>,
    /// The false-positive list the set was compiled from
    pub false_positives: Vec<String>,
    /// The separator pattern fragment
    pub separator_expression: String,
    /// Per-letter pattern fragments
    pub character_expressions: BTreeMap<char, String>,
    /// `(word, pattern source)` pairs in configured order
    pub expressions: Vec<(String, String)>,
}

impl CompiledExpressionSet {
    /// Compile every configured profanity word into an expression.
    pub fn compile(config: &FilterConfig) -> Result<Self> {
        config.validate()?;

        let separator_expression = build_separator_expression(&config.separators);
        let character_expressions = build_substitution_expressions(&config.substitutions);

        let mut expressions = Vec::with_capacity(config.profanities.len());
        for word in &config.profanities {
            let pattern = build_profanity_pattern(
                word,
                &character_expressions,
                &separator_expression,
            );
            expressions.push(CompiledExpression::new(word.clone(), pattern)?);
        }

        Ok(Self {
            separator_expression,
            character_expressions,
            expressions,
        })
    }

    /// Rehydrate a set from its cached form, recompiling the stored pattern
    /// sources.
    pub fn from_cached(cached: &CachedExpressionSet) -> Result<Self> {
        let mut expressions = Vec::with_capacity(cached.expressions.len());
        for (word, pattern) in &cached.expressions {
            expressions.push(CompiledExpression::new(word.clone(), pattern.clone())?);
        }

        Ok(Self {
            separator_expression: cached.separator_expression.clone(),
            character_expressions: cached.character_expressions.clone(),
            expressions,
        })
    }

    /// Convert to the serializable form stored by the cache layer.
    pub fn to_cached(&self, config: &FilterConfig) -> CachedExpressionSet {
        CachedExpressionSet {
            profanities: config.profanities.clone(),
            false_positives: config.false_positives.clone(),
            separator_expression: self.separator_expression.clone(),
            character_expressions: self.character_expressions.clone(),
            expressions: self
                .expressions
                .iter()
                .map(|e| (e.word.clone(), e.pattern.clone()))
                .collect(),
        }
    }

    /// The compiled expressions, in configured order.
    pub fn expressions(&self) -> &[CompiledExpression] {
        &self.expressions
    }
}

/// Build the separator fragment: a non-greedy run of zero or more noise
/// characters. A period is only noise when a word character follows it
/// (zero-width lookahead), so a sentence-final `.` is never swallowed while
/// `f.u.c.k` still matches. The lookahead is why compiled patterns use a
/// backtracking engine.
pub(crate) fn build_separator_expression(separators: &[char]) -> String {
    let class: String = separators
        .iter()
        .filter(|c| **c != '.')
        .map(|c| regex::escape(&c.to_string()))
        .collect();

    format!("(?:[{class}]|\\.(?=\\w)|\\s)*?")
}

/// Build the per-letter fragments: each letter becomes a character class of
/// its look-alikes quantified one-or-more (so `ffuucckk` collapses onto the
/// same expression), followed by the separator placeholder.
pub(crate) fn build_substitution_expressions(
    substitutions: &BTreeMap<char, Vec<char>>,
) -> BTreeMap<char, String> {
    substitutions
        .iter()
        .map(|(letter, looks)| {
            let class: String = looks
                .iter()
                .map(|c| regex::escape(&c.to_string()))
                .collect();
            (*letter, format!("[{class}]+{SEPARATOR_PLACEHOLDER}"))
        })
        .collect()
}

/// Rewrite one profanity word into its pattern source. Characters without a
/// substitution entry are emitted as escaped literals and get no separator
/// tolerance.
fn build_profanity_pattern(
    word: &str,
    character_expressions: &BTreeMap<char, String>,
    separator_expression: &str,
) -> String {
    let mut expression = String::new();
    for ch in word.chars() {
        match character_expressions.get(&ch) {
            Some(fragment) => expression.push_str(fragment),
            None => expression.push_str(&regex::escape(&ch.to_string())),
        }
    }

    let expression = expression.replace(SEPARATOR_PLACEHOLDER, separator_expression);

    format!("(?i){expression}")
}
