//! Profanity detection engine
//!
//! Scans normalized text against every compiled expression until a full pass
//! confirms nothing new, adjudicating false positives per match and masking
//! confirmed spans in both the working text and the caller-visible clean
//! text. The loop is a fixed point: every confirmed match replaces at least
//! one letter with `*`, which no substitution class matches, so the number
//! of passes is bounded by the number of confirmed matches.

use crate::core::expression::{CompiledExpression, CompiledExpressionSet};
use crate::core::types::CheckResult;
use crate::utils::error::{FilterError, Result};
use std::collections::HashSet;
use tracing::debug;

/// Holds the compiled expressions in scan order and the false-positive set.
pub struct ProfanityDetector {
    expressions: Vec<CompiledExpression>,
    false_positives: HashSet<String>,
}

impl ProfanityDetector {
    /// Build a detector over a compiled set. Expressions are scanned longest
    /// word first, so "fucking" claims its span before "fuck" can; the sort
    /// is stable, ties keep configured order.
    pub fn new(set: CompiledExpressionSet, false_positives: &[String]) -> Self {
        let mut expressions = set.expressions;
        expressions.sort_by_key(|e| std::cmp::Reverse(e.word.chars().count()));

        let false_positives = false_positives.iter().map(|w| w.to_lowercase()).collect();

        Self {
            expressions,
            false_positives,
        }
    }

    /// Whether the recovered full-word context is an allowed word.
    pub fn is_false_positive(&self, word: &str) -> bool {
        self.false_positives.contains(&word.to_lowercase())
    }

    pub(crate) fn expressions(&self) -> &[CompiledExpression] {
        &self.expressions
    }

    /// Run one detection session over a source string and its normalized
    /// form.
    pub(crate) fn scan(&self, source: &str, normalized: &str) -> Result<CheckResult> {
        let mut session = ScanSession::new(source, normalized);
        session.run(self)?;
        Ok(session.into_result(source))
    }
}

/// Mutable state of one detection session.
struct ScanSession {
    /// Normalized text with whitespace runs collapsed; masked in place
    working: String,
    /// Working character index -> source character index
    origin: Vec<usize>,
    /// Source characters, masked in place as matches are confirmed
    clean: Vec<char>,
    profanities_count: usize,
    unique: Vec<String>,
}

impl ScanSession {
    fn new(source: &str, normalized: &str) -> Self {
        let (working, origin) = collapse_whitespace(normalized);
        Self {
            working,
            origin,
            clean: source.chars().collect(),
            profanities_count: 0,
            unique: Vec::new(),
        }
    }

    fn run(&mut self, detector: &ProfanityDetector) -> Result<()> {
        loop {
            let mut dirty = false;

            for expression in detector.expressions() {
                let mut pos = 0;
                loop {
                    let found = expression
                        .regex
                        .find_from_pos(&self.working, pos)
                        .map_err(|e| {
                            FilterError::Pattern(format!(
                                "scanning for '{}': {e}",
                                expression.word
                            ))
                        })?;
                    let Some(m) = found else { break };
                    let (start, end) = (m.start(), m.end());

                    let full_word = full_word_context(&self.working, start, end);
                    if detector.is_false_positive(&full_word) {
                        pos = end;
                        continue;
                    }

                    dirty = true;
                    pos = self.confirm(expression, start, end);
                }
            }

            if !dirty {
                break;
            }
        }
        Ok(())
    }

    /// Mask a confirmed match in both texts and record it. Returns the byte
    /// position scanning should resume from.
    fn confirm(&mut self, expression: &CompiledExpression, start: usize, end: usize) -> usize {
        let span_chars = self.working[start..end].chars().count();
        let start_char = self.working[..start].chars().count();

        debug!(word = %expression.word, start, end, "confirmed profanity match");

        self.profanities_count += 1;
        if !self.unique.iter().any(|w| w == &expression.word) {
            self.unique.push(expression.word.clone());
        }

        // mask the working span so it cannot be rematched on later passes
        let mask = "*".repeat(span_chars);
        self.working.replace_range(start..end, &mask);

        // mask the corresponding source span; a span covering a collapsed
        // whitespace run masks the whole original run
        let clean_start = self.origin[start_char];
        let clean_end = self.origin[start_char + span_chars - 1];
        for ch in &mut self.clean[clean_start..=clean_end] {
            *ch = '*';
        }

        start + mask.len()
    }

    fn into_result(self, source: &str) -> CheckResult {
        CheckResult {
            source_string: source.to_string(),
            clean_string: self.clean.into_iter().collect(),
            has_profanity: self.profanities_count > 0,
            profanities_count: self.profanities_count,
            unique_profanities_found: self.unique,
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Expand a match span outward over contiguous word characters to recover
/// the full word around it ("Scunthorpe" from an internal "cunt" match).
/// Masked `*` runs are non-word characters and stop the expansion.
fn full_word_context(text: &str, start: usize, end: usize) -> String {
    let mut left = start;
    for (idx, ch) in text[..start].char_indices().rev() {
        if is_word_char(ch) {
            left = idx;
        } else {
            break;
        }
    }

    let mut right = end;
    for ch in text[end..].chars() {
        if is_word_char(ch) {
            right += ch.len_utf8();
        } else {
            break;
        }
    }

    text[left..right].to_string()
}

/// Collapse every whitespace run to a single space, recording for each
/// working character the source character index it came from. A collapsed
/// run maps to its first character. Masking never introduces whitespace, so
/// this is stable across passes and only needs to happen once per session.
fn collapse_whitespace(text: &str) -> (String, Vec<usize>) {
    let mut working = String::with_capacity(text.len());
    let mut origin = Vec::new();

    let mut chars = text.chars().enumerate().peekable();
    while let Some((idx, ch)) = chars.next() {
        if ch.is_whitespace() {
            working.push(' ');
            origin.push(idx);
            while chars.peek().is_some_and(|(_, c)| c.is_whitespace()) {
                chars.next();
            }
        } else {
            working.push(ch);
            origin.push(idx);
        }
    }

    (working, origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;

    fn detector() -> ProfanityDetector {
        let config = FilterConfig::default();
        let set = CompiledExpressionSet::compile(&config).expect("compile");
        ProfanityDetector::new(set, &config.false_positives)
    }

    #[test]
    fn test_scan_order_is_longest_first() {
        let detector = detector();
        let lengths: Vec<usize> = detector
            .expressions()
            .iter()
            .map(|e| e.word.chars().count())
            .collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_false_positive_lookup_is_case_insensitive() {
        let detector = detector();
        assert!(detector.is_false_positive("Scunthorpe"));
        assert!(detector.is_false_positive("SCUNTHORPE"));
        assert!(!detector.is_false_positive("scunthorpes"));
    }

    #[test]
    fn test_full_word_context_expands_both_ways() {
        assert_eq!(full_word_context("Scunthorpe", 1, 5), "Scunthorpe");
        assert_eq!(full_word_context("in Scunthorpe town", 4, 8), "Scunthorpe");
        assert_eq!(full_word_context("afuckb", 1, 5), "afuckb");
    }

    #[test]
    fn test_full_word_context_stops_at_masked_text() {
        assert_eq!(full_word_context("****cunt", 4, 8), "cunt");
        assert_eq!(full_word_context("a ****cunt! b", 6, 10), "cunt");
    }

    #[test]
    fn test_collapse_whitespace_maps_runs_to_first_char() {
        let (working, origin) = collapse_whitespace("a \t b");
        assert_eq!(working, "a b");
        assert_eq!(origin, vec![0, 1, 4]);
    }
}
