//! Check result type

use serde::Serialize;

/// The outcome of one `check` invocation. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub(crate) source_string: String,
    pub(crate) clean_string: String,
    pub(crate) has_profanity: bool,
    pub(crate) profanities_count: usize,
    pub(crate) unique_profanities_found: Vec<String>,
}

impl CheckResult {
    /// The original, unmodified input.
    pub fn source_string(&self) -> &str {
        &self.source_string
    }

    /// The input with every confirmed profanity span masked by `*`,
    /// original casing and spacing preserved everywhere else.
    pub fn clean_string(&self) -> &str {
        &self.clean_string
    }

    /// Whether any profanity was confirmed.
    pub fn has_profanity(&self) -> bool {
        self.has_profanity
    }

    /// Total number of confirmed occurrences.
    pub fn profanities_count(&self) -> usize {
        self.profanities_count
    }

    /// The distinct profanity words found, in first-seen order.
    pub fn unique_profanities_found(&self) -> &[String] {
        &self.unique_profanities_found
    }
}
