//! Session-wide warning filters.
//!
//! Backends emit diagnostics during an interactive session; a
//! [`WarningFilters`] registry holds the suppression rules installed at
//! startup. A rule matches on category plus the exact message text, and
//! once registered it lasts for the session lifetime.

use serde::{Deserialize, Serialize};

/// Category of a backend diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningCategory {
    /// Upcoming removal of behavior, distinct from an error
    Deprecation,
    /// Behavior that will change in a future release
    Future,
    /// Runtime condition worth surfacing but not fatal
    Runtime,
}

/// A suppression rule: category plus exact message text.
///
/// Matching is whole-string equality on the message, never substring or
/// pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningFilter {
    /// Category the rule applies to
    pub category: WarningCategory,
    /// Exact message text to suppress
    pub message: String,
}

impl WarningFilter {
    /// Create a filter for the given category and exact message.
    pub fn new(category: WarningCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    /// Create a deprecation filter.
    pub fn deprecation(message: impl Into<String>) -> Self {
        Self::new(WarningCategory::Deprecation, message)
    }

    /// Whether this rule suppresses the given warning.
    pub fn matches(&self, category: WarningCategory, message: &str) -> bool {
        self.category == category && self.message == message
    }
}

/// The session's registered suppression rules.
#[derive(Debug, Clone, Default)]
pub struct WarningFilters {
    filters: Vec<WarningFilter>,
}

impl WarningFilters {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a suppression rule.
    ///
    /// Registering a rule identical to an existing one is a no-op, so
    /// re-running startup in the same session cannot stack duplicates.
    pub fn suppress(&mut self, filter: WarningFilter) {
        if !self.filters.contains(&filter) {
            self.filters.push(filter);
        }
    }

    /// Whether a warning with this category and exact message is suppressed.
    pub fn is_suppressed(&self, category: WarningCategory, message: &str) -> bool {
        self.filters.iter().any(|f| f.matches(category, message))
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterate over registered rules.
    pub fn iter(&self) -> impl Iterator<Item = &WarningFilter> {
        self.filters.iter()
    }
}
