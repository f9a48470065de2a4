//! Display-option keys and configuration sinks.
//!
//! Configuration is applied through an explicit [`DisplaySink`] handle
//! rather than ambient global state, so the write path is mockable: tests
//! can hand `initialize` a plain in-memory sink and inspect what landed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A display-formatting option understood by a table backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayOption {
    /// Maximum rows rendered before truncation
    MaxRows,
    /// Maximum columns rendered before truncation
    MaxColumns,
    /// Maximum width of a single rendered column
    MaxColumnWidth,
    /// Digits shown after the decimal point for numeric cells
    Precision,
    /// Maximum characters rendered for string cells
    MaxStringLength,
}

impl DisplayOption {
    /// Stable kebab-case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayOption::MaxRows => "max-rows",
            DisplayOption::MaxColumns => "max-columns",
            DisplayOption::MaxColumnWidth => "max-column-width",
            DisplayOption::Precision => "precision",
            DisplayOption::MaxStringLength => "max-string-length",
        }
    }
}

impl fmt::Display for DisplayOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A writable display-configuration object.
///
/// Each write targets an independent key and setting the same value twice
/// has no additional effect, so callers may re-apply freely.
pub trait DisplaySink {
    /// Set an option to a value, replacing any previous value.
    fn set_option(&mut self, option: DisplayOption, value: usize);

    /// Current value of an option, if one has been set.
    fn option(&self, option: DisplayOption) -> Option<usize>;
}

/// In-memory display configuration for one backend in the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionOptions {
    values: HashMap<DisplayOption, usize>,
}

impl SessionOptions {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of options set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no options are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over set options and their values.
    pub fn iter(&self) -> impl Iterator<Item = (DisplayOption, usize)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}

impl DisplaySink for SessionOptions {
    fn set_option(&mut self, option: DisplayOption, value: usize) {
        self.values.insert(option, value);
    }

    fn option(&self, option: DisplayOption) -> Option<usize> {
        self.values.get(&option).copied()
    }
}
