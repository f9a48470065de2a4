//! Optional backend descriptors and the built-in profiles.
//!
//! A [`Backend`] names one optional table library and carries the fixed
//! display settings to apply when it is present, plus any version gates
//! that install warning filters for known-noisy releases. Backends are
//! independent of each other and share no state.

use crate::display::{DisplayOption, DisplaySink};
use crate::version::VersionGate;
use crate::warnings::WarningFilter;

/// Deprecation message emitted by the 1.5 series of the dataframe backend
/// when assigning into an existing column.
pub const INPLACE_ASSIGNMENT_WARNING: &str =
    "will attempt to set the values inplace instead of always setting a new array";

/// Descriptor for one optional table backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backend {
    name: String,
    options: Vec<(DisplayOption, usize)>,
    gates: Vec<VersionGate>,
}

impl Backend {
    /// Create a backend descriptor with no options or gates.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            gates: Vec::new(),
        }
    }

    /// Builder: add a display option to apply.
    pub fn option(mut self, option: DisplayOption, value: usize) -> Self {
        self.options.push((option, value));
        self
    }

    /// Builder: add a version gate.
    pub fn gate(mut self, gate: VersionGate) -> Self {
        self.gates.push(gate);
        self
    }

    /// Package name probed for presence.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display options applied when the backend is present.
    pub fn options(&self) -> &[(DisplayOption, usize)] {
        &self.options
    }

    /// Version gates evaluated against the installed version.
    pub fn gates(&self) -> &[VersionGate] {
        &self.gates
    }

    /// Write this backend's options into a sink.
    pub fn apply_to(&self, sink: &mut dyn DisplaySink) {
        for (option, value) in &self.options {
            sink.set_option(*option, *value);
        }
    }

    /// The dataframe backend: truncation limits plus numeric precision,
    /// with the 1.5-series in-place assignment deprecation gated off.
    pub fn dataframe() -> Self {
        Self::new("dataframe")
            .option(DisplayOption::MaxRows, 200)
            .option(DisplayOption::MaxColumns, 50)
            .option(DisplayOption::MaxColumnWidth, 100)
            .option(DisplayOption::Precision, 4)
            .gate(VersionGate::new(
                "1.5",
                WarningFilter::deprecation(INPLACE_ASSIGNMENT_WARNING),
            ))
    }

    /// The datatable backend: truncation limits plus string-cell length.
    pub fn datatable() -> Self {
        Self::new("datatable")
            .option(DisplayOption::MaxRows, 200)
            .option(DisplayOption::MaxColumns, 50)
            .option(DisplayOption::MaxStringLength, 100)
    }

    /// All backends configured by default at session startup.
    pub fn builtin() -> Vec<Backend> {
        vec![Self::dataframe(), Self::datatable()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::SessionOptions;

    #[test]
    fn test_dataframe_profile() {
        let backend = Backend::dataframe();
        assert_eq!(backend.name(), "dataframe");
        assert_eq!(
            backend.options(),
            &[
                (DisplayOption::MaxRows, 200),
                (DisplayOption::MaxColumns, 50),
                (DisplayOption::MaxColumnWidth, 100),
                (DisplayOption::Precision, 4),
            ]
        );
        assert_eq!(backend.gates().len(), 1);
        assert_eq!(backend.gates()[0].series(), "1.5");
        assert_eq!(
            backend.gates()[0].filter().message,
            INPLACE_ASSIGNMENT_WARNING
        );
    }

    #[test]
    fn test_datatable_profile() {
        let backend = Backend::datatable();
        assert_eq!(backend.name(), "datatable");
        assert_eq!(
            backend.options(),
            &[
                (DisplayOption::MaxRows, 200),
                (DisplayOption::MaxColumns, 50),
                (DisplayOption::MaxStringLength, 100),
            ]
        );
        assert!(backend.gates().is_empty());
    }

    #[test]
    fn test_apply_to_sink() {
        let mut sink = SessionOptions::new();
        Backend::datatable().apply_to(&mut sink);
        assert_eq!(sink.option(DisplayOption::MaxRows), Some(200));
        assert_eq!(sink.option(DisplayOption::MaxColumns), Some(50));
        assert_eq!(sink.option(DisplayOption::MaxStringLength), Some(100));
        // Options not in the profile stay unset
        assert_eq!(sink.option(DisplayOption::Precision), None);
    }

    #[test]
    fn test_builder() {
        let backend = Backend::new("custom").option(DisplayOption::MaxRows, 10);
        assert_eq!(backend.name(), "custom");
        assert_eq!(backend.options(), &[(DisplayOption::MaxRows, 10)]);
        assert!(backend.gates().is_empty());
    }
}
