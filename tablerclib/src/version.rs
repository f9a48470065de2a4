//! Literal-prefix version matching for warning gates.
//!
//! Gates compare the installed version's minor series against a literal
//! target by exact string equality. This is deliberately not semantic
//! versioning: `"1.5"` and `"1.50"` are different series, and no range
//! matching is performed. The scope is a single known deprecation per
//! series, so the narrow comparison is the point.

use crate::warnings::WarningFilter;

/// The portion of a version string preceding the last dot separator.
///
/// For a dotted version this is the "major.minor" prefix; a string with no
/// dot is returned whole.
///
/// ```
/// use tablerclib::version::minor_series;
///
/// assert_eq!(minor_series("1.5.3"), "1.5");
/// assert_eq!(minor_series("0.20.1"), "0.20");
/// assert_eq!(minor_series("2"), "2");
/// ```
pub fn minor_series(version: &str) -> &str {
    match version.rfind('.') {
        Some(idx) => &version[..idx],
        None => version,
    }
}

/// A version-gated suppression rule.
///
/// When the installed version of a backend falls in `series`, the carried
/// filter is registered in the session's warning filters. Otherwise the
/// gate does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionGate {
    series: String,
    filter: WarningFilter,
}

impl VersionGate {
    /// Create a gate for the given minor series (e.g. `"1.5"`).
    pub fn new(series: impl Into<String>, filter: WarningFilter) -> Self {
        Self {
            series: series.into(),
            filter,
        }
    }

    /// The series literal this gate targets.
    pub fn series(&self) -> &str {
        &self.series
    }

    /// The filter registered when the gate matches.
    pub fn filter(&self) -> &WarningFilter {
        &self.filter
    }

    /// Whether the installed version falls in this gate's series.
    pub fn matches(&self, version: &str) -> bool {
        minor_series(version) == self.series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warnings::WarningFilter;

    #[test]
    fn test_minor_series() {
        assert_eq!(minor_series("1.5.3"), "1.5");
        assert_eq!(minor_series("1.5.11"), "1.5");
        assert_eq!(minor_series("1.6.0"), "1.6");
        // Only the last dot is split off
        assert_eq!(minor_series("1.5"), "1");
        // No dot at all: the whole string is the series
        assert_eq!(minor_series("15"), "15");
        assert_eq!(minor_series(""), "");
    }

    #[test]
    fn test_gate_matches_patch_releases() {
        let gate = VersionGate::new("1.5", WarningFilter::deprecation("msg"));
        assert!(gate.matches("1.5.0"));
        assert!(gate.matches("1.5.3"));
        assert!(gate.matches("1.5.11"));
    }

    #[test]
    fn test_gate_rejects_other_series() {
        let gate = VersionGate::new("1.5", WarningFilter::deprecation("msg"));
        assert!(!gate.matches("1.6.0"));
        assert!(!gate.matches("1.4.9"));
        assert!(!gate.matches("2.5.0"));
        // Literal comparison, not numeric: 1.50 is a different series
        assert!(!gate.matches("1.50.3"));
        // "1.5" itself splits to series "1"
        assert!(!gate.matches("1.5"));
    }
}
