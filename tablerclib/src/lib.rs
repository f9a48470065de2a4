//! # tablerclib
//!
//! Session-startup display configuration for optional data-table backends.
//!
//! ## Overview
//!
//! Interactive sessions often have one or more optional table libraries in
//! the environment, each with its own process-global display settings and,
//! for some releases, a known noisy deprecation warning. This library runs
//! that startup glue as a single explicit routine:
//!
//! - **Presence check**: determine whether a backend is installed from
//!   package metadata alone, without executing any of its code
//! - **Version-gated warning suppression**: for known release series,
//!   register a filter matching one exact deprecation message
//! - **Display configuration**: apply a fixed set of truncation and
//!   formatting options to each backend that is present
//!
//! A backend that is not installed is a silent skip, never an error. All
//! mutation goes through a [`Session`] handle passed by the caller, so the
//! routine can be driven with a mock probe and inspected afterwards.
//!
//! ## Example
//!
//! ```rust
//! use tablerclib::{
//!     initialize, DisplayOption, DisplaySink, Session, StartupOptions, StaticProbe,
//!     WarningCategory,
//! };
//!
//! // Simulate an environment with the dataframe backend at 1.5.3
//! let probe = StaticProbe::new().with("dataframe", "1.5.3");
//! let mut session = Session::new();
//!
//! let report = initialize(&probe, &mut session, StartupOptions::new());
//!
//! // dataframe was configured, datatable was absent
//! assert!(report.backend("dataframe").unwrap().is_configured());
//! assert!(report.backend("datatable").unwrap().is_skipped());
//!
//! // Display options landed in the session
//! let display = session.display("dataframe").unwrap();
//! assert_eq!(display.option(DisplayOption::MaxRows), Some(200));
//! assert_eq!(display.option(DisplayOption::Precision), Some(4));
//!
//! // The 1.5-series deprecation is suppressed
//! assert!(session.filters().is_suppressed(
//!     WarningCategory::Deprecation,
//!     tablerclib::INPLACE_ASSIGNMENT_WARNING,
//! ));
//! ```
//!
//! To probe a real project, use [`MetadataProbe::discover`] instead of
//! [`StaticProbe`]; it reads the project's resolved package graph through
//! cargo metadata.

pub mod backend;
pub mod display;
pub mod error;
pub mod probe;
pub mod startup;
pub mod version;
pub mod warnings;

pub use backend::{Backend, INPLACE_ASSIGNMENT_WARNING};
pub use display::{DisplayOption, DisplaySink, SessionOptions};
pub use error::TablercError;
pub use probe::{MetadataProbe, PackageProbe, StaticProbe};
pub use startup::{
    initialize, AppliedOption, BackendReport, BackendStatus, Session, StartupOptions,
    StartupReport,
};
pub use version::{minor_series, VersionGate};
pub use warnings::{WarningCategory, WarningFilter, WarningFilters};

/// Result type for tablerclib operations
pub type Result<T> = std::result::Result<T, TablercError>;
