//! Session startup: presence check, warning gates, option application.
//!
//! [`initialize`] is the single entry point. For each selected backend it
//! runs the control flow: presence check → (absent: skip) → (present:
//! read version → register matching warning gates → write display
//! options). All mutation lands in the [`Session`] handle passed by the
//! caller; nothing ambient is touched, so the whole routine is testable
//! with a [`StaticProbe`](crate::StaticProbe) and a fresh session.

use std::collections::HashMap;

use serde::Serialize;

use crate::backend::Backend;
use crate::display::{DisplayOption, SessionOptions};
use crate::probe::PackageProbe;
use crate::warnings::WarningFilters;

/// Options for the startup routine.
#[derive(Debug, Clone)]
pub struct StartupOptions {
    backends: Vec<Backend>,
}

impl Default for StartupOptions {
    fn default() -> Self {
        Self {
            backends: Backend::builtin(),
        }
    }
}

impl StartupOptions {
    /// Default options: process the built-in backends.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process the given backends instead of the built-ins.
    pub fn backends(mut self, backends: Vec<Backend>) -> Self {
        self.backends = backends;
        self
    }

    /// Backends that will be processed.
    pub fn selected(&self) -> &[Backend] {
        &self.backends
    }
}

/// The session's configuration state: warning filters plus one display
/// configuration per backend that has been configured.
///
/// A backend gets a display entry only once its presence check succeeds;
/// skipped backends leave no trace here.
#[derive(Debug, Clone, Default)]
pub struct Session {
    filters: WarningFilters,
    displays: HashMap<String, SessionOptions>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Warning filters registered so far.
    pub fn filters(&self) -> &WarningFilters {
        &self.filters
    }

    /// Display configuration for a backend, if it has been configured.
    pub fn display(&self, backend: &str) -> Option<&SessionOptions> {
        self.displays.get(backend)
    }

    fn display_mut(&mut self, backend: &str) -> &mut SessionOptions {
        self.displays.entry(backend.to_string()).or_default()
    }
}

/// Outcome of processing one backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendStatus {
    /// Present: options applied, gates evaluated
    Configured,
    /// Absent: nothing touched
    Skipped,
}

/// One display option write that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppliedOption {
    /// Option key
    pub option: DisplayOption,
    /// Value written
    pub value: usize,
}

/// Report for one backend.
#[derive(Debug, Clone, Serialize)]
pub struct BackendReport {
    /// Backend package name
    pub name: String,
    /// Whether the backend was configured or skipped
    pub status: BackendStatus,
    /// Installed version, when present
    pub version: Option<String>,
    /// Options written, in application order
    pub applied: Vec<AppliedOption>,
    /// Number of warning filters this backend's gates registered
    pub suppressed: usize,
}

impl BackendReport {
    /// Whether the backend was present and configured.
    pub fn is_configured(&self) -> bool {
        self.status == BackendStatus::Configured
    }

    /// Whether the backend was absent and skipped.
    pub fn is_skipped(&self) -> bool {
        self.status == BackendStatus::Skipped
    }
}

/// Structured result of a startup run, one entry per selected backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StartupReport {
    /// Per-backend outcomes, in selection order
    pub backends: Vec<BackendReport>,
}

impl StartupReport {
    /// Report entry for a backend by name.
    pub fn backend(&self, name: &str) -> Option<&BackendReport> {
        self.backends.iter().find(|b| b.name == name)
    }

    /// Number of backends that were configured.
    pub fn configured_count(&self) -> usize {
        self.backends.iter().filter(|b| b.is_configured()).count()
    }

    /// Number of backends that were skipped.
    pub fn skipped_count(&self) -> usize {
        self.backends.iter().filter(|b| b.is_skipped()).count()
    }
}

/// Run the startup routine.
///
/// Absence of a backend is a normal, silent outcome: the backend is
/// recorded as skipped and nothing in the session changes for it. The
/// routine is idempotent — re-running it against the same session rewrites
/// the same option values and registers no duplicate filters.
///
/// # Example
///
/// ```rust
/// use tablerclib::{initialize, Session, StartupOptions, StaticProbe};
///
/// let probe = StaticProbe::new().with("dataframe", "1.5.3");
/// let mut session = Session::new();
/// let report = initialize(&probe, &mut session, StartupOptions::new());
///
/// assert!(report.backend("dataframe").unwrap().is_configured());
/// assert!(report.backend("datatable").unwrap().is_skipped());
/// assert_eq!(session.filters().len(), 1);
/// ```
pub fn initialize(
    probe: &dyn PackageProbe,
    session: &mut Session,
    options: StartupOptions,
) -> StartupReport {
    let mut report = StartupReport::default();

    for backend in options.selected() {
        report.backends.push(initialize_backend(probe, session, backend));
    }

    report
}

/// Process a single backend against the session.
fn initialize_backend(
    probe: &dyn PackageProbe,
    session: &mut Session,
    backend: &Backend,
) -> BackendReport {
    if !probe.is_available(backend.name()) {
        return BackendReport {
            name: backend.name().to_string(),
            status: BackendStatus::Skipped,
            version: None,
            applied: Vec::new(),
            suppressed: 0,
        };
    }

    let version = probe.version(backend.name());

    let mut suppressed = 0;
    if let Some(ref version) = version {
        for gate in backend.gates() {
            if gate.matches(version) {
                session.filters.suppress(gate.filter().clone());
                suppressed += 1;
            }
        }
    }

    let sink = session.display_mut(backend.name());
    backend.apply_to(sink);

    let applied = backend
        .options()
        .iter()
        .map(|(option, value)| AppliedOption {
            option: *option,
            value: *value,
        })
        .collect();

    BackendReport {
        name: backend.name().to_string(),
        status: BackendStatus::Configured,
        version,
        applied,
        suppressed,
    }
}
