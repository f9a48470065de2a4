//! Package presence and version probing.
//!
//! The presence check is a capability abstraction: [`PackageProbe`] answers
//! whether a named package is installed (and at what version) without
//! loading or executing any of that package's code. [`MetadataProbe`] is
//! the real implementation over a Cargo project's resolved package graph;
//! [`StaticProbe`] is an in-memory stand-in so callers and tests can
//! simulate "present" and "absent" environments.

use std::collections::HashMap;
use std::path::Path;

use cargo_metadata::MetadataCommand;

use crate::error::TablercError;
use crate::Result;

/// Answers presence and version queries for installed packages.
pub trait PackageProbe {
    /// Whether the named package is installed. Must have no side effects
    /// on the package itself.
    fn is_available(&self, name: &str) -> bool;

    /// Installed version string of the named package, if present.
    fn version(&self, name: &str) -> Option<String>;
}

/// Probe backed by a Cargo project's package metadata.
///
/// Discovery reads the resolved dependency graph once, in process, with no
/// network access; queries afterwards are plain map lookups.
#[derive(Debug, Clone)]
pub struct MetadataProbe {
    packages: HashMap<String, String>,
}

impl MetadataProbe {
    /// Discover installed packages from a path.
    ///
    /// The path can be:
    /// - A directory containing Cargo.toml
    /// - A path to a Cargo.toml file
    pub fn discover(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Find the manifest path
        let manifest_path = if path.is_file() && path.file_name() == Some("Cargo.toml".as_ref()) {
            path.to_path_buf()
        } else if path.is_dir() {
            let cargo_toml = path.join("Cargo.toml");
            if cargo_toml.exists() {
                cargo_toml
            } else {
                return Err(TablercError::ManifestNotFound(path.to_path_buf()));
            }
        } else {
            return Err(TablercError::ManifestNotFound(path.to_path_buf()));
        };

        let metadata = MetadataCommand::new()
            .manifest_path(&manifest_path)
            .exec()
            .map_err(|e| TablercError::CargoMetadata(e.to_string()))?;

        let packages = metadata
            .packages
            .iter()
            .map(|p| (p.name.clone(), p.version.to_string()))
            .collect();

        Ok(Self { packages })
    }

    /// Number of packages in the probed environment.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// All probed package names, sorted.
    pub fn package_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.packages.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl PackageProbe for MetadataProbe {
    fn is_available(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    fn version(&self, name: &str) -> Option<String> {
        self.packages.get(name).cloned()
    }
}

/// In-memory probe with a fixed name → version map.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    packages: HashMap<String, String>,
}

impl StaticProbe {
    /// Create an empty probe (everything reads as absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: mark a package as installed at a version.
    pub fn with(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.packages.insert(name.into(), version.into());
        self
    }
}

impl PackageProbe for StaticProbe {
    fn is_available(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    fn version(&self, name: &str) -> Option<String> {
        self.packages.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_static_probe() {
        let probe = StaticProbe::new().with("dataframe", "1.5.3");
        assert!(probe.is_available("dataframe"));
        assert_eq!(probe.version("dataframe").as_deref(), Some("1.5.3"));
        assert!(!probe.is_available("datatable"));
        assert_eq!(probe.version("datatable"), None);
    }

    #[test]
    fn test_discover_rejects_missing_manifest() {
        let temp = tempfile::tempdir().unwrap();
        let err = MetadataProbe::discover(temp.path()).unwrap_err();
        assert!(matches!(err, TablercError::ManifestNotFound(_)));
    }

    /// Build a minimal project in `root` that depends on a local package
    /// named `dep` at `version`, and return the project directory.
    fn project_with_dep(root: &Path, dep: &str, version: &str) -> std::path::PathBuf {
        let dep_dir = root.join(dep);
        fs::create_dir_all(dep_dir.join("src")).unwrap();
        fs::write(
            dep_dir.join("Cargo.toml"),
            format!(
                "[package]\nname = \"{dep}\"\nversion = \"{version}\"\nedition = \"2021\"\n"
            ),
        )
        .unwrap();
        fs::write(dep_dir.join("src/lib.rs"), "").unwrap();

        let app_dir = root.join("app");
        fs::create_dir_all(app_dir.join("src")).unwrap();
        fs::write(
            app_dir.join("Cargo.toml"),
            format!(
                "[package]\nname = \"app\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n\
                 [dependencies]\n{dep} = {{ path = \"../{dep}\" }}\n"
            ),
        )
        .unwrap();
        fs::write(app_dir.join("src/lib.rs"), "").unwrap();
        app_dir
    }

    #[test]
    fn test_discover_finds_dependency_versions() {
        let temp = tempfile::tempdir().unwrap();
        let app_dir = project_with_dep(temp.path(), "dataframe", "1.5.3");

        let probe = MetadataProbe::discover(&app_dir).unwrap();
        assert!(probe.is_available("app"));
        assert!(probe.is_available("dataframe"));
        assert_eq!(probe.version("dataframe").as_deref(), Some("1.5.3"));
        assert!(!probe.is_available("datatable"));
        assert!(probe.package_names().contains(&"dataframe"));
    }

    #[test]
    fn test_discover_accepts_manifest_path() {
        let temp = tempfile::tempdir().unwrap();
        let app_dir = project_with_dep(temp.path(), "datatable", "0.9.1");

        let probe = MetadataProbe::discover(app_dir.join("Cargo.toml")).unwrap();
        assert_eq!(probe.version("datatable").as_deref(), Some("0.9.1"));
    }
}
