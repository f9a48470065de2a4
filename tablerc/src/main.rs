//! # tablerc
//!
//! A CLI for applying session display settings to the optional data-table
//! backends available in a project.
//!
//! ## Overview
//!
//! tablerc is built on top of tablerclib. It probes a Cargo project's
//! package metadata for the known table backends, and for each one that is
//! present registers the version-gated warning filters and applies the
//! fixed display options, then reports what it did. Backends that are not
//! installed are skipped silently.
//!
//! ## Usage
//!
//! ```bash
//! # Apply configuration for backends found in the current project
//! tablerc .
//!
//! # Limit to one backend
//! tablerc . --backend dataframe
//!
//! # Output as JSON
//! tablerc . --output json
//!
//! # Presence check only, no configuration
//! tablerc check .
//! ```

use std::process::ExitCode;

use anyhow::bail;
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use tablerclib::{
    initialize, Backend, MetadataProbe, PackageProbe, Session, StartupOptions,
};

mod render;

/// Row for the presence-only check output.
#[derive(Debug, Serialize)]
struct PresenceRow {
    backend: String,
    present: bool,
    version: Option<String>,
}

/// Build the clap Command structure
fn build_command() -> Command {
    let path_arg = Arg::new("path")
        .help("Project to probe (defaults to current directory)")
        .default_value(".");
    let backend_arg = Arg::new("backend")
        .short('b')
        .long("backend")
        .action(ArgAction::Append)
        .help("Limit to a backend by name (can be specified multiple times)");
    let output_arg = Arg::new("output")
        .short('o')
        .long("output")
        .value_parser(["table", "json"])
        .default_value("table")
        .help("Output format");

    Command::new("tablerc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Apply display settings to the data-table backends available in a project")
        .arg(path_arg.clone())
        .arg(backend_arg.clone())
        .arg(output_arg.clone())
        .subcommand(
            Command::new("check")
                .about("Probe backend presence without applying configuration")
                .arg(path_arg)
                .arg(backend_arg)
                .arg(output_arg),
        )
}

/// Resolve the requested backend names against the built-in set.
fn select_backends(matches: &ArgMatches) -> Result<Vec<Backend>, anyhow::Error> {
    let builtin = Backend::builtin();

    let requested: Vec<&String> = matches
        .get_many::<String>("backend")
        .map(|v| v.collect())
        .unwrap_or_default();
    if requested.is_empty() {
        return Ok(builtin);
    }

    let mut selected = Vec::new();
    for name in requested {
        match builtin.iter().find(|b| b.name() == name.as_str()) {
            Some(backend) => selected.push(backend.clone()),
            None => {
                let known: Vec<&str> = builtin.iter().map(|b| b.name()).collect();
                bail!("unknown backend '{}' (known: {})", name, known.join(", "));
            }
        }
    }
    Ok(selected)
}

fn wants_json(matches: &ArgMatches) -> bool {
    matches.get_one::<String>("output").map(|s| s.as_str()) == Some("json")
}

fn probe_path(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".")
}

/// Handler for the root command: run startup configuration and report.
fn run_apply(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let backends = select_backends(matches)?;
    let probe = MetadataProbe::discover(probe_path(matches))?;

    let mut session = Session::new();
    let report = initialize(
        &probe,
        &mut session,
        StartupOptions::new().backends(backends),
    );

    if wants_json(matches) {
        Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
    } else {
        Ok(render::render_report(&report))
    }
}

/// Handler for the check subcommand: presence only, no configuration.
fn run_check(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let backends = select_backends(matches)?;
    let probe = MetadataProbe::discover(probe_path(matches))?;

    let rows: Vec<PresenceRow> = backends
        .iter()
        .map(|b| PresenceRow {
            backend: b.name().to_string(),
            present: probe.is_available(b.name()),
            version: probe.version(b.name()),
        })
        .collect();

    if wants_json(matches) {
        Ok(format!("{}\n", serde_json::to_string_pretty(&rows)?))
    } else {
        let table_rows: Vec<(String, Option<String>)> = rows
            .into_iter()
            .map(|r| (r.backend, r.version))
            .collect();
        Ok(render::render_presence(&table_rows))
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let result = match matches.subcommand() {
        Some(("check", sub)) => run_check(sub),
        _ => run_apply(&matches),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
