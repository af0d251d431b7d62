//! ---
//! fms_section: "03-admin-tooling"
//! fms_subsection: "binary"
//! fms_type: "source"
//! fms_scope: "code"
//! fms_description: "Control CLI for administrators inspecting R-FMS releases."
//! fms_version: "v0.1.0-alpha1"
//! fms_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use r_fms_version::{BuildInfo, VersionInfo};
use serde::Serialize;
use tracing::debug;

/// Top-level release commands.
#[derive(Debug, Subcommand)]
pub enum ReleaseCommand {
    /// Print the release metadata of this binary.
    Show(ShowOptions),
    /// Validate a candidate version string.
    Check(CheckOptions),
}

/// Options for `release show`.
#[derive(Debug, Args, Default)]
pub struct ShowOptions {
    /// Emit the release document as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Options for `release check`.
#[derive(Debug, Args)]
pub struct CheckOptions {
    /// Candidate version string to validate.
    #[arg(long, value_name = "STRING", conflicts_with = "file")]
    pub raw: Option<String>,
    /// Read the candidate version string from a file.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
    /// Label the candidate as a development build.
    #[arg(long)]
    pub dev: bool,
}

#[derive(Debug, Serialize)]
struct ReleaseDocument<'a> {
    version: &'a VersionInfo,
    build: BuildInfo,
}

/// Execute the supplied release command.
pub fn run(command: ReleaseCommand) -> Result<()> {
    match command {
        ReleaseCommand::Show(options) => show(&options),
        ReleaseCommand::Check(options) => check(&options),
    }
}

fn show(options: &ShowOptions) -> Result<()> {
    let version = VersionInfo::current();
    if options.json {
        let document = ReleaseDocument {
            version,
            build: BuildInfo::current(),
        };
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        render_release(version);
    }
    Ok(())
}

fn check(options: &CheckOptions) -> Result<()> {
    let raw = candidate(options)?;
    let info = VersionInfo::from_raw(&raw, options.dev)
        .context("candidate version rejected")?;
    debug!(release = %info.release(), "candidate accepted");
    println!(
        "Valid: {}\nRelease: {}\nPrerelease: {}",
        info.full_version(),
        info.release(),
        placeholder(info.prerelease())
    );
    Ok(())
}

fn candidate(options: &CheckOptions) -> Result<String> {
    if let Some(raw) = &options.raw {
        return Ok(raw.clone());
    }
    if let Some(path) = &options.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading candidate version from {}", path.display()));
    }
    bail!("either --raw or --file must be supplied");
}

fn render_release(version: &VersionInfo) {
    let build = BuildInfo::current();
    println!(
        "{}\nPrerelease: {}\nBuilt: {}",
        version.banner(),
        placeholder(version.prerelease()),
        build.build_timestamp
    );
}

fn placeholder(value: &str) -> &str {
    if value.is_empty() {
        "none"
    } else {
        value
    }
}
