//! ---
//! fms_section: "01-release-versioning"
//! fms_subsection: "module"
//! fms_type: "source"
//! fms_scope: "code"
//! fms_description: "Release version metadata shared across the workspace."
//! fms_version: "v0.1.0-alpha1"
//! fms_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Release metadata for the R-FMS workspace, without creating import cycles:
//! every other crate and binary reads its version information from here and
//! this crate depends on nothing else in the workspace.
//!
//! The release string itself lives in the repository-root `VERSION` file and
//! is embedded at compile time. It is trimmed, validated as a semantic
//! version, and split into a release portion and a prerelease label exactly
//! once per process; afterwards the metadata is immutable and may be read
//! from any thread.

pub mod build_info;
pub mod error;
pub mod release;

pub use build_info::BuildInfo;
pub use error::{VersionError, VersionResult};
pub use release::{
    prerelease, semver, version, VersionInfo, DEV_MODE_ENV, DEV_PRERELEASE, VERSION_HEADER,
};
