//! ---
//! fms_section: "01-release-versioning"
//! fms_subsection: "module"
//! fms_type: "source"
//! fms_scope: "code"
//! fms_description: "Release version metadata shared across the workspace."
//! fms_version: "v0.1.0-alpha1"
//! fms_owner: "tbd"
//! ---
use serde::Serialize;

/// Build provenance captured at compile time.
///
/// The values come from `VERGEN_*` environment variables emitted by the
/// build script. Fields the build environment could not determine carry
/// placeholder values rather than failing the build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    /// Abbreviated git commit hash the binary was built from.
    pub git_sha: String,
    /// RFC 3339 timestamp of the build.
    pub build_timestamp: String,
    /// Target triple the binary was compiled for.
    pub target: String,
    /// Cargo profile used for the build.
    pub profile: String,
}

impl BuildInfo {
    /// Build metadata for the running binary.
    #[must_use]
    pub fn current() -> BuildInfo {
        BuildInfo {
            git_sha: option_env!("VERGEN_GIT_SHA").unwrap_or("UNKNOWN").to_owned(),
            build_timestamp: option_env!("VERGEN_BUILD_TIMESTAMP")
                .unwrap_or("UNKNOWN")
                .to_owned(),
            target: option_env!("VERGEN_CARGO_TARGET_TRIPLE")
                .unwrap_or("UNKNOWN")
                .to_owned(),
            profile: option_env!("VERGEN_CARGO_PROFILE")
                .unwrap_or("UNKNOWN")
                .to_owned(),
        }
    }
}
