//! ---
//! fms_section: "01-release-versioning"
//! fms_subsection: "module"
//! fms_type: "source"
//! fms_scope: "code"
//! fms_description: "Release version metadata shared across the workspace."
//! fms_version: "v0.1.0-alpha1"
//! fms_owner: "tbd"
//! ---
use thiserror::Error;

/// Shared result type for version parsing routines.
pub type VersionResult<T> = Result<T, VersionError>;

/// Errors raised while interpreting release version material.
///
/// An invalid embedded `VERSION` file is a build defect rather than a runtime
/// condition; the global initializer in [`crate::release`] therefore never
/// returns this error and halts the process instead. The error surfaces as a
/// value only for operator-supplied candidate strings (tooling and tests).
#[derive(Debug, Error)]
pub enum VersionError {
    /// Raised when a raw or derived version string is not valid SemVer.
    #[error("invalid semantic version {raw:?}: {source}")]
    InvalidFormat {
        /// The offending input, after whitespace trimming.
        raw: String,
        /// Parser diagnostics from the semver crate.
        source: semver::Error,
    },
}

impl VersionError {
    pub(crate) fn invalid_format(raw: &str, source: semver::Error) -> Self {
        VersionError::InvalidFormat {
            raw: raw.to_owned(),
            source,
        }
    }
}
