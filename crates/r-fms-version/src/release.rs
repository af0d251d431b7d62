//! ---
//! fms_section: "01-release-versioning"
//! fms_subsection: "module"
//! fms_type: "source"
//! fms_scope: "code"
//! fms_description: "Release version metadata shared across the workspace."
//! fms_version: "v0.1.0-alpha1"
//! fms_owner: "tbd"
//! ---
use std::fmt;

use once_cell::sync::Lazy;
use semver::Version;
use serde::Serialize;
use tracing::debug;

use crate::build_info::BuildInfo;
use crate::error::{VersionError, VersionResult};

/// Header name used by clients to tag outgoing HTTP requests with the running
/// version. This crate only defines the label; it performs no HTTP itself.
pub const VERSION_HEADER: &str = "R-FMS-Version";

/// Environment variable that forces the development prerelease label when set
/// to the exact value `"1"`. Any other value, including unset, is ignored.
pub const DEV_MODE_ENV: &str = "R_FMS_DEV";

/// Prerelease label applied to development-mode builds.
pub const DEV_PRERELEASE: &str = "dev";

/// Raw release string as read from the repository-root `VERSION` file. This
/// must be a valid semantic version.
static RAW_VERSION: &str = include_str!("../../../VERSION");

static CURRENT: Lazy<VersionInfo> = Lazy::new(|| {
    let dev_mode = dev_mode_enabled();
    if dev_mode {
        debug!(env = DEV_MODE_ENV, "dev-mode prerelease override engaged");
    }
    VersionInfo::from_raw(RAW_VERSION, dev_mode)
        .unwrap_or_else(|err| panic!("embedded VERSION file is not usable: {err}"))
});

/// Release metadata for the running build, initialised once per process.
///
/// The instance returned by [`VersionInfo::current`] is derived from the
/// embedded `VERSION` file and never changes after initialisation, so it may
/// be shared freely across threads without synchronisation.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    raw: String,
    release: String,
    prerelease: String,
    semver: Version,
}

impl VersionInfo {
    /// Metadata for the running build.
    ///
    /// The first call validates the embedded `VERSION` file and reads the
    /// [`DEV_MODE_ENV`] flag; an unparseable embedded version halts the
    /// process, since a binary with a broken release string is considered
    /// irrecoverably misconfigured.
    #[must_use]
    pub fn current() -> &'static VersionInfo {
        &CURRENT
    }

    /// Interpret a raw version string.
    ///
    /// The input is trimmed and must parse as a semantic version. The
    /// prerelease label is then chosen with this precedence:
    ///
    /// * `dev_mode` set: the fixed [`DEV_PRERELEASE`] label, regardless of
    ///   any suffix in the input;
    /// * the input contains a `-`: everything after the *first* `-`,
    ///   verbatim (further `-` characters are part of the label);
    /// * otherwise: the empty string, marking a final release.
    pub fn from_raw(raw: &str, dev_mode: bool) -> VersionResult<VersionInfo> {
        let trimmed = raw.trim();
        Version::parse(trimmed)
            .map_err(|source| VersionError::invalid_format(trimmed, source))?;

        let (release, suffix) = match trimmed.split_once('-') {
            Some((release, suffix)) => (release, Some(suffix)),
            None => (trimmed, None),
        };
        let prerelease = if dev_mode {
            DEV_PRERELEASE.to_owned()
        } else {
            suffix.unwrap_or_default().to_owned()
        };

        // Re-parse the release portion; a dash inside build metadata can
        // leave it invalid even when the full string parsed.
        let semver = Version::parse(release)
            .map_err(|source| VersionError::invalid_format(release, source))?;

        Ok(VersionInfo {
            raw: trimmed.to_owned(),
            release: release.to_owned(),
            prerelease,
            semver,
        })
    }

    /// The trimmed, unparsed version string.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Release portion of the version, without any prerelease suffix.
    #[must_use]
    pub fn release(&self) -> &str {
        &self.release
    }

    /// Prerelease label for this build. Empty for final releases; `"dev"`
    /// when the dev-mode flag was engaged at initialisation.
    #[must_use]
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Structured semantic version for the release portion. Comparison and
    /// ordering follow the semver crate.
    #[must_use]
    pub fn semver(&self) -> &Version {
        &self.semver
    }

    /// Release string with the prerelease label re-attached when present.
    ///
    /// The [`fmt::Display`] rendering deliberately excludes the prerelease
    /// label; callers that want the complete display string use this.
    #[must_use]
    pub fn full_version(&self) -> String {
        if self.prerelease.is_empty() {
            self.release.clone()
        } else {
            format!("{}-{}", self.release, self.prerelease)
        }
    }

    /// Returns a concise CLI string combining version and git hash.
    #[must_use]
    pub fn cli_string(&self) -> String {
        format!("{} ({})", self.full_version(), BuildInfo::current().git_sha)
    }

    /// Human readable banner used in logging surfaces.
    #[must_use]
    pub fn banner(&self) -> String {
        format!(
            "R-FMS v{} (git {})",
            self.full_version(),
            BuildInfo::current().git_sha
        )
    }

    /// Extended string containing build metadata suitable for `--version`
    /// flags.
    #[must_use]
    pub fn extended(&self) -> String {
        let build = BuildInfo::current();
        format!(
            "{banner}\nBuilt: {built}\nTarget: {target}\nProfile: {profile}",
            banner = self.banner(),
            built = build.build_timestamp,
            target = build.target,
            profile = build.profile
        )
    }
}

impl fmt::Display for VersionInfo {
    // Renders the parsed release value only; full_version() re-attaches the
    // prerelease label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.semver)
    }
}

/// Release portion of the embedded version, without any prerelease suffix.
#[must_use]
pub fn version() -> &'static str {
    VersionInfo::current().release()
}

/// Prerelease label of the running build; empty for final releases.
#[must_use]
pub fn prerelease() -> &'static str {
    VersionInfo::current().prerelease()
}

/// Parsed semantic version of the release portion.
#[must_use]
pub fn semver() -> &'static Version {
    VersionInfo::current().semver()
}

fn dev_mode_enabled() -> bool {
    std::env::var(DEV_MODE_ENV).is_ok_and(|value| value == "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_release_has_empty_prerelease() {
        let info = VersionInfo::from_raw("1.5.0", false).expect("valid version");
        assert_eq!(info.release(), "1.5.0");
        assert_eq!(info.prerelease(), "");
        assert_eq!(info.full_version(), "1.5.0");
    }

    #[test]
    fn suffix_becomes_prerelease_label() {
        let info = VersionInfo::from_raw("1.5.0-beta1", false).expect("valid version");
        assert_eq!(info.release(), "1.5.0");
        assert_eq!(info.prerelease(), "beta1");
    }

    #[test]
    fn only_first_dash_delimits_the_suffix() {
        let info = VersionInfo::from_raw("1.5.0-rc1-extra", false).expect("valid version");
        assert_eq!(info.release(), "1.5.0");
        assert_eq!(info.prerelease(), "rc1-extra");
    }

    #[test]
    fn dev_mode_overrides_any_suffix() {
        let with_suffix = VersionInfo::from_raw("1.5.0-beta1", true).expect("valid version");
        assert_eq!(with_suffix.prerelease(), DEV_PRERELEASE);

        let without_suffix = VersionInfo::from_raw("1.5.0", true).expect("valid version");
        assert_eq!(without_suffix.prerelease(), DEV_PRERELEASE);
        assert_eq!(without_suffix.release(), "1.5.0");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let info = VersionInfo::from_raw("  1.5.0  \n", false).expect("valid version");
        assert_eq!(info.raw(), "1.5.0");
        assert_eq!(info.release(), "1.5.0");
        assert_eq!(info.prerelease(), "");
    }

    #[test]
    fn invalid_material_is_rejected() {
        for raw in ["not-a-version", "", "1.5", "1.5.0-"] {
            let err = VersionInfo::from_raw(raw, false).expect_err("must reject");
            assert!(
                err.to_string().contains("invalid semantic version"),
                "unexpected error for {raw:?}: {err}"
            );
        }
    }

    #[test]
    fn display_excludes_prerelease() {
        let info = VersionInfo::from_raw("1.5.0-beta1", false).expect("valid version");
        assert_eq!(info.to_string(), "1.5.0");
        assert_eq!(info.full_version(), "1.5.0-beta1");
    }

    #[test]
    fn ordering_is_delegated_to_semver() {
        let older = VersionInfo::from_raw("1.2.3", false).expect("valid version");
        let newer = VersionInfo::from_raw("1.2.4", false).expect("valid version");
        assert!(older.semver() < newer.semver());
    }

    #[test]
    fn constants_are_stable() {
        assert_eq!(VERSION_HEADER, "R-FMS-Version");
        assert_eq!(DEV_MODE_ENV, "R_FMS_DEV");
        assert_eq!(DEV_PRERELEASE, "dev");
    }

    #[test]
    fn current_reflects_embedded_version() {
        let info = VersionInfo::current();
        assert_eq!(info.release(), "0.1.0");
        assert_eq!(info.raw(), info.raw().trim());
        assert_eq!(info.to_string(), "0.1.0");
        // The embedded VERSION carries a suffix, so the label is non-empty no
        // matter whether the dev flag is set in the test environment.
        assert!(!info.prerelease().is_empty());
    }

    #[test]
    fn extended_contains_release() {
        let info = VersionInfo::current();
        let extended = info.extended();
        assert!(extended.contains(info.release()));
        assert!(extended.contains("Built:"));
        assert!(info.cli_string().starts_with(&info.full_version()));
        assert!(info.banner().starts_with("R-FMS v"));
    }

    #[test]
    fn serializes_with_semver_as_string() {
        let info = VersionInfo::from_raw("1.5.0-beta1", false).expect("valid version");
        let value = serde_json::to_value(&info).expect("serializable");
        assert_eq!(value["raw"], "1.5.0-beta1");
        assert_eq!(value["release"], "1.5.0");
        assert_eq!(value["prerelease"], "beta1");
        assert_eq!(value["semver"], "1.5.0");
    }
}
