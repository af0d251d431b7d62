//! ---
//! fms_section: "02-logging-telemetry"
//! fms_subsection: "module"
//! fms_type: "source"
//! fms_scope: "code"
//! fms_description: "Structured logging adapters and sinks."
//! fms_version: "v0.1.0-alpha1"
//! fms_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Tracing subscriber setup shared by the R-FMS binaries.
//!
//! Diagnostics go to stderr so that command output on stdout stays clean for
//! scripting. The filter and output format are environment-driven; invalid
//! directives degrade to the defaults instead of failing startup.

use std::str::FromStr;

use thiserror::Error;
use tracing::info;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

use r_fms_version::{BuildInfo, VersionInfo};

/// Log filter override, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "R_FMS_LOG";

/// Output format selector consumed by [`init`].
pub const LOG_FORMAT_ENV: &str = "R_FMS_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Available log output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable single-line output.
    #[default]
    Pretty,
    /// Newline-delimited JSON for log shippers.
    StructuredJson,
}

/// Raised when a log format selector does not name a known format.
#[derive(Debug, Error)]
#[error("unknown log format {0:?} (expected \"pretty\" or \"json\")")]
pub struct UnknownLogFormat(String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" | "structured-json" => Ok(LogFormat::StructuredJson),
            other => Err(UnknownLogFormat(other.to_owned())),
        }
    }
}

/// Initialize the tracing subscriber with the format taken from the
/// environment.
///
/// The output format comes from `R_FMS_LOG_FORMAT` (`pretty` or `json`,
/// defaulting to pretty). Unknown values are reported on stderr and the
/// default is used. Safe to call more than once; later calls are no-ops.
pub fn init() {
    init_with_format(format_from_env());
}

/// Initialize the tracing subscriber with an explicit output format.
///
/// The filter follows a cascade: the `R_FMS_LOG` directive wins, then the
/// standard `RUST_LOG` variable, finally defaulting to `info`. All output is
/// written to stderr.
pub fn init_with_format(format: LogFormat) {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|err| {
            eprintln!(
                "invalid {} directive ({}); defaulting to info logging",
                LOG_ENV, err
            );
            EnvFilter::new(DEFAULT_FILTER)
        }),
        Err(_) => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    };

    let fmt_layer = match format {
        LogFormat::StructuredJson => subscriber_fmt::layer()
            .with_target(false)
            .with_timer(subscriber_fmt::time::UtcTime::rfc_3339())
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => subscriber_fmt::layer()
            .with_target(true)
            .with_timer(subscriber_fmt::time::UtcTime::rfc_3339())
            .with_writer(std::io::stderr)
            .boxed(),
    };

    let _ = Registry::default().with(filter).with(fmt_layer).try_init();
}

/// Emit the standard release announcement event for a tool at startup.
pub fn announce_release(tool: &str, info: &VersionInfo) {
    let build = BuildInfo::current();
    info!(
        tool = %tool,
        release = %info.release(),
        prerelease = %info.prerelease(),
        git_sha = %build.git_sha,
        "release metadata loaded"
    );
}

fn format_from_env() -> LogFormat {
    match std::env::var(LOG_FORMAT_ENV) {
        Ok(value) => value.parse().unwrap_or_else(|err| {
            eprintln!(
                "invalid {} value ({}); defaulting to pretty output",
                LOG_FORMAT_ENV, err
            );
            LogFormat::default()
        }),
        Err(_) => LogFormat::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_does_not_panic() {
        init();
        init_with_format(LogFormat::StructuredJson);
    }

    #[test]
    fn format_selectors_parse() {
        assert_eq!("pretty".parse::<LogFormat>().ok(), Some(LogFormat::Pretty));
        assert_eq!(
            "json".parse::<LogFormat>().ok(),
            Some(LogFormat::StructuredJson)
        );
        assert_eq!(
            "structured-json".parse::<LogFormat>().ok(),
            Some(LogFormat::StructuredJson)
        );
        assert_eq!(
            " JSON ".parse::<LogFormat>().ok(),
            Some(LogFormat::StructuredJson)
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = "yaml".parse::<LogFormat>().expect_err("must reject");
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn release_announcement_emits() {
        init();
        let info = VersionInfo::from_raw("1.2.3-rc1", false).expect("valid version");
        announce_release("r-fms-logging-test", &info);
    }
}
