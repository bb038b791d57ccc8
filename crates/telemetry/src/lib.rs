//! Base loggers and the `tracing` subscriber bootstrap.

use anyhow::Context;
use fmtlog_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::EnvFilter;

mod bridge;
mod console;

pub use bridge::TracingLogger;
pub use console::ConsoleLogger;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter; an unparsable `RUST_LOG` is an
/// error rather than a silent fallback. Returns `Ok(false)` when a
/// subscriber was already installed.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<bool> {
    let filter = build_filter(std::env::var("RUST_LOG").ok(), &settings.filter)?;
    Ok(install(filter, &settings.log_format))
}

fn install(filter: EnvFilter, log_format: &LogFormat) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match log_format {
        LogFormat::Pretty => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(
            target: "fmtlog-telemetry",
            format = ?log_format,
            "telemetry initialized"
        );
    }

    installed
}

fn build_filter(env: Option<String>, configured: &str) -> anyhow::Result<EnvFilter> {
    if let Some(directives) = env.filter(|d| !d.trim().is_empty()) {
        return EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid RUST_LOG filter '{}'", directives));
    }

    EnvFilter::try_new(configured).with_context(|| format!("invalid log filter '{}'", configured))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_is_used_without_env() {
        let filter = build_filter(None, "fmtlog=debug").unwrap();
        assert_eq!(filter.to_string(), "fmtlog=debug");
    }

    #[test]
    fn env_filter_takes_precedence() {
        let filter = build_filter(Some("warn".to_string()), "debug").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn invalid_env_filter_is_reported() {
        let err = build_filter(Some("fmtlog=loud".to_string()), "info").unwrap_err();
        assert!(err.to_string().contains("invalid RUST_LOG filter 'fmtlog=loud'"));
    }

    #[test]
    fn blank_env_filter_uses_configured() {
        let filter = build_filter(Some("  ".to_string()), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn invalid_configured_filter_is_an_error() {
        let err = build_filter(None, "fmtlog=loud").unwrap_err();
        assert!(err.to_string().contains("invalid log filter"));
    }

    #[test]
    fn second_init_reports_existing_subscriber() {
        let settings = TelemetrySettings::default();
        let filter = || build_filter(None, &settings.filter).unwrap();
        install(filter(), &settings.log_format);
        assert!(!install(filter(), &settings.log_format));
    }
}
