use anyhow::Context;
use fmtlog::utils::for_module;
use fmtlog_kernel::settings::Settings;
use fmtlog_kernel::{args, with_prefix, with_suffix, Logger};
use fmtlog_telemetry::ConsoleLogger;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load fmtlog settings")?;
    fmtlog_telemetry::init(&settings.telemetry)
        .with_context(|| "failed to initialize telemetry")?;

    tracing::info!(env = ?settings.environment, "fmtlog demo starting");

    let console = ConsoleLogger::stdout();

    let log = with_prefix(&console, "prefix: ");
    log.infof("Hello world", &[]);

    let log = with_suffix(log, ", suffix");
    log.warnf("Hello world", &[]);

    let log = with_prefix(log, "after pre: ");
    log.errorf("Hello world", &[]);

    for_module(&console, "demo").infof("{} decorators applied", &args![3]);

    tracing::info!("fmtlog demo complete");
    Ok(())
}
