use anyhow::Context;
use clap::{Parser, ValueEnum};
use fmtlog_kernel::settings::{Settings, Sink};
use fmtlog_kernel::{decorate_all, Formatter, Level, Logger, Value};
use fmtlog_telemetry::{ConsoleLogger, TracingLogger};

/// Emit one log line through a chain of prefix/suffix decorators.
#[derive(Debug, Parser)]
#[command(name = "fmtlog", version)]
struct Cli {
    /// Logging method to call.
    #[arg(long, value_enum, default_value_t = LevelArg::Info)]
    level: LevelArg,

    /// Base logger; overrides the configured sink.
    #[arg(long, value_enum)]
    sink: Option<SinkArg>,

    /// `prefix:TEXT` or `suffix:TEXT`, applied after configured decorations.
    /// Each later wrap is outer to the ones before it.
    #[arg(long = "wrap", value_name = "KIND:TEXT")]
    wraps: Vec<Formatter>,

    /// Format string; `{}` placeholders take ARGS in order.
    format: String,

    #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
    args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LevelArg {
    Info,
    Warn,
    Error,
}

impl From<LevelArg> for Level {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Info => Level::Info,
            LevelArg::Warn => Level::Warn,
            LevelArg::Error => Level::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SinkArg {
    Console,
    Tracing,
}

impl From<SinkArg> for Sink {
    fn from(sink: SinkArg) -> Self {
        match sink {
            SinkArg::Console => Sink::Console,
            SinkArg::Tracing => Sink::Tracing,
        }
    }
}

fn base_logger(sink: Sink) -> Box<dyn Logger> {
    match sink {
        Sink::Console => Box::new(ConsoleLogger::stdout()),
        Sink::Tracing => Box::new(TracingLogger::new()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load fmtlog settings")?;
    fmtlog_telemetry::init(&settings.telemetry)
        .with_context(|| "failed to initialize telemetry")?;

    let sink = cli.sink.map(Sink::from).unwrap_or(settings.sink);
    tracing::debug!(
        env = ?settings.environment,
        sink = ?sink,
        configured = settings.decorations.len(),
        wraps = cli.wraps.len(),
        "building decoration chain"
    );

    let logger = decorate_all(base_logger(sink), settings.formatters().chain(cli.wraps));
    let args: Vec<Value> = cli.args.into_iter().map(Value::from).collect();
    logger.logf(cli.level.into(), &cli.format, &args);

    Ok(())
}
