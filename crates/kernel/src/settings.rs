use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::Deserialize;

use crate::formatter::Formatter;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "FMTLOG_ENV";
const CONFIG_DIR_ENV: &str = "FMTLOG_CONFIG_DIR";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub sink: Sink,
    #[serde(default)]
    pub decorations: Vec<DecorationSettings>,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .map(|cwd| cwd.join("config"))
                .with_context(|| "unable to resolve current directory")?,
        };

        Self::load_from(config_dir, &environment)
    }

    /// Load from an explicit config directory and environment name.
    pub fn load_from(config_dir: impl Into<PathBuf>, environment: &str) -> anyhow::Result<Self> {
        Self::load_with(config_dir, environment, None)
    }

    /// Like [`Settings::load_from`], reading `FMTLOG_*` overrides from `vars`
    /// instead of the process environment when it is `Some`.
    pub fn load_with(
        config_dir: impl Into<PathBuf>,
        environment: &str,
        vars: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let environment: Environment = environment.parse()?;
        let config_dir = config_dir.into();

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment_name(&environment)));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix("FMTLOG")
                    .prefix_separator("_")
                    .separator("__")
                    .source(vars),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        settings.environment = environment;

        tracing::debug!(
            env = ?settings.environment,
            decorations = settings.decorations.len(),
            "fmtlog settings loaded"
        );

        Ok(settings)
    }

    /// Configured decorations as formatters, first entry innermost.
    pub fn formatters(&self) -> impl Iterator<Item = Formatter> + '_ {
        self.decorations.iter().map(Formatter::from)
    }
}

fn environment_name(environment: &Environment) -> &'static str {
    match environment {
        Environment::Local => "local",
        Environment::Staging => "staging",
        Environment::Production => "production",
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default = "TelemetrySettings::default_filter")]
    pub filter: String,
}

impl TelemetrySettings {
    fn default_filter() -> String {
        "info".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            filter: Self::default_filter(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Which base logger a decoration chain terminates in.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sink {
    #[default]
    Console,
    Tracing,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DecorationKind {
    Prefix,
    Suffix,
}

/// One `[[decorations]]` entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DecorationSettings {
    pub kind: DecorationKind,
    #[serde(default)]
    pub text: String,
}

impl From<&DecorationSettings> for Formatter {
    fn from(decoration: &DecorationSettings) -> Self {
        match decoration.kind {
            DecorationKind::Prefix => Formatter::prefix(decoration.text.clone()),
            DecorationKind::Suffix => Formatter::suffix(decoration.text.clone()),
        }
    }
}
