//! Logging setup
use crate::error::{HarnessError, Result};
use std::str::FromStr;
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable with the default filter directive
pub const GREENAPI_LOG: &str = "GREENAPI_LOG";
/// Environment variable selecting [`LogFormat`]
pub const GREENAPI_LOG_FORMAT: &str = "GREENAPI_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(HarnessError::Config(format!("unknown log format `{other}`"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub filter_default: String,
    /// Extra directives appended after the default one
    pub directives: Vec<String>,
    pub format: LogFormat,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter_default: "info".to_string(),
            directives: vec![
                "hyper=info".to_string(),
                "hyper_util=info".to_string(),
                "reqwest=info".to_string(),
            ],
            format: LogFormat::Pretty,
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Defaults overridden by `GREENAPI_LOG` and `GREENAPI_LOG_FORMAT`
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        if let Ok(filter) = std::env::var(GREENAPI_LOG) {
            cfg.filter_default = filter;
        }
        if let Ok(format) = std::env::var(GREENAPI_LOG_FORMAT) {
            cfg.format = format.parse()?;
        }
        Ok(cfg)
    }
}

/// Create a filter for the subscriber
fn fmt_filter(cfg: &LogConfig) -> Result<EnvFilter> {
    let mut filter = EnvFilter::try_new(&cfg.filter_default)?;
    for directive in &cfg.directives {
        filter = filter.add_directive(directive.parse()?);
    }
    Ok(filter)
}

/// Install the global subscriber configured from the environment
pub fn init() -> Result<()> {
    init_with(&LogConfig::from_env()?)
}

/// Install the global subscriber. Calling it again after a subscriber is set is a no-op.
pub fn init_with(cfg: &LogConfig) -> Result<()> {
    let layer = match cfg.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(fmt_filter(cfg)?)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_ansi(cfg.ansi)
            .with_writer(std::io::stderr)
            .with_line_number(true)
            .with_filter(fmt_filter(cfg)?)
            .boxed(),
    };

    if tracing_subscriber::registry().with(layer).try_init().is_err() {
        debug!("Global subscriber already installed");
    }
    Ok(())
}
