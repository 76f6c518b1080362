//! Structured logging using **tracing**.
//!
//! Logs always go to stderr so generated source on stdout stays clean and can
//! be redirected straight into a file.

use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Machine-readable JSON lines
    #[default]
    Json,
    /// Human-readable text
    Pretty,
}

impl LogFormat {
    /// Parses a config value, `None` for unrecognised names.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" | "text" => Some(Self::Pretty),
            _ => None,
        }
    }

    /// Like [`LogFormat::parse`], falling back to JSON.
    pub fn from_name(name: Option<&str>) -> Self {
        name.and_then(Self::parse).unwrap_or_default()
    }
}

/// Initializes the global tracing subscriber.
///
/// Call once at startup. `RUST_LOG` controls filtering
/// (e.g. `RUST_LOG=rkenum_core=debug`); without it only warnings and errors
/// are shown.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    // try_init: a second call (e.g. from tests) is ignored instead of panicking
    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_ansi(false)
            .with_current_span(true)
            .try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
}

/// Initializes logging from the `[log] format` config value.
///
/// An unrecognised name falls back to JSON and is reported once the
/// subscriber is installed.
pub fn init_logging_from_config(name: Option<&str>) -> LogFormat {
    let format = LogFormat::from_name(name);
    init_logging(format);
    if let Some(name) = name.filter(|n| LogFormat::parse(n).is_none()) {
        warn!(format = %name, "unrecognised log format in config, using json");
    }
    format
}
