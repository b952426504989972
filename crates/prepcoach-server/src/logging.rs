//! Logging setup.
//!
//! Everything logs under `prepcoach::<area>` with areas `startup`, `api`,
//! `session`, `store` and `router`. Output goes to stderr so one-shot
//! replies on stdout stay clean. `RUST_LOG`, when set, replaces the
//! directives built here.

use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// How chatty the default filter is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    /// The loudest flag wins, except `--quiet`, which beats them all.
    pub fn from_flags(verbose: bool, debug: bool, trace: bool, quiet: bool) -> Self {
        match (quiet, trace, debug, verbose) {
            (true, ..) => Verbosity::Quiet,
            (_, true, ..) => Verbosity::Trace,
            (_, _, true, _) => Verbosity::Debug,
            (_, _, _, true) => Verbosity::Verbose,
            _ => Verbosity::Normal,
        }
    }

    fn directives(self) -> &'static str {
        match self {
            Verbosity::Quiet => "prepcoach=warn,tower_http=error",
            // Session lifecycle and requests; routing and store chatter only when it goes wrong
            Verbosity::Normal => {
                "prepcoach::startup=info,prepcoach::api=info,prepcoach::session=info,\
                 prepcoach::store=warn,prepcoach::router=warn,tower_http=warn"
            }
            Verbosity::Verbose => "prepcoach=info,tower_http=info",
            Verbosity::Debug => "prepcoach=debug,tower_http=debug",
            Verbosity::Trace => "prepcoach=trace,tower_http=trace",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub verbosity: Verbosity,
    /// Extra `target=level` directives, already prefixed.
    pub overrides: Vec<String>,
    pub format: LogFormat,
}

impl LogConfig {
    /// `overrides` entries look like `router=debug`, may be comma-separated,
    /// and get a `prepcoach::` prefix unless they already name a full target.
    /// Entries with an unknown level are dropped.
    pub fn new(verbosity: Verbosity, overrides: &[String], format: LogFormat) -> Self {
        let overrides = overrides
            .iter()
            .flat_map(|arg| arg.split(','))
            .filter_map(override_directive)
            .collect();
        Self {
            verbosity,
            overrides,
            format,
        }
    }

    pub fn directives(&self) -> String {
        std::iter::once(self.verbosity.directives().to_string())
            .chain(self.overrides.iter().cloned())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn build_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(self.directives()))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

fn override_directive(part: &str) -> Option<String> {
    let (target, level) = part.split_once('=')?;
    let target = target.trim();
    let level: Level = level.trim().parse().ok()?;

    let target = if target.contains("::") || target == "tower_http" {
        target.to_string()
    } else {
        format!("prepcoach::{}", target)
    };
    Some(format!("{}={}", target, level.as_str().to_lowercase()))
}

pub fn init(config: &LogConfig) {
    let registry = tracing_subscriber::registry().with(config.build_filter());
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    match config.format {
        LogFormat::Text => registry.with(layer).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}
