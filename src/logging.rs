//! Logging setup and the tracing-backed step tracer.

use crate::config::LoggingConfig;
use dsa_kernels::Tracer;
use std::fmt::Debug;
use thiserror::Error;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive added on top of any filter when step traces are requested.
pub const STEP_DIRECTIVE: &str = "dsa_drills=debug";

#[derive(Debug, Error)]
#[error("Failed to initialize logging: {0}")]
pub struct LoggingError(String);

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. `verbose` raises the level to
/// `debug` and adds [`STEP_DIRECTIVE`] on top of `RUST_LOG`, so step traces
/// stay visible under a quieter global filter. Logs go to stderr so that
/// results on stdout stay parseable.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<(), LoggingError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(rust_log.as_deref(), &config.level, verbose)?;

    if config.json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| LoggingError(e.to_string()))
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggingError(e.to_string()))
    }
}

fn build_filter(
    rust_log: Option<&str>,
    level: &str,
    verbose: bool,
) -> Result<EnvFilter, LoggingError> {
    let level = if verbose { "debug" } else { level };
    let filter = match rust_log.and_then(|spec| EnvFilter::try_new(spec).ok()) {
        Some(filter) => filter,
        None => EnvFilter::try_new(level).map_err(|e| LoggingError(e.to_string()))?,
    };
    if !verbose {
        return Ok(filter);
    }

    let steps = STEP_DIRECTIVE
        .parse::<Directive>()
        .map_err(|e| LoggingError(e.to_string()))?;
    Ok(filter.add_directive(steps))
}

/// Forwards algorithm steps to `tracing` at debug level.
#[derive(Debug, Clone)]
pub struct LogTracer {
    drill: &'static str,
    steps: usize,
}

impl LogTracer {
    pub fn new(drill: &'static str) -> Self {
        Self { drill, steps: 0 }
    }

    /// Steps forwarded so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Tracer for LogTracer {
    fn step(&mut self, label: &'static str, state: &dyn Debug) {
        self.steps += 1;
        tracing::debug!(drill = self.drill, step = self.steps, label, state = ?state);
    }
}
