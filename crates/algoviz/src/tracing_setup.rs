//! Log output for the `algoviz` binary.
//!
//! Traces go to stdout as JSON, so logs always go to stderr. The filter is
//! picked from, in order: `ALGOVIZ_LOG`, `RUST_LOG`, then `-v` / `-q`
//! (default `warn`).

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Crate targets raised to `debug` under `-v`.
const TARGETS: [&str; 4] = ["algoviz", "algoviz_forest", "algoviz_frames", "algoviz_random"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// `-v` beats `-q` when both are given.
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_subscriber(verbosity: Verbosity) {
    let filter = build_env_filter(verbosity);
    let ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(verbosity == Verbosity::Verbose);

    let result = if verbosity == Verbosity::Verbose {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_timer(fmt::time::uptime()))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.without_time().compact())
            .try_init()
    };
    if result.is_err() {
        tracing::debug!("subscriber already installed");
    }
}

fn directives(verbosity: Verbosity) -> String {
    let level = verbosity.default_level();
    if verbosity != Verbosity::Verbose {
        return level.as_str().to_ascii_lowercase();
    }
    let mut out = String::from("warn");
    for target in TARGETS {
        out.push(',');
        out.push_str(target);
        out.push_str("=debug");
    }
    out
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    // Unparseable values fall through to the next source.
    if let Ok(value) = std::env::var("ALGOVIZ_LOG") {
        if let Ok(filter) = EnvFilter::try_new(&value) {
            return filter;
        }
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = verbosity.default_level();
    EnvFilter::try_new(directives(verbosity)).unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}
