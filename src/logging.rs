//! Logger initialization.
//!
//! Diagnostics go to stderr through `env_logger` so they never mix with the
//! record groups printed on stdout.

use clap::ValueEnum;
use colored::*;
use log::LevelFilter;
use std::io::Write;

use crate::models::InitializationError;

/// Logging verbosity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Initializes the logger with the specified level.
///
/// `RUST_LOG` is read first; `level` then overrides it for this crate and
/// as the global default. The resolver crates stay at `warn` so that their
/// per-query chatter does not drown the lookup failures we report ourselves.
///
/// # Errors
///
/// Returns `InitializationError::Logger` if a logger was already installed.
pub fn init_logger(level: LevelFilter) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    configure(&mut builder, level);
    builder.try_init()?;
    Ok(())
}

/// Level filters and the colored plain format, applied on top of `builder`
fn configure(builder: &mut env_logger::Builder, level: LevelFilter) {
    builder.filter_level(level);
    builder.filter_module("trust_dns_proto", level.min(LevelFilter::Warn));
    builder.filter_module("trust_dns_resolver", level.min(LevelFilter::Warn));
    builder.filter_module("mailserver_check", level);

    builder.format(|buf, record| {
        let level = record.level();
        let colored_level = match level {
            log::Level::Error => level.to_string().red(),
            log::Level::Warn => level.to_string().yellow(),
            log::Level::Info => level.to_string().green(),
            log::Level::Debug => level.to_string().blue(),
            log::Level::Trace => level.to_string().purple(),
        };

        writeln!(
            buf,
            "{} [{}] {}",
            record.target().cyan(),
            colored_level,
            record.args()
        )
    });
}
