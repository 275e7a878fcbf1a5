//! Logger setup for the binaries. The library itself only talks to the `log` facade.
//!
//! The level comes from the `DSLAB_LOG` environment variable (`off`, `error`, `warn`, `info`,
//! `debug` or `trace`, case insensitive) and defaults to `warn`. Logs go to stderr so they never
//! mix with results written to stdout.

use std::env;

use log::{warn, LevelFilter, ParseLevelError, SetLoggerError};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "DSLAB_LOG";

/// Level used when `DSLAB_LOG` is unset or unreadable.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Parses a `DSLAB_LOG` value. No value means [`DEFAULT_LEVEL`].
pub fn parse_level(value: Option<&str>) -> Result<LevelFilter, ParseLevelError> {
    match value {
        Some(value) => value.trim().parse(),
        None => Ok(DEFAULT_LEVEL),
    }
}

/// Installs a stderr logger at the level named by `DSLAB_LOG`.
///
/// A value that isn't a level is logged as a warning and the default level is used instead.
pub fn init_from_env() -> Result<(), SetLoggerError> {
    let value = env::var(LOG_ENV).ok();
    let (level, invalid) = match parse_level(value.as_deref()) {
        Ok(level) => (level, None),
        Err(_) => (DEFAULT_LEVEL, value),
    };

    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    if let Some(invalid) = invalid {
        warn!("Ignoring invalid {} value `{}`", LOG_ENV, invalid);
    }
    Ok(())
}
