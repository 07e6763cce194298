//! Stderr logger for the `log` facade.
//!
//! The level comes from `STRAND_LOG` (`off`, `error`, `warn`, `info`, `debug`,
//! `trace`), defaulting to `warn`.

use std::sync::OnceLock;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

pub const LOG_ENV: &str = "STRAND_LOG";

static LOGGER: StderrLogger = StderrLogger;
static ENV_LEVEL: OnceLock<LevelFilter> = OnceLock::new();

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse().ok()
}

/// Level requested through the environment, read once
pub fn env_level() -> LevelFilter {
    *ENV_LEVEL.get_or_init(|| match std::env::var(LOG_ENV) {
        Ok(raw) => parse_level(&raw).unwrap_or_else(|| {
            eprintln!("[strand] invalid {} value {:?}, using warn", LOG_ENV, raw);
            LevelFilter::Warn
        }),
        Err(_) => LevelFilter::Warn,
    })
}

/// Install the logger. `verbose` raises the level to at least `debug`.
pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    let level = if verbose {
        env_level().max(LevelFilter::Debug)
    } else {
        env_level()
    };
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
