use std::io::Write;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(test)]
use std::sync::Mutex;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

/// Default level when the environment does not name one.
const DEFAULT_LEVEL: Level = Level::Warn;

enum LogTarget {
    Stderr,
    #[cfg(test)]
    Memory(Mutex<Vec<String>>),
}

pub struct Logger {
    level: Level,
    target: LogTarget,
}

impl Logger {
    fn stderr(level: Level) -> Self {
        Logger {
            level,
            target: LogTarget::Stderr,
        }
    }
}

/// Render one record as a single log line (without trailing newline).
fn format_record(record: &Record<'_>) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!(
        "{} {:<5} [{}] {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(record);
        match &self.target {
            LogTarget::Stderr => {
                // A closed stderr is not worth panicking over.
                let _ = writeln!(std::io::stderr().lock(), "{line}");
            }
            #[cfg(test)]
            LogTarget::Memory(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(line);
                }
            }
        }
    }

    fn flush(&self) {
        if matches!(self.target, LogTarget::Stderr) {
            let _ = std::io::stderr().flush();
        }
    }
}

/// Parse a level name the way `STRUTIL_LOG_LEVEL` is interpreted.
///
/// Unknown names and `off` fall back to the default level.
fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(DEFAULT_LEVEL)
}

fn get_level_from_env() -> Level {
    let value = std::env::var(PROGRAM_LOG_LEVEL).ok();
    parse_level(value.as_deref())
}

/// Install the stderr logger at the level named by `STRUTIL_LOG_LEVEL`.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(get_level_from_env())
}

/// Install the stderr logger at an explicit level.
///
/// Only the first call installs a logger; later calls are no-ops, whatever
/// level they pass.
pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();
    static INSTALLED: AtomicBool = AtomicBool::new(false);

    let logger = LOGGER.get_or_init(|| Logger::stderr(level));
    install(logger, &INSTALLED, |logger| {
        log::set_logger(logger)?;
        log::set_max_level(logger.level.to_level_filter());
        Ok(())
    })
}

/// Run `set` unless an earlier call already succeeded. `installed` is only
/// marked once `set` returns `Ok`, so a failed attempt can be retried.
fn install<E>(
    logger: &'static Logger,
    installed: &AtomicBool,
    set: impl FnOnce(&'static Logger) -> Result<(), E>,
) -> Result<(), E> {
    if installed.load(Ordering::Acquire) {
        return Ok(());
    }

    set(logger)?;
    installed.store(true, Ordering::Release);
    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
