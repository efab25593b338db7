use std::{
    io::{self, Write as _},
    sync::{OnceLock, RwLock},
};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    // default configuration
    let level = log::Level::Warn;

    LOGGER.get_or_init(|| AppLogger::new(level))
}

/// Installs the logger, `verbosity` raises the level above the default `warn`.
pub fn init(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level_for(verbosity));

    log::set_logger(logger)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

pub fn level_for(verbosity: u8) -> log::Level {
    match verbosity {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub level: log::Level,
    pub message: String,
    pub source: String,
}

impl Message {
    fn from_record(record: &Record) -> Self {
        Self {
            level: record.level(),
            message: record.args().to_string(),
            source: record.module_path().unwrap_or("unknown").to_string(),
        }
    }

    pub fn format(&self) -> String {
        format!("[{}] {} -> {}", self.level, self.source, self.message)
    }
}

/// Writes log lines to stderr, stdout only ever carries the maze.
pub struct AppLogger {
    min_level: RwLock<log::Level>,
}

impl AppLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::Level {
        *self
            .min_level
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self
            .min_level
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = level;
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = Message::from_record(record).format();
            // nowhere left to report a failing stderr
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
