//! Console Logger
//!
//! `log` backend for WASM frontends. Records go to the browser console
//! (stderr when running natively) and the most recent lines are kept in a
//! circular buffer that the app's activity panel reads through `global()`.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger writing to the console and a bounded history
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    history: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            history: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.history.lock() {
            Ok(history) => history.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn remember(&self, line: String) {
        let mut history = match self.history.lock() {
            Ok(history) => history,
            Err(poisoned) => poisoned.into_inner(),
        };
        if history.len() == self.capacity {
            history.pop_front();
        }
        history.push_back(line);
    }
}

/// Format a record as a single console line
pub fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] {}: {}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug => web_sys::console::log_1(&value),
        Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Subsequent calls return the existing instance's error.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(logger.level());
    Ok(logger)
}

/// The installed logger, if `init` has run
pub fn global() -> Option<&'static ConsoleLogger> {
    LOGGER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("tests")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_history_drops_oldest_when_full() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 2);
        record(&logger, Level::Info, "one");
        record(&logger, Level::Info, "two");
        record(&logger, Level::Info, "three");

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("tests: two"));
        assert!(lines[1].ends_with("tests: three"));
    }

    #[test]
    fn test_records_above_level_are_skipped() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        record(&logger, Level::Debug, "noise");
        record(&logger, Level::Error, "boom");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[ERROR]"));
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        record(&logger, Level::Info, "a");
        record(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }
}
