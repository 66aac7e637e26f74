//! Ring Logger
//!
//! `log` backend that forwards every record to the platform sink (browser
//! console on wasm32, stderr elsewhere) and keeps the most recent lines in a
//! circular buffer.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Number of lines kept in memory
    pub capacity: usize,
    /// Most verbose level that is recorded
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 256,
            level: LevelFilter::Info,
        }
    }
}

/// One formatted log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: String,
    pub level: Level,
    pub app_name: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {:<5} {}", self.timestamp, self.app_name, self.level, self.message)
    }
}

/// Fixed-capacity buffer that drops the oldest line when full
#[derive(Debug)]
pub struct RingBuffer {
    capacity: usize,
    lines: VecDeque<LogLine>,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, line: LogLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

struct RingLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = LogLine {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            app_name: self.app_name.clone(),
            message: record.args().to_string(),
        };
        sink::emit(&line);

        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RingLogger> = OnceLock::new();

/// Install the logger; only the first call takes effect
pub fn init_logger(app_name: &str, config: LoggerConfig) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RingLogger {
        app_name: app_name.to_string(),
        level: config.level,
        buffer: Mutex::new(RingBuffer::new(config.capacity)),
    });
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}

/// Lines currently held by the installed logger, oldest first
///
/// Empty while a record is being written, so a panic hook can call it
/// without deadlocking.
pub fn recent_lines() -> Vec<LogLine> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.try_lock().ok().map(|buffer| buffer.lines()))
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
mod sink {
    use super::LogLine;
    use log::Level;

    pub fn emit(line: &LogLine) {
        let text = line.to_string();
        match line.level {
            Level::Error => web_sys::console::error_1(&text.into()),
            Level::Warn => web_sys::console::warn_1(&text.into()),
            Level::Info => web_sys::console::info_1(&text.into()),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&text.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use super::LogLine;

    pub fn emit(line: &LogLine) {
        eprintln!("{}", line);
    }
}
