// Boot-time structured logging
// A `log` backend tagging every record with the module that produced it

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use lazy_static::lazy_static;
use spin::Mutex;

#[doc(hidden)]
pub use log::{log as __log, Level as __Level};

/// Number of records kept by the in-memory output
pub const MEMORY_LOG_CAPACITY: usize = 1024;

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Log entry structure
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub module: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, module: &str, message: String) -> Self {
        Self {
            level,
            module: module.to_string(),
            message,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:5} {:8} {}", self.level, self.module, self.message)
    }
}

/// Log output targets
pub trait LogOutput: Send {
    fn write_log(&mut self, entry: &LogEntry);
    fn flush(&mut self) {}
    fn name(&self) -> &str;
}

/// Bounded in-memory ring of recent entries
pub struct MemoryLogOutput {
    buffer: VecDeque<LogEntry>,
    max_entries: usize,
}

impl MemoryLogOutput {
    pub fn new(max_entries: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.buffer.iter().cloned().collect()
    }
}

impl LogOutput for MemoryLogOutput {
    fn write_log(&mut self, entry: &LogEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.buffer.len() >= self.max_entries {
            self.buffer.pop_front();
        }
        self.buffer.push_back(entry.clone());
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Fan-out logger state
pub struct Logger {
    outputs: Vec<Box<dyn LogOutput>>,
    memory: MemoryLogOutput,
    min_level: LogLevel,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            outputs: Vec::new(),
            memory: MemoryLogOutput::new(MEMORY_LOG_CAPACITY),
            min_level: LogLevel::Debug,
            enabled: true,
        }
    }

    pub fn add_output(&mut self, output: Box<dyn LogOutput>) {
        self.outputs.push(output);
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn accepts(&self, level: LogLevel) -> bool {
        self.enabled && level >= self.min_level
    }

    pub fn log(&mut self, entry: LogEntry) {
        if !self.accepts(entry.level) {
            return;
        }
        self.memory.write_log(&entry);
        for output in self.outputs.iter_mut() {
            output.write_log(&entry);
        }
    }

    pub fn flush(&mut self) {
        for output in self.outputs.iter_mut() {
            output.flush();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    pub static ref LOGGER: Mutex<Logger> = Mutex::new(Logger::new());
}

/// `log` facade backend forwarding into [`LOGGER`]
pub struct BootLogger;

impl log::Log for BootLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        LOGGER.lock().accepts(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let entry = LogEntry::new(record.level().into(), record.target(), format!("{}", record.args()));
        LOGGER.lock().log(entry);
    }

    fn flush(&self) {
        LOGGER.lock().flush();
    }
}

static BOOT_LOGGER: BootLogger = BootLogger;

/// Install [`BootLogger`] as the global `log` backend.
///
/// Safe to call more than once; only the first call installs the backend.
pub fn init_logging() {
    if log::set_logger(&BOOT_LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

/// Register an additional output (serial console, firmware text output...)
pub fn add_output(output: Box<dyn LogOutput>) {
    LOGGER.lock().add_output(output);
}

/// Set minimum log level
pub fn set_log_level(level: LogLevel) {
    LOGGER.lock().set_min_level(level);
}

/// Enable or disable logging
pub fn set_logging_enabled(enabled: bool) {
    LOGGER.lock().set_enabled(enabled);
}

/// Get recent log entries from memory buffer
pub fn recent_logs() -> Vec<LogEntry> {
    LOGGER.lock().memory.entries()
}

/// Logging macros
#[macro_export]
macro_rules! log_trace {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::__log!(target: $module, $crate::logging::__Level::Trace, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::__log!(target: $module, $crate::logging::__Level::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::__log!(target: $module, $crate::logging::__Level::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::__log!(target: $module, $crate::logging::__Level::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($module:expr, $($arg:tt)*) => {
        $crate::logging::__log!(target: $module, $crate::logging::__Level::Error, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_output_is_bounded() {
        let mut output = MemoryLogOutput::new(2);
        for i in 0..3 {
            output.write_log(&LogEntry::new(LogLevel::Info, "gma", format!("entry {}", i)));
        }
        let entries = output.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "entry 1");
        assert_eq!(entries[1].message, "entry 2");
    }

    #[test]
    fn test_logger_filters_below_min_level() {
        let mut logger = Logger::new();
        logger.set_min_level(LogLevel::Warn);
        logger.log(LogEntry::new(LogLevel::Debug, "gma", "dropped".to_string()));
        logger.log(LogEntry::new(LogLevel::Error, "gma", "kept".to_string()));
        let entries = logger.memory.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "kept");
    }

    #[test]
    fn test_macros_reach_memory_output() {
        init_logging();
        log_info!("log-test", "marker {}", 0x5a5a);
        assert!(recent_logs()
            .iter()
            .any(|e| e.module == "log-test" && e.message == "marker 23130"));
    }

    #[test]
    fn test_entry_display() {
        let entry = LogEntry::new(LogLevel::Warn, "devprop", "x".to_string());
        assert_eq!(format!("{}", entry), "WARN  devprop  x");
    }
}
