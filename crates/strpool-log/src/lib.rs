//! Minimal, zero-dependency leveled logging for the `strpool` workspace.
//!
//! Provides a global logger with an atomically adjustable minimum level,
//! colored terminal output, and macros that capture the calling module path.
//! The level can also be picked up from the `STRPOOL_LOG` environment
//! variable on first use.
//!
//! # Example
//!
//! ```
//! use strpool_log::{info, trace, Level};
//!
//! strpool_log::set_level(Level::Trace);
//!
//! let chunks = 3;
//! info!("pool holds {} chunks", chunks);
//! trace!("growth details: {:?}", (chunks, 4096));
//! ```

use std::fmt::Arguments;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

/// Log levels, ordered from most severe (`Error`) to most verbose (`Trace`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Critical failures.
    Error = 0,
    /// Potentially harmful situations.
    Warn = 1,
    /// High-level progress messages.
    Info = 2,
    /// Diagnostic detail.
    Debug = 3,
    /// Fine-grained tracing.
    Trace = 4,
}

impl Level {
    /// ANSI color escape for this level.
    const fn color_code(self) -> &'static str {
        match self {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[32m",
            Level::Debug => "\x1b[36m",
            Level::Trace => "\x1b[35m",
        }
    }

    /// Uppercase name of this level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    const fn from_u8(raw: u8) -> Level {
        match raw {
            0 => Level::Error,
            1 => Level::Warn,
            3 => Level::Debug,
            4 => Level::Trace,
            _ => Level::Info,
        }
    }
}

impl FromStr for Level {
    type Err = String;

    /// Parses a level name, case-insensitively.
    ///
    /// ```
    /// use strpool_log::Level;
    ///
    /// assert_eq!("error".parse(), Ok(Level::Error));
    /// assert_eq!("INFO".parse(), Ok(Level::Info));
    /// assert!("loud".parse::<Level>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ERROR" => Ok(Level::Error),
            "WARN" => Ok(Level::Warn),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "TRACE" => Ok(Level::Trace),
            _ => Err(format!("unknown log level: {s}")),
        }
    }
}

/// The global logger. Holds only the minimum level, stored atomically so
/// filtering needs no locking.
pub struct Logger {
    level: AtomicU8,
}

impl Logger {
    const fn new(level: Level) -> Self {
        Logger {
            level: AtomicU8::new(level as u8),
        }
    }

    /// Sets the minimum level; messages below it are discarded.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Returns the current minimum level.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Whether a message at `level` would currently be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level as u8 <= self.level.load(Ordering::Relaxed)
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the global logger, initializing it on first use.
///
/// The initial level is taken from the `STRPOOL_LOG` environment variable
/// when set to a valid level name, and defaults to [`Level::Info`].
pub fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(|| {
        let level = std::env::var("STRPOOL_LOG")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Level::Info);
        Logger::new(level)
    })
}

/// Sets the minimum level on the global logger.
pub fn set_level(level: Level) {
    get_logger().set_level(level);
}

/// Emits a formatted record. Called by the macros after the level check.
#[doc(hidden)]
pub fn __log_with_target(level: Level, target: &str, args: Arguments) {
    const RESET: &str = "\x1b[0m";

    if !get_logger().enabled(level) {
        return;
    }

    let color = level.color_code();
    eprintln!("{color}[{}]{RESET} {target}: {args}", level.as_str());
}

/// Logs at an explicit level, capturing the calling module path.
#[macro_export]
macro_rules! log {
    (level: $level:expr, $($arg:tt)*) => {
        {
            if $crate::get_logger().enabled($level) {
                $crate::__log_with_target(
                    $level,
                    module_path!(),
                    format_args!($($arg)*)
                );
            }
        }
    };
}

/// Logs at the Error level.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Error, $($arg)*)
    };
}

/// Logs at the Warn level.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Warn, $($arg)*)
    };
}

/// Logs at the Info level.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Info, $($arg)*)
    };
}

/// Logs at the Debug level.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Debug, $($arg)*)
    };
}

/// Logs at the Trace level.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Trace, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ordering() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Info);
        assert!(Level::Info < Level::Debug);
        assert!(Level::Debug < Level::Trace);
    }

    #[test]
    fn level_parsing() {
        assert_eq!("error".parse(), Ok(Level::Error));
        assert_eq!("WARN".parse(), Ok(Level::Warn));
        assert_eq!("Info".parse(), Ok(Level::Info));
        assert_eq!("debug".parse(), Ok(Level::Debug));
        assert_eq!("TRACE".parse(), Ok(Level::Trace));
        assert!("quiet".parse::<Level>().is_err());
    }

    #[test]
    fn level_names() {
        assert_eq!(Level::Error.as_str(), "ERROR");
        assert_eq!(Level::Trace.as_str(), "TRACE");
    }

    #[test]
    fn logger_filtering() {
        let logger = Logger::new(Level::Info);

        assert!(logger.enabled(Level::Error));
        assert!(logger.enabled(Level::Info));
        assert!(!logger.enabled(Level::Debug));

        logger.set_level(Level::Trace);
        assert!(logger.enabled(Level::Trace));

        logger.set_level(Level::Error);
        assert!(!logger.enabled(Level::Warn));
    }

    // Single test for everything touching the global logger, so parallel
    // test threads cannot race on its level.
    #[test]
    fn global_logger_and_macros() {
        set_level(Level::Debug);
        assert_eq!(get_logger().level(), Level::Debug);

        let a = get_logger();
        let b = get_logger();
        a.set_level(Level::Warn);
        assert_eq!(b.level(), Level::Warn);

        set_level(Level::Info);
        info!("pool ready");
        debug!("hidden at info level: {:?}", [1, 2, 3]);

        set_level(Level::Trace);
        trace!("visible again");
    }
}
