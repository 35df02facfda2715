use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;

use crate::{config::CONFIG, error::RangeError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Verbose,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    fn as_ansi(self) -> &'static str {
        match self {
            LogLevel::Debug => "\x1b[38;5;6m",
            LogLevel::Verbose => "\x1b[38;5;8m",
            LogLevel::Info => "\x1b[39m",
            LogLevel::Warn => "\x1b[38;5;3m",
            LogLevel::Error => "\x1b[38;5;1m",
            LogLevel::Fatal => "\x1b[38;5;0;48;5;1m",
        }
    }

    fn as_pre(self) -> &'static str {
        match self {
            LogLevel::Debug => "[DBG] ",
            LogLevel::Verbose => "[VRB] ",
            LogLevel::Info => "[INF] ",
            LogLevel::Warn => "[WRN] ",
            LogLevel::Error => "[ERR] ",
            LogLevel::Fatal => "[FTL] ",
        }
    }
}

/// Accepts the level names case-insensitively, as well as their three letter prefixes
impl FromStr for LogLevel {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "verbose" | "vrb" => Ok(LogLevel::Verbose),
            "info" | "inf" => Ok(LogLevel::Info),
            "warn" | "wrn" => Ok(LogLevel::Warn),
            "error" | "err" => Ok(LogLevel::Error),
            "fatal" | "ftl" => Ok(LogLevel::Fatal),
            _ => Err(RangeError::Parse(s.into(), "unknown log level")),
        }
    }
}

const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Copy, Clone)]
pub struct Logger {
    use_ansi_color: bool,
    minimum_level: LogLevel,
}

lazy_static! {
    static ref LOGGER: Logger = Logger::new(CONFIG.use_ansi_color, CONFIG.minimum_level);
}

/// get the process wide logger, configured from [`crate::config::CONFIG`]
pub fn logger() -> Logger {
    *LOGGER
}

impl Logger {
    pub fn new(use_ansi_color: bool, minimum_level: LogLevel) -> Self {
        Self {
            use_ansi_color,
            minimum_level,
        }
    }

    /// whether messages at `level` are written
    pub fn enabled(self, level: LogLevel) -> bool {
        level >= self.minimum_level
    }

    fn put_display<T: Display>(self, level: LogLevel, message: T) {
        match level {
            LogLevel::Debug | LogLevel::Verbose | LogLevel::Info => print!("{}", message),
            LogLevel::Warn | LogLevel::Error | LogLevel::Fatal => eprint!("{}", message),
        }
    }

    fn put_color(self, level: LogLevel) {
        if !self.use_ansi_color {
            return;
        }

        self.put_display(level, level.as_ansi());
    }

    fn put_reset(self, level: LogLevel) {
        if !self.use_ansi_color {
            return;
        }

        self.put_display(level, ANSI_RESET);
    }

    pub fn log<T: Display>(self, level: LogLevel, message: T) {
        if !self.enabled(level) {
            return;
        }

        self.put_color(level);
        self.put_display(level, level.as_pre());
        self.put_display(level, message);
        self.put_reset(level);
        self.put_display(level, '\n');
    }

    pub fn debug(self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn verbose(self, message: &str) {
        self.log(LogLevel::Verbose, message);
    }

    pub fn info(self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn error(self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod test {
    use crate::log::{LogLevel, Logger};

    #[test]
    fn filters_below_minimum() {
        let logger = Logger::new(false, LogLevel::Warn);

        assert!(!logger.enabled(LogLevel::Debug));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Fatal));
    }

    #[test]
    fn parses_levels() {
        assert!("DEBUG".parse::<LogLevel>() == Ok(LogLevel::Debug));
        assert!(" wrn ".parse::<LogLevel>() == Ok(LogLevel::Warn));
        assert!("Fatal".parse::<LogLevel>() == Ok(LogLevel::Fatal));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
