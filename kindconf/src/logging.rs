//! Stderr logging behind the `log` facade.
//!
//! The library only emits records through `log::debug!` and friends. A
//! binary picks a [`LogLevel`] with [`init_logger`] and calls
//! [`Logger::install`] to have those records printed on stderr.

use std::env;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Environment variable read when neither `--verbose` nor `--quiet` is set.
pub const LOG_MODE_ENV: &str = "KINDCONF_LOG_MODE";

/// How much the installed logger lets through.
///
/// Ordered from least to most output.
///
/// # Examples
///
/// ```
/// use kindconf::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Verbose);
/// assert_eq!("Verbose".parse::<LogLevel>(), Ok(LogLevel::Verbose));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing is printed.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything down to debug records.
    Verbose,
}

impl LogLevel {
    const NAMES: [(Self, &'static str); 3] = [
        (Self::Quiet, "quiet"),
        (Self::Normal, "normal"),
        (Self::Verbose, "verbose"),
    ];

    /// The most detailed `log` level this mode prints.
    #[must_use]
    pub const fn as_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = Self::NAMES
            .iter()
            .find_map(|(level, name)| (level == self).then_some(*name))
            .unwrap_or_default();
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Case-insensitive match against `quiet`, `normal` and `verbose`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .find_map(|(level, name)| name.eq_ignore_ascii_case(s).then_some(*level))
            .ok_or_else(|| format!("unknown log mode: {s}"))
    }
}

/// A `log` backend writing `LEVEL: message` lines to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// A logger that prints records allowed by `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Installs this logger as the process-wide `log` backend.
    ///
    /// # Errors
    ///
    /// Fails if a backend was already installed; the existing one is kept.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level.as_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

fn format_record(record: &log::Record<'_>) -> String {
    format!("{}: {}", record.level(), record.args())
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.as_level_filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            // stderr going away is not worth aborting a command over
            let _ = writeln!(io::stderr().lock(), "{}", format_record(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Picks the logger for a run.
///
/// `verbose` wins over `quiet`; with neither flag set, [`LOG_MODE_ENV`] is
/// consulted, and an unset or unrecognised value means [`LogLevel::Normal`].
///
/// # Examples
///
/// ```
/// use kindconf::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or(LogLevel::Normal)
    };
    Logger::new(level)
}
