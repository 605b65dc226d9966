use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Log entry severity, ordered from least to most important.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    #[default]
    Unknown,
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
    Critical,
}

lazy_static! {
    // Exact (upper-cased) spellings accepted by `LogLevel::classify`
    static ref ABBREVIATIONS: FxHashMap<&'static str, LogLevel> = {
        let mut table = FxHashMap::default();
        for name in ["TRACE", "TRC"] {
            table.insert(name, LogLevel::Trace);
        }
        for name in ["DEBUG", "DBG", "DEBU"] {
            table.insert(name, LogLevel::Debug);
        }
        for name in ["INFO", "INF", "INFORMATION", "NOTICE"] {
            table.insert(name, LogLevel::Info);
        }
        for name in ["WARN", "WARNING", "WRN"] {
            table.insert(name, LogLevel::Warning);
        }
        for name in ["ERROR", "ERR", "ERRO"] {
            table.insert(name, LogLevel::Error);
        }
        for name in ["FATAL", "FTL", "CRIT", "CRITICAL"] {
            table.insert(name, LogLevel::Fatal);
        }
        table
    };
}

impl LogLevel {
    /// Classify a single level token, ignoring case.
    ///
    /// Only whole tokens match: `"warn"` is a warning, `"warnings"` is not.
    /// Critical spellings fold into `Fatal`.
    pub fn classify(token: &str) -> LogLevel {
        let upper = token.to_ascii_uppercase();
        ABBREVIATIONS
            .get(upper.as_str())
            .copied()
            .unwrap_or(LogLevel::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Unknown => "UNKNOWN",
        }
    }

    /// Error, Warning, Fatal and Critical entries are the ones surfaced by the
    /// errors panel and the extract-errors transform.
    pub fn is_problem(&self) -> bool {
        matches!(
            self,
            LogLevel::Error | LogLevel::Warning | LogLevel::Fatal | LogLevel::Critical
        )
    }

    /// The statistics bucket this level is counted in.
    pub fn bucket(&self) -> LogLevel {
        match self {
            LogLevel::Critical => LogLevel::Fatal,
            other => *other,
        }
    }

    /// ANSI SGR colour used when rendering this level in a terminal.
    pub fn ansi_color(&self) -> &'static str {
        match self {
            LogLevel::Trace => "90",
            LogLevel::Debug => "36",
            LogLevel::Info => "32",
            LogLevel::Warning => "33",
            LogLevel::Error => "31",
            LogLevel::Fatal | LogLevel::Critical => "35",
            LogLevel::Unknown => "37",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
