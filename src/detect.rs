use crate::accelerated::{contains, contains_any};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Number of leading bytes inspected when sniffing the dialect
pub const SAMPLE_SIZE: usize = 4096;

/// Log format types recognised by the detector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogFormat {
    #[default]
    Unknown,
    /// Apache/Nginx access logs
    Apache,
    /// Apache/Nginx error logs
    ApacheError,
    Syslog,
    WindowsEvent,
    IIS,
    /// Log4j/Log4net style layouts
    Log4j,
    JSON,
    /// Anything else, handled by the generic parser
    Custom,
}

impl LogFormat {
    pub fn display_name(&self) -> &'static str {
        match self {
            LogFormat::Apache => "Apache/Nginx Access Log",
            LogFormat::ApacheError => "Apache/Nginx Error Log",
            LogFormat::Syslog => "Syslog",
            LogFormat::WindowsEvent => "Windows Event Log",
            LogFormat::IIS => "IIS Log",
            LogFormat::Log4j => "Log4j/Log4net",
            LogFormat::JSON => "JSON Structured Log",
            LogFormat::Custom => "Generic/Custom",
            LogFormat::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

const APACHE_STATUS_MARKERS: &[&str] = &["\" 200 ", "\" 404 ", "\" 500 ", "GET ", "POST "];
const APACHE_ERROR_MARKERS: &[&str] = &["[error]", "[warn]", "[notice]", "[crit]"];
const SYSLOG_MONTHS: &[&str] = &[
    "Jan ", "Feb ", "Mar ", "Apr ", "May ", "Jun ", "Jul ", "Aug ", "Sep ", "Oct ", "Nov ", "Dec ",
];
const LOG4J_LEVEL_MARKERS: &[&str] = &[
    " INFO ", " DEBUG ", " ERROR ", " WARN ", "[INFO]", "[DEBUG]", "[ERROR]", "[WARN]",
];
const JSON_KEYS: &[&str] = &["\"timestamp\"", "\"level\"", "\"message\""];

/// Classify the whole buffer from its first `SAMPLE_SIZE` bytes.
///
/// Checks run in a fixed order and the first match wins, so a sample that
/// satisfies several dialects always resolves to the earliest one.
pub fn detect(content: &[u8]) -> LogFormat {
    let sample = &content[..content.len().min(SAMPLE_SIZE)];

    let format = if contains(sample, " - - [") && contains_any(sample, APACHE_STATUS_MARKERS) {
        LogFormat::Apache
    } else if contains_any(sample, APACHE_ERROR_MARKERS) {
        LogFormat::ApacheError
    } else if contains_any(sample, SYSLOG_MONTHS) && contains(sample, "]: ") {
        LogFormat::Syslog
    } else if contains_any(sample, LOG4J_LEVEL_MARKERS) && contains(sample, " - ") {
        LogFormat::Log4j
    } else if contains(sample, "{\"") && contains_any(sample, JSON_KEYS) {
        LogFormat::JSON
    } else {
        LogFormat::Custom
    };

    debug!(sample_len = sample.len(), ?format, "detected log format");
    format
}
