use crate::level::LogLevel;
use crate::parser::LogEntry;
use serde::Serialize;

/// Summary counts over a parsed entry sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogStatistics {
    pub total_lines: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    pub debug_count: usize,
    pub trace_count: usize,
    /// Fatal and Critical entries
    pub fatal_count: usize,
    pub unknown_count: usize,

    // Web server stats
    pub http_2xx_count: usize,
    pub http_3xx_count: usize,
    pub http_4xx_count: usize,
    pub http_5xx_count: usize,

    /// Empty when no entry carries a timestamp
    pub first_timestamp: String,
    pub last_timestamp: String,
}

impl LogStatistics {
    /// Count stored for a severity bucket
    pub fn level_count(&self, level: LogLevel) -> usize {
        match level.bucket() {
            LogLevel::Trace => self.trace_count,
            LogLevel::Debug => self.debug_count,
            LogLevel::Info => self.info_count,
            LogLevel::Warning => self.warning_count,
            LogLevel::Error => self.error_count,
            LogLevel::Fatal | LogLevel::Critical => self.fatal_count,
            LogLevel::Unknown => self.unknown_count,
        }
    }

    /// Sum of the seven severity buckets
    pub fn level_total(&self) -> usize {
        self.trace_count
            + self.debug_count
            + self.info_count
            + self.warning_count
            + self.error_count
            + self.fatal_count
            + self.unknown_count
    }

    pub fn has_http(&self) -> bool {
        self.http_2xx_count > 0 || self.http_4xx_count > 0 || self.http_5xx_count > 0
    }
}

/// Recompute statistics from scratch over `entries`
pub fn aggregate(entries: &[LogEntry]) -> LogStatistics {
    let mut stats = LogStatistics {
        total_lines: entries.len(),
        ..Default::default()
    };

    for entry in entries {
        let bucket = match entry.level.bucket() {
            LogLevel::Trace => &mut stats.trace_count,
            LogLevel::Debug => &mut stats.debug_count,
            LogLevel::Info => &mut stats.info_count,
            LogLevel::Warning => &mut stats.warning_count,
            LogLevel::Error => &mut stats.error_count,
            LogLevel::Fatal | LogLevel::Critical => &mut stats.fatal_count,
            LogLevel::Unknown => &mut stats.unknown_count,
        };
        *bucket += 1;

        match entry.http_status {
            200..=299 => stats.http_2xx_count += 1,
            300..=399 => stats.http_3xx_count += 1,
            400..=499 => stats.http_4xx_count += 1,
            500.. => stats.http_5xx_count += 1,
            _ => {}
        }
    }

    if let Some(first) = entries.iter().find(|e| !e.timestamp.is_empty()) {
        stats.first_timestamp = first.timestamp.clone();
    }
    if let Some(last) = entries.iter().rev().find(|e| !e.timestamp.is_empty()) {
        stats.last_timestamp = last.timestamp.clone();
    }

    stats
}
