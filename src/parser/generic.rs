use super::{LineParser, LogEntry, text, with_millis};
use crate::accelerated::contains_any;
use crate::level::LogLevel;
use memchr::memchr;

/// Keyword groups in priority order; the first group with any hit decides
const LEVEL_KEYWORDS: &[(&[&str], LogLevel)] = &[
    (&["FATAL", "CRITICAL"], LogLevel::Fatal),
    (&["ERROR", "EXCEPTION", "FAIL"], LogLevel::Error),
    (&["WARN"], LogLevel::Warning),
    (&["DEBUG"], LogLevel::Debug),
    (&["TRACE"], LogLevel::Trace),
    (&["INFO"], LogLevel::Info),
];

/// Generic log parser that works with any line-oriented text
pub struct GenericLogParser;

impl LineParser for GenericLogParser {
    fn name(&self) -> &'static str {
        "Generic"
    }

    fn parse_line(&self, line: &[u8], entry: &mut LogEntry) {
        entry.message = text(line);

        if line[0] == b'[' {
            if let Some(end) = memchr(b']', line) {
                entry.timestamp = text(&line[1..end]);
            }
        } else if line.len() >= 10 && line[4] == b'-' && line[7] == b'-' {
            let mut end = 10;
            if line.len() > 19 && line[10] == b' ' && line[13] == b':' {
                end = with_millis(line, 19);
            }
            entry.timestamp = text(&line[..end]);
        }

        entry.level = scan_level(line);
    }
}

/// Case-insensitive substring scan, looser than `LogLevel::classify`
pub fn scan_level(line: &[u8]) -> LogLevel {
    let upper = line.to_ascii_uppercase();
    LEVEL_KEYWORDS
        .iter()
        .find(|(keywords, _)| contains_any(&upper, keywords))
        .map_or(LogLevel::Unknown, |(_, level)| *level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(line: &str) -> LogEntry {
        let mut entry = LogEntry::default();
        GenericLogParser.parse_line(line.as_bytes(), &mut entry);
        entry
    }

    #[test]
    fn test_iso_timestamp_without_keywords() {
        let line = "2024-01-15 10:02:33 Something went WRONG here";
        let entry = parse_one(line);

        assert_eq!(entry.timestamp, "2024-01-15 10:02:33");
        assert_eq!(entry.level, LogLevel::Unknown);
        assert_eq!(entry.message, line);
    }

    #[test]
    fn test_timestamp_extensions() {
        assert_eq!(parse_one("2024-01-15 only a date").timestamp, "2024-01-15");
        assert_eq!(
            parse_one("2024-01-15 10:02:33.456 INFO ready").timestamp,
            "2024-01-15 10:02:33.456"
        );
        assert_eq!(parse_one("2024-01-15T10:02:33 x").timestamp, "2024-01-15");
    }

    #[test]
    fn test_bracketed_timestamp() {
        let entry = parse_one("[2024-01-15 10:02:33] worker started");
        assert_eq!(entry.timestamp, "2024-01-15 10:02:33");

        let entry = parse_one("[unterminated");
        assert_eq!(entry.timestamp, "");
    }

    #[test]
    fn test_keyword_priority() {
        assert_eq!(scan_level(b"info: critical path"), LogLevel::Fatal);
        assert_eq!(scan_level(b"NullPointerException thrown"), LogLevel::Error);
        assert_eq!(scan_level(b"request failed"), LogLevel::Error);
        assert_eq!(scan_level(b"Warning: debug build"), LogLevel::Warning);
        assert_eq!(scan_level(b"debug trace"), LogLevel::Debug);
        assert_eq!(scan_level(b"stack trace"), LogLevel::Trace);
        assert_eq!(scan_level(b"information"), LogLevel::Info);
        assert_eq!(scan_level(b"hello"), LogLevel::Unknown);
    }

    #[test]
    fn test_millis_need_a_longer_line() {
        // Exactly 23 bytes: the suffix is not taken
        let entry = parse_one("2024-01-15 10:30:00.123");
        assert_eq!(entry.timestamp, "2024-01-15 10:30:00");

        let entry = parse_one("2024-01-15 10:30:00.123Z");
        assert_eq!(entry.timestamp, "2024-01-15 10:30:00.123");

        let entry = parse_one("2024-01-15 10:30:00,123 x");
        assert_eq!(entry.timestamp, "2024-01-15 10:30:00,123");
    }
}
