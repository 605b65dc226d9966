use super::{LineParser, LogEntry, text};
use crate::accelerated::{contains, find_from};
use crate::level::LogLevel;
use memchr::memchr;

/// Width of the fixed `Mon DD HH:MM:SS` prefix
const TIMESTAMP_WIDTH: usize = 15;

/// BSD syslog parser: `Mon DD HH:MM:SS hostname process[pid]: message`
pub struct SyslogParser;

impl LineParser for SyslogParser {
    fn name(&self) -> &'static str {
        "Syslog"
    }

    fn parse_line(&self, line: &[u8], entry: &mut LogEntry) {
        if line.len() >= TIMESTAMP_WIDTH {
            entry.timestamp = text(&line[..TIMESTAMP_WIDTH]);
        }

        let message = match find_from(line, ": ", 0) {
            Some(colon) if colon > TIMESTAMP_WIDTH => {
                // Drop the hostname, keep the process token
                let source_part = &line[TIMESTAMP_WIDTH + 1..colon];
                if let Some(space) = memchr(b' ', source_part) {
                    entry.source = text(&source_part[space + 1..]);
                }
                &line[colon + 2..]
            }
            _ => line,
        };

        // Level comes from the delimited message even when it is empty;
        // the full-line fallback in `parse_with` runs after this.
        entry.message = text(message);
        entry.level = infer_level(message);
    }
}

/// Keyword scan over the message; syslog entries are never Unknown
fn infer_level(message: &[u8]) -> LogLevel {
    let upper = message.to_ascii_uppercase();

    if contains(&upper, "ERROR") || contains(&upper, "FAIL") {
        LogLevel::Error
    } else if contains(&upper, "WARN") {
        LogLevel::Warning
    } else if contains(&upper, "DEBUG") {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(line: &str) -> LogEntry {
        let mut entry = LogEntry::default();
        SyslogParser.parse_line(line.as_bytes(), &mut entry);
        entry
    }

    #[test]
    fn test_sshd_line() {
        let entry = parse_one("Jan 12 06:25:24 myhost sshd[1234]: Failed password for root");

        assert_eq!(entry.timestamp, "Jan 12 06:25:24");
        assert_eq!(entry.source, "sshd[1234]");
        assert_eq!(entry.message, "Failed password for root");
        assert_eq!(entry.level, LogLevel::Error);
    }

    #[test]
    fn test_level_priority() {
        assert_eq!(
            parse_one("Jan 12 06:25:24 host app: warning then error").level,
            LogLevel::Error
        );
        assert_eq!(
            parse_one("Jan 12 06:25:24 host app: low disk, warn").level,
            LogLevel::Warning
        );
        assert_eq!(
            parse_one("Jan 12 06:25:24 host app: debug dump").level,
            LogLevel::Debug
        );
        assert_eq!(
            parse_one("Jan 12 06:25:24 host app: session opened").level,
            LogLevel::Info
        );
    }

    #[test]
    fn test_level_uses_message_only() {
        // "error" in the hostname is outside the message
        let entry = parse_one("Jan 12 06:25:24 error-host cron[1]: job started");
        assert_eq!(entry.level, LogLevel::Info);
    }

    #[test]
    fn test_missing_delimiter_keeps_full_line() {
        let line = "Jan 12 06:25:24 host kernel booting";
        let entry = parse_one(line);

        assert_eq!(entry.message, line);
        assert_eq!(entry.source, "");
        assert_eq!(entry.timestamp, "Jan 12 06:25:24");
    }

    #[test]
    fn test_delimiter_inside_timestamp_is_ignored() {
        let entry = parse_one("short: text");

        assert_eq!(entry.timestamp, "");
        assert_eq!(entry.message, "short: text");
    }

    #[test]
    fn test_source_without_hostname_is_empty() {
        let entry = parse_one("Jan 12 06:25:24 kernel: oops");

        assert_eq!(entry.source, "");
        assert_eq!(entry.message, "oops");
    }

    #[test]
    fn test_empty_message_is_classified_before_fallback() {
        use crate::detect::LogFormat;
        use crate::parser::parse;

        let entries = parse(b"Jan 12 06:25:24 error-host app[9]: \n", LogFormat::Syslog);

        assert_eq!(entries[0].message, "Jan 12 06:25:24 error-host app[9]: ");
        assert_eq!(entries[0].source, "app[9]");
        assert_eq!(entries[0].level, LogLevel::Info);
    }
}
