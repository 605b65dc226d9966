use super::{LineParser, LogEntry, text};
use crate::level::LogLevel;
use memchr::memchr;

/// Apache/Nginx combined access log parser:
/// `IP - - [timestamp] "METHOD URL PROTOCOL" status size "referer" "user-agent"`
pub struct ApacheLogParser;

impl LineParser for ApacheLogParser {
    fn name(&self) -> &'static str {
        "Apache"
    }

    fn parse_line(&self, line: &[u8], entry: &mut LogEntry) {
        entry.message = text(line);

        let Some(ip_end) = memchr(b' ', line) else {
            return;
        };
        entry.ip_address = text(&line[..ip_end]);

        if let (Some(ts_start), Some(ts_end)) = (memchr(b'[', line), memchr(b']', line)) {
            if ts_end > ts_start {
                entry.timestamp = text(&line[ts_start + 1..ts_end]);
            }
        }

        let Some((request, after_request)) = quoted(line) else {
            return;
        };

        // Protocol, if present, is the third token and is dropped
        if let Some(method_end) = memchr(b' ', request) {
            entry.http_method = text(&request[..method_end]);
            let rest = &request[method_end + 1..];
            if let Some(url_end) = memchr(b' ', rest) {
                entry.url = text(&rest[..url_end]);
            }
        }

        let tail = &line[after_request..];
        let Some((status, status_end)) = next_number(tail) else {
            return;
        };
        entry.http_status = u32::try_from(status).unwrap_or(u32::MAX);
        entry.level = level_for_status(entry.http_status);

        let tail = &tail[status_end..];
        let size_start = tail.iter().position(|b| *b != b' ').unwrap_or(tail.len());
        let mut rest = &tail[size_start..];
        if let Some((size, size_end)) = leading_number(rest) {
            entry.response_size = size;
            rest = &rest[size_end..];
        }

        if let Some((referer, next)) = quoted(rest) {
            entry.referer = text(referer);
            if let Some((agent, _)) = quoted(&rest[next..]) {
                entry.user_agent = text(agent);
            }
        }
    }
}

/// Severity implied by an HTTP status code
pub fn level_for_status(status: u32) -> LogLevel {
    if status >= 500 {
        LogLevel::Error
    } else if status >= 400 {
        LogLevel::Warning
    } else {
        LogLevel::Info
    }
}

/// First `"..."` segment: its contents and the offset just past the closing quote
fn quoted(bytes: &[u8]) -> Option<(&[u8], usize)> {
    let open = memchr(b'"', bytes)?;
    let close = memchr(b'"', &bytes[open + 1..])? + open + 1;
    Some((&bytes[open + 1..close], close + 1))
}

/// First run of digits anywhere in `bytes`: its value and the offset just past it
fn next_number(bytes: &[u8]) -> Option<(u64, usize)> {
    let start = bytes.iter().position(u8::is_ascii_digit)?;
    leading_number(&bytes[start..]).map(|(value, len)| (value, start + len))
}

/// Digit run at the very start of `bytes`
fn leading_number(bytes: &[u8]) -> Option<(u64, usize)> {
    let len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }
    let value = bytes[..len].iter().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });
    Some((value, len))
}
