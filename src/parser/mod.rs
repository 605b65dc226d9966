use crate::accelerated::line_processing::{count_lines, lines};
use crate::detect::LogFormat;
use crate::level::LogLevel;
use serde::Serialize;
use tracing::debug;

/// Structured representation of one non-empty source line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Start offset of the line in the source buffer
    pub line_start: usize,
    /// Exclusive end offset, terminator not included
    pub line_end: usize,
    /// 1-based line number; blank lines are counted but never produce an entry
    pub line_number: u32,

    pub timestamp: String,
    pub level: LogLevel,
    pub source: String,
    pub message: String,

    // Web server specific fields
    pub ip_address: String,
    pub http_method: String,
    pub url: String,
    /// 0 when the line carries no status
    pub http_status: u32,
    pub response_size: u64,
    pub user_agent: String,
    pub referer: String,
}

/// Per-dialect line grammar.
///
/// Implementations only fill in fields; the shared loop in [`parse_with`]
/// owns line splitting, offsets and the message fallback.
pub trait LineParser: Send + Sync {
    /// Returns the name of the parser
    fn name(&self) -> &'static str;

    /// Parses a single non-empty line (terminator already stripped)
    fn parse_line(&self, line: &[u8], entry: &mut LogEntry);
}

/// Parse the whole buffer with the parser matching `format`.
///
/// Apache, Syslog and Log4j have dedicated grammars; every other format
/// falls back to the generic parser.
pub fn parse(content: &[u8], format: LogFormat) -> Vec<LogEntry> {
    match format {
        LogFormat::Apache => parse_with(&apache::ApacheLogParser, content),
        LogFormat::Syslog => parse_with(&syslog::SyslogParser, content),
        LogFormat::Log4j => parse_with(&log4j::Log4jParser, content),
        _ => parse_with(&generic::GenericLogParser, content),
    }
}

/// Run `parser` over every non-empty line of `content`
pub fn parse_with<P: LineParser + ?Sized>(parser: &P, content: &[u8]) -> Vec<LogEntry> {
    let mut entries = Vec::with_capacity(count_lines(content));

    for line in lines(content) {
        if line.text.is_empty() {
            continue;
        }

        let mut entry = LogEntry {
            line_start: line.start,
            line_end: line.end,
            line_number: line.number,
            ..Default::default()
        };
        parser.parse_line(line.text, &mut entry);

        if entry.message.is_empty() {
            entry.message = text(line.text);
        }
        entries.push(entry);
    }

    debug!(parser = parser.name(), entries = entries.len(), "parsed log");
    entries
}

/// Owned, lossily decoded copy of a byte slice
pub(crate) fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Length of an ISO-like `YYYY-MM-DD HH:MM:SS[.mmm]` prefix extension:
/// 19 becomes 23 when a millisecond separator follows and the line is long enough.
pub(crate) fn with_millis(line: &[u8], end: usize) -> usize {
    if line.len() > 23 && matches!(line.get(19), Some(b'.') | Some(b',')) {
        23
    } else {
        end
    }
}

// Create submodules for specific parsers
pub mod apache;
pub mod generic;
pub mod log4j;
pub mod syslog;
