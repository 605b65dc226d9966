use super::{LineParser, LogEntry, text, with_millis};
use crate::accelerated::find_from;
use crate::level::LogLevel;
use memchr::memmem;

/// Level tokens in scan order. `WARN` is listed before `WARNING`, so a
/// `WARNING` line is always reported through the `WARN` hit.
const LEVEL_TOKENS: &[&str] = &[
    "TRACE", "DEBUG", "INFO", "WARN", "WARNING", "ERROR", "FATAL", "CRITICAL",
];

/// A level token must start within this many bytes of the post-timestamp text
const LEVEL_WINDOW: usize = 20;

/// Log4j/Log4net style parser. Handles both
/// `2024-01-15 10:30:00.123 INFO [main] ClassName - Message` and
/// `2024-01-15 10:30:00,123 [INFO] logger - Message`.
pub struct Log4jParser;

impl LineParser for Log4jParser {
    fn name(&self) -> &'static str {
        "Log4j"
    }

    fn parse_line(&self, line: &[u8], entry: &mut LogEntry) {
        let mut timestamp_end = 0;
        if line.len() >= 19 && is_date_separator(line[4]) && is_date_separator(line[7]) {
            timestamp_end = with_millis(line, 19);
            entry.timestamp = text(&line[..timestamp_end]);
        }

        let remaining = &line[timestamp_end..];

        // First token in array order that starts inside the window wins
        let hit = LEVEL_TOKENS.iter().find_map(|token| {
            memmem::find(remaining, token.as_bytes())
                .filter(|pos| *pos < LEVEL_WINDOW)
                .map(|pos| (*token, pos))
        });

        let Some((token, level_pos)) = hit else {
            return;
        };
        entry.level = LogLevel::classify(token);
        let level_end = level_pos + token.len();

        match find_from(remaining, " - ", level_pos) {
            Some(marker) => {
                let source = trim_logger(&remaining[level_end.min(marker)..marker]);
                if !source.is_empty() {
                    entry.source = text(source);
                }
                entry.message = text(&remaining[marker + 3..]);
            }
            None => entry.message = text(&remaining[level_end..]),
        }
    }
}

fn is_date_separator(b: u8) -> bool {
    b == b'-' || b == b'/'
}

/// Strip leading spaces/`[` and trailing spaces/`]` from a logger name
fn trim_logger(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| *b != b' ' && *b != b'[')
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| *b != b' ' && *b != b']')
        .map_or(start, |pos| pos + 1);
    &bytes[start..end.max(start)]
}
