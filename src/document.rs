use crate::detect::{LogFormat, detect};
use crate::parser::{LogEntry, parse};
use crate::stats::{LogStatistics, aggregate};
use crate::tokenizer::{Token, TokenSink, tokenize, tokenize_into};
use serde::Serialize;
use tracing::{debug, info};

/// Bytes beyond this limit are neither parsed nor tokenized
pub const MAX_PARSE_SIZE: usize = 50 * 1024 * 1024;

/// A log file ingested into entries and statistics.
///
/// Every call to [`LogDocument::update`] rebuilds all derived state from
/// scratch; nothing is carried over from the previous ingestion.
#[derive(Debug, Clone)]
pub struct LogDocument {
    name: String,
    content: Vec<u8>,
    content_size: u64,
    parse_limit: usize,
    format: LogFormat,
    entries: Vec<LogEntry>,
    stats: LogStatistics,
}

/// Compact description of an ingested document, for assistants and `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Summary {
    pub name: String,
    pub content_size: u64,
    pub format: String,
    pub total_lines: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_timestamp: Option<String>,
}

impl LogDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Vec::new(),
            content_size: 0,
            parse_limit: MAX_PARSE_SIZE,
            format: LogFormat::Unknown,
            entries: Vec::new(),
            stats: LogStatistics::default(),
        }
    }

    /// Override the ingestion cap
    pub fn with_parse_limit(mut self, limit: usize) -> Self {
        self.parse_limit = limit;
        self
    }

    /// Detect the dialect, parse and aggregate. Returns false for empty input,
    /// which leaves the document with no entries and zeroed statistics.
    pub fn update(&mut self, data: &[u8]) -> bool {
        self.update_as(data, None)
    }

    /// Like [`LogDocument::update`], but `forced` skips format detection
    pub fn update_as(&mut self, data: &[u8], forced: Option<LogFormat>) -> bool {
        self.update_prefix(data, data.len() as u64, forced)
    }

    /// Ingest `data`, the leading bytes of a source that is `total_size` bytes
    /// long. Callers reading from disk stop at the parse limit, so the rest of
    /// the source is only known by its size.
    pub fn update_prefix(
        &mut self,
        data: &[u8],
        total_size: u64,
        forced: Option<LogFormat>,
    ) -> bool {
        self.content.clear();
        self.entries.clear();
        self.stats = LogStatistics::default();
        self.format = LogFormat::Unknown;
        self.content_size = total_size.max(data.len() as u64);

        if data.is_empty() {
            debug!(name = %self.name, "nothing to ingest");
            return false;
        }

        let parse_size = data.len().min(self.parse_limit);
        if (parse_size as u64) < self.content_size {
            debug!(
                name = %self.name,
                size = self.content_size,
                limit = self.parse_limit,
                "input exceeds parse limit, truncating"
            );
        }
        self.content.extend_from_slice(&data[..parse_size]);

        self.format = forced.unwrap_or_else(|| detect(&self.content));
        self.entries = parse(&self.content, self.format);
        self.stats = aggregate(&self.entries);

        info!(
            name = %self.name,
            format = %self.format,
            entries = self.entries.len(),
            "ingested log"
        );
        true
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bytes that were parsed, after the cap
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Size of the input as handed to `update`, before the cap
    pub fn content_size(&self) -> u64 {
        self.content_size
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn statistics(&self) -> &LogStatistics {
        &self.stats
    }

    /// Raw source bytes of an entry's line
    pub fn line_bytes(&self, entry: &LogEntry) -> &[u8] {
        &self.content[entry.line_start..entry.line_end]
    }

    /// Highlighting spans over the parsed content
    pub fn tokens(&self) -> Vec<Token> {
        tokenize(&self.content)
    }

    pub fn tokenize_into<S: TokenSink + ?Sized>(&self, sink: &mut S) {
        tokenize_into(&self.content, sink);
    }

    pub fn summary(&self) -> Summary {
        let non_empty = |s: &String| (!s.is_empty()).then(|| s.clone());

        Summary {
            name: self.name.clone(),
            content_size: self.content_size,
            format: self.format.display_name().to_string(),
            total_lines: self.stats.total_lines,
            error_count: self.stats.error_count,
            warning_count: self.stats.warning_count,
            info_count: self.stats.info_count,
            first_timestamp: non_empty(&self.stats.first_timestamp),
            last_timestamp: non_empty(&self.stats.last_timestamp),
        }
    }
}
