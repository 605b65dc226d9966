use crate::document::LogDocument;
use crate::error::LogError;
use crate::level::LogLevel;
use crate::parser::LogEntry;
use crate::tokenizer::{TokenColor, TokenSink, TokenType};
use clap::ValueEnum;
use std::io::{self, Write};

/// Rows shown by the entries panel before it is cut short
pub const MAX_DISPLAY_ENTRIES: usize = 10_000;
/// Rows shown by the errors panel before it is cut short
pub const MAX_DISPLAY_ERRORS: usize = 5_000;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Information,
    Entries,
    Errors,
}

/// Which panels a renderer draws
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelSet {
    pub information: bool,
    pub entries: bool,
    pub errors: bool,
}

impl PanelSet {
    pub fn from_panels(panels: &[Panel]) -> Self {
        let mut set = Self::default();
        for panel in panels {
            match panel {
                Panel::Information => set.information = true,
                Panel::Entries => set.entries = true,
                Panel::Errors => set.errors = true,
            }
        }
        set
    }
}

/// Text rendering of a document's panels
pub struct Renderer {
    panels: PanelSet,
    color: bool,
}

impl Renderer {
    pub fn new(panels: PanelSet, color: bool) -> Self {
        Self { panels, color }
    }

    /// Render every enabled panel. `entries` is what the entries panel lists,
    /// usually the document's entries after any filtering.
    pub fn render<W: Write>(
        &self,
        document: &LogDocument,
        entries: &[&LogEntry],
        writer: &mut W,
    ) -> io::Result<()> {
        if self.panels.information {
            write_information(document, writer)?;
        }
        if self.panels.entries {
            self.write_entries(entries, writer)?;
        }
        if self.panels.errors {
            self.write_errors(document.entries(), writer)?;
        }
        Ok(())
    }

    fn write_entries<W: Write>(&self, entries: &[&LogEntry], writer: &mut W) -> io::Result<()> {
        writeln!(writer, "\nEntries")?;
        writeln!(
            writer,
            "{:>6}  {:<8} {:<24} {:<20} Message",
            "#", "Level", "Timestamp", "Source"
        )?;

        for entry in entries.iter().take(MAX_DISPLAY_ENTRIES) {
            writeln!(
                writer,
                "{:>6}  {} {:<24} {:<20} {}",
                entry.line_number,
                self.level_cell(entry),
                entry.timestamp,
                entry.source,
                entry.message
            )?;
        }

        if entries.len() > MAX_DISPLAY_ENTRIES {
            writeln!(
                writer,
                "   ...  (Showing {} of {} entries)",
                MAX_DISPLAY_ENTRIES,
                entries.len()
            )?;
        }
        Ok(())
    }

    fn write_errors<W: Write>(&self, entries: &[LogEntry], writer: &mut W) -> io::Result<()> {
        writeln!(writer, "\nErrors")?;

        let mut shown = 0;
        for entry in entries.iter().filter(|e| e.level.is_problem()) {
            if shown >= MAX_DISPLAY_ERRORS {
                writeln!(writer, "   ...  (More errors not shown - use filtering)")?;
                break;
            }
            writeln!(
                writer,
                "{:>6}  {} {:<24} {}",
                entry.line_number,
                self.level_cell(entry),
                entry.timestamp,
                entry.message
            )?;
            shown += 1;
        }

        if shown == 0 {
            writeln!(writer, "  No errors or warnings found in the log file.")?;
        }
        Ok(())
    }

    fn level_cell(&self, entry: &LogEntry) -> String {
        let name = format!("{:<8}", entry.level.as_str());
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", entry.level.ansi_color(), name)
        } else {
            name
        }
    }
}

fn write_information<W: Write>(document: &LogDocument, writer: &mut W) -> io::Result<()> {
    let stats = document.statistics();

    writeln!(writer, "File")?;
    writeln!(writer, "  {:<14}{}", "Name", document.name())?;
    writeln!(
        writer,
        "  {:<14}{} bytes",
        "Size",
        group_thousands(document.content_size())
    )?;
    writeln!(writer, "  {:<14}{}", "Format", document.format().display_name())?;
    writeln!(
        writer,
        "  {:<14}{}",
        "Total Lines",
        group_thousands(stats.total_lines as u64)
    )?;
    if !stats.first_timestamp.is_empty() {
        writeln!(writer, "  {:<14}{}", "First Entry", stats.first_timestamp)?;
    }
    if !stats.last_timestamp.is_empty() {
        writeln!(writer, "  {:<14}{}", "Last Entry", stats.last_timestamp)?;
    }

    let total = stats.total_lines;

    writeln!(writer, "\nLevel Statistics")?;
    for level in LEVEL_ROWS {
        stat_row(writer, level.as_str(), stats.level_count(level), total)?;
    }

    if stats.has_http() {
        writeln!(writer, "\nHTTP Status")?;
        stat_row(writer, "2xx (OK)", stats.http_2xx_count, total)?;
        stat_row(writer, "3xx (Redirect)", stats.http_3xx_count, total)?;
        stat_row(writer, "4xx (Client)", stats.http_4xx_count, total)?;
        stat_row(writer, "5xx (Server)", stats.http_5xx_count, total)?;
    }
    Ok(())
}

/// Rows of the level table; Critical is counted under Fatal
const LEVEL_ROWS: [LogLevel; 7] = [
    LogLevel::Fatal,
    LogLevel::Error,
    LogLevel::Warning,
    LogLevel::Info,
    LogLevel::Debug,
    LogLevel::Trace,
    LogLevel::Unknown,
];

/// Label, count and share of `total` (an empty document divides by 1)
fn stat_row<W: Write>(writer: &mut W, label: &str, count: usize, total: usize) -> io::Result<()> {
    let pct = count as f64 * 100.0 / total.max(1) as f64;
    writeln!(
        writer,
        "  {:<16}{:>10}{:>9.1}%",
        label,
        group_thousands(count as u64),
        pct
    )
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Collects tokens and replays them as ANSI-coloured text
struct AnsiSink {
    spans: Vec<(usize, usize, TokenColor)>,
}

impl TokenSink for AnsiSink {
    fn append(&mut self, _kind: TokenType, start: usize, end: usize, color: TokenColor) {
        self.spans.push((start, end, color));
    }
}

/// Write the parsed text, highlighted when `color` is set
pub fn write_highlighted<W: Write>(
    document: &LogDocument,
    color: bool,
    writer: &mut W,
) -> io::Result<()> {
    let content = document.content();
    if !color {
        writer.write_all(content)?;
        return Ok(());
    }

    let mut sink = AnsiSink { spans: Vec::new() };
    document.tokenize_into(&mut sink);

    let mut pos = 0;
    for (start, end, token_color) in sink.spans {
        writer.write_all(&content[pos..start])?;
        write!(writer, "\x1b[{}m", token_color.ansi())?;
        writer.write_all(&content[start..end])?;
        writer.write_all(b"\x1b[0m")?;
        pos = end;
    }
    writer.write_all(&content[pos..])?;
    Ok(())
}

/// One line per token: offsets, legend name and the covered text
pub fn write_tokens<W: Write>(document: &LogDocument, writer: &mut W) -> io::Result<()> {
    let content = document.content();
    for token in document.tokens() {
        writeln!(
            writer,
            "{:>8}..{:<8} {:<12} {}",
            token.start,
            token.end,
            token.kind.name(),
            String::from_utf8_lossy(&content[token.start..token.end])
        )?;
    }
    Ok(())
}

/// Pretty JSON summary of the document
pub fn write_summary_json<W: Write>(
    document: &LogDocument,
    writer: &mut W,
) -> Result<(), LogError> {
    serde_json::to_writer_pretty(&mut *writer, &document.summary())?;
    writeln!(writer)?;
    Ok(())
}
