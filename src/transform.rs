use crate::accelerated::PatternMatcherFactory;
use crate::document::LogDocument;
use crate::level::LogLevel;
use crate::parser::LogEntry;

/// Actions that can be run over an ingested document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    /// Keep entries of one severity; Critical and Fatal count as one
    FilterByLevel(LogLevel),
    /// Copy every error and warning line into a new buffer
    ExtractErrors,
    /// Keep entries whose raw line matches a literal or regex pattern
    Search(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformResult<'a> {
    Entries(Vec<&'a LogEntry>),
    Buffer(String),
}

impl Transform {
    pub fn name(&self) -> &'static str {
        match self {
            Transform::FilterByLevel(_) => "Filter by Level",
            Transform::ExtractErrors => "Extract Errors",
            Transform::Search(_) => "Search",
        }
    }
}

/// Run `transform` against `document`. Only `Search` can fail, on a bad regex.
pub fn apply<'a>(
    transform: &Transform,
    document: &'a LogDocument,
) -> Result<TransformResult<'a>, regex::Error> {
    let entries = document.entries();

    let result = match transform {
        Transform::FilterByLevel(level) => TransformResult::Entries(
            entries
                .iter()
                .filter(|e| e.level.bucket() == level.bucket())
                .collect(),
        ),
        Transform::ExtractErrors => {
            let lines: Vec<_> = entries
                .iter()
                .filter(|e| e.level.is_problem())
                .map(|e| String::from_utf8_lossy(document.line_bytes(e)))
                .collect();
            TransformResult::Buffer(lines.join("\n"))
        }
        Transform::Search(pattern) => {
            let matcher = PatternMatcherFactory::create(pattern)?;
            TransformResult::Entries(
                entries
                    .iter()
                    .filter(|e| matcher.is_match(document.line_bytes(e)))
                    .collect(),
            )
        }
    };

    Ok(result)
}
