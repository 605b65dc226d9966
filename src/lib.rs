// Declare our modules
pub mod accelerated;
pub mod cli;
pub mod detect;
pub mod document;
pub mod error;
pub mod formatter;
pub mod level;
pub mod parser;
pub mod stats;
pub mod tokenizer;
pub mod transform;

// Re-export key types for convenience
pub use cli::Args;
pub use detect::{LogFormat, detect};
pub use document::{LogDocument, MAX_PARSE_SIZE, Summary};
pub use error::LogError;
pub use level::LogLevel;
pub use parser::{LogEntry, parse};
pub use stats::{LogStatistics, aggregate};
pub use tokenizer::{Token, TokenColor, TokenSink, TokenType, tokenize};
pub use transform::{Transform, TransformResult, apply};
