use thiserror::Error;

/// Failures surfaced by the command line front end.
///
/// The parsing core itself never fails; ingestion reports success as a flag.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("unknown log level '{0}'")]
    UnknownLevel(String),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}
