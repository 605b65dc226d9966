use crate::detect::LogFormat;
use crate::formatter::Panel;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[clap(name = "logview")]
#[clap(about = "Logview: sniff, parse and highlight plain-text logs", long_about = None)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Log file to analyze
    pub file: String,

    /// Log format (auto-detected by default)
    #[clap(long, value_enum, default_value = "auto")]
    pub format: FormatArg,

    /// Only show entries of this level (ERROR, WARN, INFO, etc.)
    #[clap(short, long)]
    pub level: Option<String>,

    /// Only show entries whose line matches this text or regex
    #[clap(short, long)]
    pub chop: Option<String>,

    /// Panels to render, comma separated
    #[clap(
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [Panel::Information, Panel::Entries, Panel::Errors]
    )]
    pub panels: Vec<Panel>,

    /// Print the raw text with syntax highlighting
    #[clap(long)]
    pub highlight: bool,

    /// List the highlighting tokens instead of rendering them
    #[clap(long)]
    pub tokens: bool,

    /// Output the document summary in JSON format
    #[clap(long)]
    pub json: bool,

    /// Print only the raw error and warning lines
    #[clap(long)]
    pub extract_errors: bool,

    /// Never emit ANSI colours
    #[clap(long)]
    pub no_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Auto,
    Apache,
    Syslog,
    Log4j,
    Generic,
}

impl FormatArg {
    /// The format to force, or `None` to sniff it
    pub fn forced(&self) -> Option<LogFormat> {
        match self {
            FormatArg::Auto => None,
            FormatArg::Apache => Some(LogFormat::Apache),
            FormatArg::Syslog => Some(LogFormat::Syslog),
            FormatArg::Log4j => Some(LogFormat::Log4j),
            FormatArg::Generic => Some(LogFormat::Custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["logview", "app.log"]);

        assert_eq!(args.format, FormatArg::Auto);
        assert_eq!(
            args.panels,
            vec![Panel::Information, Panel::Entries, Panel::Errors]
        );
        assert!(!args.json);
    }

    #[test]
    fn test_panel_list() {
        let args = Args::parse_from(["logview", "--panels", "errors,information", "app.log"]);
        assert_eq!(args.panels, vec![Panel::Errors, Panel::Information]);
    }

    #[test]
    fn test_forced_format() {
        let args = Args::parse_from(["logview", "--format", "generic", "app.log"]);
        assert_eq!(args.format.forced(), Some(LogFormat::Custom));
    }
}
