use clap::Parser;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use logview::cli::Args;
use logview::formatter::{
    PanelSet, Renderer, write_highlighted, write_summary_json, write_tokens,
};
use logview::{
    LogDocument, LogEntry, LogError, LogLevel, MAX_PARSE_SIZE, Transform, TransformResult, apply,
};

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), LogError> {
    // Validate filters before touching the file
    let level = args.level.as_deref().map(parse_level).transpose()?;

    let io_error = |source| LogError::Io {
        path: args.file.clone(),
        source,
    };
    let file = File::open(&args.file).map_err(io_error)?;
    let size = file.metadata().map_err(io_error)?.len();

    // Read no further than the parse limit
    let mut data = Vec::with_capacity(size.min(MAX_PARSE_SIZE as u64) as usize);
    file.take(MAX_PARSE_SIZE as u64)
        .read_to_end(&mut data)
        .map_err(io_error)?;

    let name = Path::new(&args.file)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.clone());

    let mut document = LogDocument::new(name);
    if !document.update_prefix(&data, size, args.format.forced()) {
        tracing::warn!(file = %args.file, "file is empty, nothing to parse");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let color = !args.no_color && atty::is(atty::Stream::Stdout);

    if args.json {
        write_summary_json(&document, &mut out)?;
    } else if args.extract_errors {
        let transform = Transform::ExtractErrors;
        tracing::debug!(transform = transform.name(), "applying transform");
        if let TransformResult::Buffer(buffer) = apply(&transform, &document)? {
            writeln!(out, "{}", buffer)?;
        }
    } else if args.tokens {
        write_tokens(&document, &mut out)?;
    } else if args.highlight {
        write_highlighted(&document, color, &mut out)?;
    } else {
        let mut transforms = Vec::new();
        if let Some(level) = level {
            transforms.push(Transform::FilterByLevel(level));
        }
        if let Some(pattern) = &args.chop {
            transforms.push(Transform::Search(pattern.clone()));
        }

        let selected = select_entries(&document, &transforms)?;
        Renderer::new(PanelSet::from_panels(&args.panels), color).render(
            &document,
            &selected,
            &mut out,
        )?;
        writeln!(out, "\nShowing: {} of {} entries", selected.len(), document.entries().len())?;
    }

    out.flush()?;
    Ok(())
}

/// Entries that pass every transform, in document order
fn select_entries<'a>(
    document: &'a LogDocument,
    transforms: &[Transform],
) -> Result<Vec<&'a LogEntry>, LogError> {
    let mut selected: Vec<&LogEntry> = document.entries().iter().collect();

    for transform in transforms {
        tracing::debug!(transform = transform.name(), "applying transform");
        if let TransformResult::Entries(kept) = apply(transform, document)? {
            let kept: FxHashSet<u32> = kept.iter().map(|e| e.line_number).collect();
            selected.retain(|e| kept.contains(&e.line_number));
        }
    }

    Ok(selected)
}

fn parse_level(name: &str) -> Result<LogLevel, LogError> {
    match LogLevel::classify(name) {
        LogLevel::Unknown if !name.eq_ignore_ascii_case("unknown") => {
            Err(LogError::UnknownLevel(name.to_string()))
        }
        level => Ok(level),
    }
}
