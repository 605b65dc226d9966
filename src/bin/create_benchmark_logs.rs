use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const DIALECTS: &[&str] = &["log4j", "apache", "syslog", "generic"];

/// Creates benchmark log files in one of the supported dialects.
fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 || !DIALECTS.contains(&args[1].as_str()) {
        eprintln!(
            "Usage: {} <{}> <number-of-lines> <output-file>",
            args[0],
            DIALECTS.join("|")
        );
        std::process::exit(1);
    }

    let lines: usize = match args[2].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Invalid number of lines: {}", args[2]);
            std::process::exit(1);
        }
    };
    let file_path = &args[3];

    println!("Creating {} log with {} lines at {}", args[1], lines, file_path);
    create_benchmark_logs(&args[1], lines, file_path)?;
    println!("Log file created successfully.");

    Ok(())
}

fn create_benchmark_logs(dialect: &str, lines: usize, file_path: &str) -> io::Result<()> {
    if let Some(parent) = Path::new(file_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = BufWriter::new(File::create(file_path)?);
    for i in 0..lines {
        writeln!(file, "{}", benchmark_line(dialect, i))?;
    }
    file.flush()
}

/// Line `i` of a synthetic log in `dialect`
fn benchmark_line(dialect: &str, i: usize) -> String {
    let level = match i % 5 {
        0 => "ERROR",
        1 => "WARN",
        2 => "INFO",
        3 => "DEBUG",
        _ => "TRACE",
    };

    let message = match i % 8 {
        0 => "NullPointerException in WebController.java:42",
        1 => "Connection timeout in NetworkClient.java:86",
        2 => "Application started successfully",
        3 => "Session created for user_123",
        4 => "Failed to process request: invalid parameters",
        5 => "Cache miss for key: user_profile_123",
        6 => "Garbage collection cycle completed in 250ms",
        _ => "Configuration loaded from /etc/config.json",
    };

    let (hour, minute, second) = ((i / 3600) % 24, (i / 60) % 60, i % 60);

    match dialect {
        "apache" => {
            let status = [200, 200, 304, 404, 500][i % 5];
            let method = if i % 3 == 0 { "POST" } else { "GET" };
            format!(
                "10.0.{}.{} - - [21/Mar/2025:{:02}:{:02}:{:02} +0000] \"{} /api/items/{} HTTP/1.1\" {} {} \"-\" \"bench/1.0\"",
                (i / 256) % 256,
                i % 256,
                hour,
                minute,
                second,
                method,
                i,
                status,
                (i * 37) % 5000
            )
        }
        "syslog" => format!(
            "Mar {:>2} {:02}:{:02}:{:02} bench-host app[{}]: {} {}",
            (i % 28) + 1,
            hour,
            minute,
            second,
            1000 + i % 50,
            level,
            message
        ),
        "generic" => format!(
            "[2025-03-21 {:02}:{:02}:{:02}] {} {}",
            hour,
            minute,
            second,
            level.to_lowercase(),
            message
        ),
        _ => format!(
            "2025-03-{:02} {:02}:{:02}:{:02},{:03} [{}] com.example.Worker - {}",
            (i % 31) + 1,
            hour,
            minute,
            second,
            i % 1000,
            level,
            message
        ),
    }
}
