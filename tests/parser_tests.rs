use logview::{LogDocument, LogFormat, LogLevel, aggregate, detect, parse};

fn ingest(content: &str) -> LogDocument {
    let mut document = LogDocument::new("test.log");
    assert!(document.update(content.as_bytes()));
    document
}

#[test]
fn test_apache_round_trip() {
    let line = r#"127.0.0.1 - - [10/Oct/2023:13:55:36 -0700] "GET /index.html HTTP/1.0" 200 1043"#;
    let document = ingest(line);

    assert_eq!(document.format(), LogFormat::Apache);
    let entry = &document.entries()[0];
    assert_eq!(entry.ip_address, "127.0.0.1");
    assert_eq!(entry.timestamp, "10/Oct/2023:13:55:36 -0700");
    assert_eq!(entry.http_method, "GET");
    assert_eq!(entry.url, "/index.html");
    assert_eq!(entry.http_status, 200);
    assert_eq!(entry.response_size, 1043);
    assert_eq!(entry.level, LogLevel::Info);
    assert_eq!(entry.message, line);
    assert_eq!(document.statistics().http_2xx_count, 1);
}

#[test]
fn test_apache_status_statistics() {
    let content = concat!(
        "1.1.1.1 - - [a] \"GET / HTTP/1.1\" 200 10\n",
        "1.1.1.2 - - [b] \"GET /old HTTP/1.1\" 301 0\n",
        "1.1.1.3 - - [c] \"POST /api HTTP/1.1\" 404 0\n",
        "1.1.1.4 - - [d] \"POST /api HTTP/1.1\" 502 0\n",
    );
    let document = ingest(content);
    let stats = document.statistics();

    assert_eq!(document.format(), LogFormat::Apache);
    assert_eq!(
        (
            stats.http_2xx_count,
            stats.http_3xx_count,
            stats.http_4xx_count,
            stats.http_5xx_count
        ),
        (1, 1, 1, 1)
    );
    assert_eq!(stats.info_count, 2);
    assert_eq!(stats.warning_count, 1);
    assert_eq!(stats.error_count, 1);
    assert_eq!(stats.first_timestamp, "a");
    assert_eq!(stats.last_timestamp, "d");
}

#[test]
fn test_syslog_round_trip() {
    let document = ingest("Jan 12 06:25:24 myhost sshd[1234]: Failed password for root\n");

    assert_eq!(document.format(), LogFormat::Syslog);
    let entry = &document.entries()[0];
    assert_eq!(entry.source, "sshd[1234]");
    assert_eq!(entry.message, "Failed password for root");
    assert_eq!(entry.level, LogLevel::Error);
    assert_eq!(entry.timestamp, "Jan 12 06:25:24");
}

#[test]
fn test_log4j_round_trip() {
    let content = concat!(
        "2024-01-15 10:30:00.123 INFO [main] Bootstrap - Starting\n",
        "2024-01-15 10:30:01.456 ERROR [pool-1] Worker - Job 7 crashed\n",
    );
    let document = ingest(content);

    assert_eq!(document.format(), LogFormat::Log4j);
    let entries = document.entries();
    assert_eq!(entries[0].timestamp, "2024-01-15 10:30:00.123");
    assert_eq!(entries[0].source, "main] Bootstrap");
    assert_eq!(entries[0].message, "Starting");
    assert_eq!(entries[1].level, LogLevel::Error);
    assert_eq!(entries[1].message, "Job 7 crashed");
    assert_eq!(
        document.statistics().last_timestamp,
        "2024-01-15 10:30:01.456"
    );
}

#[test]
fn test_generic_round_trip() {
    let line = "2024-01-15 10:02:33 Something went WRONG here";
    let document = ingest(line);

    assert_eq!(document.format(), LogFormat::Custom);
    let entry = &document.entries()[0];
    assert_eq!(entry.timestamp, "2024-01-15 10:02:33");
    // No keyword from the priority list occurs in the line
    assert_eq!(entry.level, LogLevel::Unknown);
    assert_eq!(entry.message, line);
}

#[test]
fn test_apache_error_uses_generic_parser() {
    let content = "[Wed Oct 11 14:32:52 2000] [error] [client 127.0.0.1] client denied\n";
    let document = ingest(content);

    assert_eq!(document.format(), LogFormat::ApacheError);
    let entry = &document.entries()[0];
    assert_eq!(entry.timestamp, "Wed Oct 11 14:32:52 2000");
    assert_eq!(entry.level, LogLevel::Error);
}

#[test]
fn test_level_counts_sum_to_total() {
    let samples = [
        "plain\nERROR x\n\nwarn y\nfatal z\ncritical w\ntrace\ninfo\ndebug\n",
        "Jan 12 06:25:24 h a[1]: ok\nJan 12 06:25:25 h a[1]: warn\n",
        r#"1.1.1.1 - - [a] "GET / HTTP/1.1" 200 1"#,
        "2024-01-15 10:30:00 INFO x - y\n\n\n2024-01-15 10:30:00 nothing\n",
    ];

    for sample in samples {
        let document = ingest(sample);
        let stats = document.statistics();

        assert_eq!(stats.level_total(), stats.total_lines, "{:?}", sample);
        assert_eq!(stats.total_lines, document.entries().len());
    }
}

#[test]
fn test_entry_ordering() {
    let content = "a\n\nb\r\n\r\n\nc\nd";
    let entries = parse(content.as_bytes(), detect(content.as_bytes()));

    assert_eq!(
        entries.iter().map(|e| e.line_number).collect::<Vec<_>>(),
        vec![1, 3, 6, 7]
    );
    for pair in entries.windows(2) {
        assert!(pair[0].line_number < pair[1].line_number);
        assert!(pair[0].line_start <= pair[1].line_start);
    }
    for entry in &entries {
        assert!(entry.line_start <= entry.line_end);
        assert!(!entry.message.is_empty());
    }
}

#[test]
fn test_aggregate_is_recomputable() {
    let entries = parse(b"ERROR a\nINFO b\n", LogFormat::Custom);
    assert_eq!(aggregate(&entries), aggregate(&entries));
}
