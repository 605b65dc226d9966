use logview::{LogDocument, LogFormat, LogLevel, MAX_PARSE_SIZE};

#[test]
fn test_only_blank_lines() {
    let mut document = LogDocument::new("blank.log");

    assert!(document.update(b"\n\r\n\n"));
    assert!(document.entries().is_empty());
    assert_eq!(document.statistics().total_lines, 0);
    assert_eq!(document.format(), LogFormat::Custom);
}

#[test]
fn test_missing_trailing_newline() {
    let mut document = LogDocument::new("tail.log");
    document.update(b"INFO one\nERROR two");

    let last = &document.entries()[1];
    assert_eq!(last.line_number, 2);
    assert_eq!(last.message, "ERROR two");
    assert_eq!(last.line_end, 18);
}

#[test]
fn test_crlf_terminators_are_not_part_of_fields() {
    let mut document = LogDocument::new("crlf.log");
    document.update(b"Jan 12 06:25:24 host app[7]: disk warning\r\nJan 12 06:25:25 host app[7]: ok\r\n");

    let entries = document.entries();
    assert_eq!(document.format(), LogFormat::Syslog);
    assert_eq!(entries[0].message, "disk warning");
    assert_eq!(entries[0].level, LogLevel::Warning);
    assert_eq!(entries[1].message, "ok");
    assert_eq!(document.line_bytes(&entries[1]), b"Jan 12 06:25:25 host app[7]: ok");
}

#[test]
fn test_invalid_utf8_is_decoded_lossily() {
    let mut document = LogDocument::new("binary.log");
    document.update(b"ERROR bad byte \xff here\n");

    let entry = &document.entries()[0];
    assert_eq!(entry.level, LogLevel::Error);
    assert!(entry.message.contains('\u{FFFD}'));
}

#[test]
fn test_short_lines_do_not_panic() {
    let mut document = LogDocument::new("short.log");
    for format in [
        LogFormat::Apache,
        LogFormat::Syslog,
        LogFormat::Log4j,
        LogFormat::Custom,
    ] {
        assert!(document.update_as(b"x\n[\n\"\n2024-\n1 - - [\n]\n", Some(format)));
        assert_eq!(document.entries().len(), 6, "{:?}", format);
        for entry in document.entries() {
            assert!(!entry.message.is_empty());
        }
    }
}

#[test]
fn test_apache_line_without_status() {
    let mut document = LogDocument::new("odd.log");
    let line = br#"1.2.3.4 - - [ts] "GET /half"#;
    document.update_as(line, Some(LogFormat::Apache));

    let entry = &document.entries()[0];
    assert_eq!(entry.ip_address, "1.2.3.4");
    assert_eq!(entry.http_status, 0);
    assert_eq!(entry.level, LogLevel::Unknown);
    assert_eq!(document.statistics().unknown_count, 1);
}

#[test]
fn test_input_past_parse_limit_is_dropped() {
    let mut data = vec![b'x'; MAX_PARSE_SIZE - 5];
    data.extend_from_slice(b"\nERROR beyond cap\n");

    let mut document = LogDocument::new("huge.log");
    assert!(document.update(&data));

    assert_eq!(document.content().len(), MAX_PARSE_SIZE);
    assert_eq!(document.content_size(), data.len() as u64);

    let entries = document.entries();
    assert_eq!(entries.len(), 2);
    // The cut leaves a partial keyword behind
    assert_eq!(entries[1].message, "ERRO");
    assert_eq!(document.statistics().error_count, 0);
    assert_eq!(document.summary().content_size, data.len() as u64);
}
