//! End-to-end CSV encoding scenario
//!
//! A March 2024 statement with one transaction ("Refund", +10.00) must
//! produce the fixed `DATA;;` header followed by one credit row whose
//! amount matches the locale rendering of 10.00.

use chrono::TimeZone;
use rust_decimal::Decimal;
use statement_exporter::locale::LocaleSpec;
use statement_exporter::output::CsvStatementWriter;
use statement_exporter::StatementRow;

fn refund_row() -> StatementRow {
    StatementRow {
        date: chrono::Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap(),
        description: "Refund".to_string(),
        amount: Decimal::from_str_exact("10.00").unwrap(),
    }
}

#[test]
fn test_refund_statement_renders_credit_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export_2024-03_EUR.csv");

    let locale = LocaleSpec::parse("en").unwrap();
    let mut writer = CsvStatementWriter::create(&path, locale).unwrap();
    writer.write_row(&refund_row()).unwrap();
    writer.close().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "DATA;;");
    assert_eq!(lines.len(), 2);

    let fields: Vec<&str> = lines[1].split(';').collect();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[1], "\"Refund\"");
    assert_eq!(fields[2], "10.00");
    assert_eq!(fields[3], "\"C\"");
}

#[test]
fn test_comma_locale_statement_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export_2024-03_EUR.csv");

    let locale = LocaleSpec::parse("pl").unwrap();
    let mut writer = CsvStatementWriter::create(&path, locale).unwrap();

    let mut debit = refund_row();
    debit.description = "Groceries".to_string();
    debit.amount = Decimal::from_str_exact("-12.50").unwrap();
    writer.write_row(&debit).unwrap();
    writer.close().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let row = content.lines().nth(1).unwrap();
    assert_eq!(row, "05.03.2024;\"Groceries\";12,50;\"D\"");
}

#[test]
fn test_empty_statement_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    let locale = LocaleSpec::parse("en").unwrap();
    let writer = CsvStatementWriter::create(&path, locale).unwrap();
    writer.close().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "DATA;;\n");
}
