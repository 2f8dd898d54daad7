//! CSV statement writer
//!
//! Renders the transaction ledger as a semicolon-delimited UTF-8 file:
//! a fixed `DATA;;` header line, then one line per transaction with the
//! locale-rendered date, the quoted description, the absolute amount in the
//! locale's number format, and a quoted `"D"` (debit) / `"C"` (credit)
//! marker. The sign never appears in the amount column; the marker carries
//! the direction.
//!
//! The `csv` crate is deliberately not used here: the format quotes columns
//! 2 and 4 but never 1 and 3, which no stock quote style expresses.

use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

use super::{ensure_parent_dir, OutputError, OutputResult};
use crate::locale::LocaleSpec;
use crate::StatementRow;

/// Fixed header line preceding the transaction rows
const HEADER: &str = "DATA;;";

/// Render one statement row as a `;`-delimited line (without newline)
///
/// Embedded `"` in descriptions are doubled so the quoted column stays
/// machine-readable.
fn render_row(locale: &LocaleSpec, row: &StatementRow) -> String {
    let marker = if row.amount < Decimal::ZERO { "D" } else { "C" };
    let date = locale.format_date(&row.date);
    let amount = locale.format_amount(row.amount.abs());
    let description = row.description.replace('"', "\"\"");

    format!("{date};\"{description}\";{amount};\"{marker}\"")
}

/// CSV writer for statement rows
pub struct CsvStatementWriter {
    writer: BufWriter<File>,
    locale: LocaleSpec,
    rows_written: u64,
}

impl CsvStatementWriter {
    /// Create the destination file and write the header line
    ///
    /// # Arguments
    /// * `path` - Output file path; the parent directory is created if needed
    /// * `locale` - Rendering rules for dates and amounts
    pub fn create<P: AsRef<Path>>(path: P, locale: LocaleSpec) -> OutputResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), locale = locale.tag(), "creating CSV statement writer");

        ensure_parent_dir(path)?;

        let file = File::create(path)
            .map_err(|e| OutputError::IoError(format!("failed to create file: {e}")))?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{HEADER}")
            .map_err(|e| OutputError::IoError(format!("failed to write header: {e}")))?;

        Ok(Self {
            writer,
            locale,
            rows_written: 0,
        })
    }

    /// Write a single statement row
    pub fn write_row(&mut self, row: &StatementRow) -> OutputResult<()> {
        let line = render_row(&self.locale, row);
        writeln!(self.writer, "{line}")
            .map_err(|e| OutputError::EncodeError(format!("failed to write row: {e}")))?;

        self.rows_written += 1;
        Ok(())
    }

    /// Write multiple statement rows in order
    pub fn write_rows(&mut self, rows: &[StatementRow]) -> OutputResult<()> {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Number of rows written so far
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush buffered data to disk
    pub fn flush(&mut self) -> OutputResult<()> {
        self.writer
            .flush()
            .map_err(|e| OutputError::FlushError(format!("failed to flush: {e}")))
    }

    /// Close the writer and finalize output
    pub fn close(mut self) -> OutputResult<()> {
        debug!(rows = self.rows_written, "closing CSV statement writer");

        self.flush()?;

        let file = self
            .writer
            .into_inner()
            .map_err(|e| OutputError::IoError(format!("failed to get file handle: {e}")))?;
        file.sync_all()
            .map_err(|e| OutputError::IoError(format!("failed to sync file: {e}")))?;

        info!(rows = self.rows_written, "CSV statement written");
        Ok(())
    }
}
