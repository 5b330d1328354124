//! NDJSON (newline-delimited JSON) stream sink.
//!
//! Zero-alloc hot path: each row is serialized directly to the writer
//! without an intermediate `String`.
//!
//! ```ignore
//! let mut sink = NdjsonSink::stdout();
//! sink.write_summary(&summary)?;
//! sink.write_causes(&causes)?;
//! let rows = sink.finish()?;
//! ```

use super::{CauseRow, ReportSummaryRow};
use std::io::{self, BufWriter, Write};

/// NDJSON row writer.
///
/// Wraps any `Write` in a `BufWriter` for batch I/O. Each row goes through
/// `serde_json::to_writer` followed by a single newline.
pub struct NdjsonSink<W: Write> {
    writer: BufWriter<W>,
    rows_written: usize,
}

impl NdjsonSink<io::Stdout> {
    /// Write NDJSON to stdout.
    pub fn stdout() -> Self {
        Self {
            writer: BufWriter::with_capacity(64 * 1024, io::stdout()),
            rows_written: 0,
        }
    }
}

impl<W: Write> NdjsonSink<W> {
    /// Create a sink wrapping any writer (file, `Vec<u8>`, etc.).
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(64 * 1024, writer),
            rows_written: 0,
        }
    }

    /// Write one report summary row.
    pub fn write_summary(&mut self, row: &ReportSummaryRow) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, row)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        self.writer.write_all(b"\n")?;
        self.rows_written += 1;
        Ok(())
    }

    /// Write all cause rows.
    pub fn write_causes(&mut self, rows: &[CauseRow]) -> io::Result<()> {
        for row in rows {
            serde_json::to_writer(&mut self.writer, row)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            self.writer.write_all(b"\n")?;
            self.rows_written += 1;
        }
        Ok(())
    }

    /// Flush and return how many rows were written.
    pub fn finish(mut self) -> io::Result<usize> {
        self.writer.flush()?;
        Ok(self.rows_written)
    }

    /// Number of rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }
}
