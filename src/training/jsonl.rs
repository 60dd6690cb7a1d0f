//! JSON-lines observation sink.

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::warn;

use super::record::PickRecord;
use super::sink::ObservationSink;

/// Writes one JSON object per line to a file.
///
/// The format downstream tooling greps and pandas reads without a schema.
/// Write failures are counted and logged, never surfaced to the session:
/// a full disk costs training records, not the draft.
pub struct JsonlSink {
    writer: BufWriter<File>,
    written: usize,
    failures: usize,
}

impl JsonlSink {
    /// Create (or truncate) the log file, creating parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            written: 0,
            failures: 0,
        })
    }

    /// Records successfully written.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Records lost to write failures.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Flush buffered records and close the sink.
    pub fn finish(mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    fn write_line(&mut self, record: &PickRecord) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, record).map_err(std::io::Error::other)?;
        self.writer.write_all(b"\n")?;
        // Flushed per record so a crashed training run keeps every
        // committed pick.
        self.writer.flush()
    }
}

impl ObservationSink for JsonlSink {
    fn record_pick(&mut self, record: &PickRecord) {
        match self.write_line(record) {
            Ok(()) => self.written += 1,
            Err(error) => {
                self.failures += 1;
                warn!(
                    session_id = record.session_id,
                    round = record.round_number,
                    pick = record.pick_number,
                    %error,
                    "dropped pick record"
                );
            }
        }
    }
}
