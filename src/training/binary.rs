//! Binary observation sink for high-volume corpora.

use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::warn;

use super::record::PickRecord;
use super::sink::ObservationSink;

/// Writes records as sequential bincode frames.
///
/// Several times denser than JSON lines; the format of choice when a
/// training run generates millions of picks. Frames are self-delimiting,
/// so [`read_records`] recovers the whole sequence without an index.
/// Write failures are counted and logged, never surfaced to the session.
pub struct BinarySink {
    writer: BufWriter<File>,
    written: usize,
    failures: usize,
}

impl BinarySink {
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

    /// Flush buffered frames and close the sink.
    pub fn finish(mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    fn write_frame(&mut self, record: &PickRecord) -> std::io::Result<()> {
        bincode::serialize_into(&mut self.writer, record).map_err(std::io::Error::other)?;
        // Flushed per record so a crashed training run keeps every
        // committed pick.
        self.writer.flush()
    }
}

impl ObservationSink for BinarySink {
    fn record_pick(&mut self, record: &PickRecord) {
        match self.write_frame(record) {
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

/// Read every frame a [`BinarySink`] wrote.
///
/// Loaders use this to stream a corpus back for encoding.
pub fn read_records<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<PickRecord>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut records = Vec::new();

    loop {
        match bincode::deserialize_from::<_, PickRecord>(&mut reader) {
            Ok(record) => records.push(record),
            Err(e) => {
                // Clean EOF between frames ends the stream; anything else
                // is a corrupt file.
                if let bincode::ErrorKind::Io(io_err) = &*e {
                    if io_err.kind() == std::io::ErrorKind::UnexpectedEof {
                        break;
                    }
                }
                return Err(std::io::Error::other(e));
            }
        }
    }

    Ok(records)
}
