//! Observation records and persistence sinks for training data.
//!
//! Every committed pick produces one [`PickRecord`]: the pack exactly as
//! the participant saw it, their pool before the pick, and the chosen
//! card. Supervised learning on draft picks consumes these records; the
//! engine itself never reads them back.
//!
//! ## Sinks
//!
//! - [`MemorySink`]: collects records in a `Vec` for in-process consumers
//! - [`JsonlSink`]: one JSON object per line, human-greppable
//! - [`BinarySink`]: sequential bincode frames for high-volume corpora
//!
//! Persistence failure is the sink's concern: sinks count and log their
//! own errors and never abort the draft that feeds them.

pub mod binary;
pub mod jsonl;
pub mod record;
pub mod sink;

pub use binary::{read_records, BinarySink};
pub use jsonl::JsonlSink;
pub use record::PickRecord;
pub use sink::{MemorySink, ObservationSink};
