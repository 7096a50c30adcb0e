//! # Storage Layer
//!
//! The [`RecordStore`] trait abstracts how the appointment list is persisted.
//! The whole dataset lives in a single serialized blob: `load` reads it all,
//! `save` rewrites it all. There is no incremental persistence — the dataset
//! is bounded by manual single-device data entry, so a full rewrite per
//! mutation is fine.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON array in `patients.json`
//!   under the application data directory
//! - [`memory::InMemoryStore`]: in-memory storage for testing; counts save
//!   calls and can be made to fail them

use crate::error::Result;
use crate::model::PatientRecord;

pub mod fs;
pub mod memory;

/// Abstract interface for appointment persistence.
pub trait RecordStore {
    /// Read the persisted blob. An absent blob is an empty list; a blob that
    /// cannot be read or parsed is an error.
    fn load(&self) -> Result<Vec<PatientRecord>>;

    /// Serialize the full list and overwrite the blob.
    fn save(&mut self, records: &[PatientRecord]) -> Result<()>;
}
