use super::RecordStore;
use crate::error::{CitasError, Result};
use crate::model::PatientRecord;

/// In-memory storage for testing and development.
/// Holds the last saved blob and counts save calls, so tests can assert on
/// what was persisted and when.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<PatientRecord>,
    save_calls: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `save` always fails, for exercising the persistence
    /// failure policy.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// The last successfully saved blob.
    pub fn saved(&self) -> &[PatientRecord] {
        &self.records
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<PatientRecord>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[PatientRecord]) -> Result<()> {
        self.save_calls += 1;
        if self.fail_saves {
            return Err(CitasError::Store("saving is disabled".to_string()));
        }
        self.records = records.to_vec();
        Ok(())
    }
}
