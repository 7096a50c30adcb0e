//! # Patient Repository
//!
//! The repository owns the authoritative in-memory list of appointments,
//! in insertion order (which is also display order — there is no sort).
//! Every mutation rewrites the full list through the store; the in-memory
//! list stays authoritative for reads even when a save fails (the failure is
//! logged and nothing is rolled back). A missing id is a normal outcome, not
//! an error: `update` and `delete` signal it with `None` and leave the list
//! untouched.

use crate::model::{generate_id, PatientRecord};
use crate::session::Draft;
use crate::store::RecordStore;
use tracing::warn;

pub struct PatientRepository<S: RecordStore> {
    records: Vec<PatientRecord>,
    store: S,
}

impl<S: RecordStore> PatientRepository<S> {
    /// Load the persisted list from the store. An unreadable blob is logged
    /// and the repository starts empty rather than failing.
    pub fn open(store: S) -> Self {
        let records = match store.load() {
            Ok(records) => records,
            Err(e) => {
                warn!("could not load appointments, starting empty: {}", e);
                Vec::new()
            }
        };
        Self { records, store }
    }

    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Linear scan by id.
    pub fn find_by_id(&self, id: &str) -> Option<&PatientRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Append a new record built from the draft, with a freshly generated id.
    pub fn create(&mut self, draft: &Draft) -> PatientRecord {
        let record = draft.to_record(generate_id());
        self.records.push(record.clone());
        self.persist();
        record
    }

    /// Replace the record matching `id` with the draft's fields, keeping the
    /// id and the record's position. `None` if the id is no longer present.
    pub fn update(&mut self, id: &str, draft: &Draft) -> Option<PatientRecord> {
        self.find_by_id(id)?;
        let updated = draft.to_record(id.to_string());
        self.records = self
            .records
            .iter()
            .map(|r| if r.id == id { updated.clone() } else { r.clone() })
            .collect();
        self.persist();
        Some(updated)
    }

    /// Remove the record matching `id`, returning it. `None` (and no save)
    /// if the id is absent, so deleting twice is a no-op.
    pub fn delete(&mut self, id: &str) -> Option<PatientRecord> {
        let removed = self.find_by_id(id).cloned()?;
        self.records = self
            .records
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        self.persist();
        Some(removed)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // In-memory state is not rolled back on a failed save; the divergence
    // heals on the next successful save.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.records) {
            warn!("could not persist appointments: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Draft;
    use crate::store::memory::InMemoryStore;
    use chrono::{TimeZone, Utc};

    fn rex_draft() -> Draft {
        let mut draft = Draft::empty();
        draft.patient = "Rex".to_string();
        draft.owner = "Ana".to_string();
        draft.email = "a@x.com".to_string();
        draft.phone = "5551234567".to_string();
        draft.date = Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap();
        draft.symptoms = "cough".to_string();
        draft
    }

    fn luna_draft() -> Draft {
        let mut draft = rex_draft();
        draft.patient = "Luna".to_string();
        draft.symptoms = "limp".to_string();
        draft
    }

    #[test]
    fn create_appends_one_record_and_persists_it() {
        let mut repo = PatientRepository::open(InMemoryStore::new());

        let record = repo.create(&rex_draft());

        assert_eq!(repo.len(), 1);
        assert_eq!(record.id.len(), 8);
        assert_eq!(record.patient, "Rex");
        assert_eq!(repo.store().saved(), repo.records());
        assert_eq!(repo.store().save_calls(), 1);
    }

    #[test]
    fn created_records_get_distinct_ids() {
        let mut repo = PatientRepository::open(InMemoryStore::new());
        let first = repo.create(&rex_draft());
        let second = repo.create(&luna_draft());

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn update_replaces_fields_but_keeps_id_position_and_neighbours() {
        let mut repo = PatientRepository::open(InMemoryStore::new());
        let rex = repo.create(&rex_draft());
        let luna = repo.create(&luna_draft());

        let mut draft = rex_draft();
        draft.symptoms = "fever".to_string();
        let updated = repo.update(&rex.id, &draft).unwrap();

        assert_eq!(repo.len(), 2);
        assert_eq!(updated.id, rex.id);
        assert_eq!(updated.symptoms, "fever");
        assert_eq!(repo.records()[0], updated);
        assert_eq!(repo.records()[1], luna);
        assert_eq!(repo.store().saved(), repo.records());
    }

    #[test]
    fn update_of_unknown_id_changes_nothing() {
        let mut repo = PatientRepository::open(InMemoryStore::new());
        repo.create(&rex_draft());
        let saves_before = repo.store().save_calls();

        assert!(repo.update("deadbeef", &luna_draft()).is_none());
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.records()[0].patient, "Rex");
        assert_eq!(repo.store().save_calls(), saves_before);
    }

    #[test]
    fn delete_removes_the_record_and_persists_the_empty_list() {
        let mut repo = PatientRepository::open(InMemoryStore::new());
        let rex = repo.create(&rex_draft());

        let removed = repo.delete(&rex.id).unwrap();

        assert_eq!(removed.patient, "Rex");
        assert!(repo.is_empty());
        assert!(repo.store().saved().is_empty());
    }

    #[test]
    fn deleting_twice_is_a_signalled_noop() {
        let mut repo = PatientRepository::open(InMemoryStore::new());
        let rex = repo.create(&rex_draft());

        assert!(repo.delete(&rex.id).is_some());
        let saves_before = repo.store().save_calls();

        assert!(repo.delete(&rex.id).is_none());
        assert!(repo.is_empty());
        assert_eq!(repo.store().save_calls(), saves_before);
    }

    #[test]
    fn find_by_id_misses_are_not_errors() {
        let repo = PatientRepository::open(InMemoryStore::new());
        assert!(repo.find_by_id("deadbeef").is_none());
    }

    #[test]
    fn failed_save_keeps_in_memory_state_authoritative() {
        let mut repo = PatientRepository::open(InMemoryStore::failing());

        let record = repo.create(&rex_draft());

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find_by_id(&record.id).unwrap().patient, "Rex");
        assert!(repo.store().saved().is_empty());
    }
}
