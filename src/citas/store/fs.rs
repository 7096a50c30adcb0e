use super::RecordStore;
use crate::error::{CitasError, Result};
use crate::model::PatientRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the single persisted blob.
pub const STORE_FILENAME: &str = "patients.json";

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn blob_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CitasError::Io)?;
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Vec<PatientRecord>> {
        let path = self.blob_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(CitasError::Io)?;
        let records = serde_json::from_str(&content).map_err(CitasError::Serialization)?;
        Ok(records)
    }

    fn save(&mut self, records: &[PatientRecord]) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        let content = serde_json::to_string_pretty(records).map_err(CitasError::Serialization)?;
        fs::write(self.blob_path(), content).map_err(CitasError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use tempfile::TempDir;

    fn record(id: &str, patient: &str) -> PatientRecord {
        PatientRecord {
            id: id.to_string(),
            patient: patient.to_string(),
            owner: "Ana".to_string(),
            email: "a@x.com".to_string(),
            phone: "5551234567".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap(),
            symptoms: "cough".to_string(),
        }
    }

    #[test]
    fn missing_blob_loads_as_empty_list() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let records = vec![record("aaaa1111", "Rex"), record("bbbb2222", "Luna")];

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn save_of_empty_list_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save(&[record("aaaa1111", "Rex")]).unwrap();

        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_blob_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        fs::write(store.blob_path(), "not json").unwrap();

        assert!(matches!(
            store.load(),
            Err(CitasError::Serialization(_))
        ));
    }
}
