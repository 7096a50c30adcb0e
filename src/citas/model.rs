use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single appointment entry for one patient.
///
/// `id` is assigned by [`generate_id`] when the record is created and never
/// changes afterwards; every other field is replaced wholesale on update.
/// The field names are the persisted JSON schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    pub patient: String,
    pub owner: String,
    pub email: String,
    pub phone: String,
    pub date: DateTime<Utc>,
    pub symptoms: String,
}

/// Generate a short record identifier: the first 8 hex characters of a v4
/// UUID. There is no collision check; 32 bits of randomness is plenty for a
/// dataset entered by hand on one device (hundreds of records).
pub fn generate_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..8].to_string()
}
