//! # Form Session
//!
//! The transient editable state of the appointment form. Exactly one session
//! exists per UI, and it moves `Closed → Creating | Editing → Closed`. The
//! draft never reaches the repository until `submit` validates it; `cancel`
//! throws the draft away without touching the repository.

use crate::dates::format_date;
use crate::error::{CitasError, Result};
use crate::model::PatientRecord;
use crate::repo::PatientRepository;
use crate::store::RecordStore;
use chrono::{DateTime, Utc};

/// Upper bound on the owner phone field, matching the form input cap.
pub const PHONE_MAX_LEN: usize = 10;

/// Shown for the date field until a date has been picked.
pub const DATE_PLACEHOLDER: &str = "Select a date...";

/// The in-progress form state. `date` defaults to "now" when the form opens;
/// `date_selected` tracks whether the user actually picked it, which only
/// affects how the field is displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub patient: String,
    pub owner: String,
    pub email: String,
    pub phone: String,
    pub date: DateTime<Utc>,
    pub date_selected: bool,
    pub symptoms: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self::empty()
    }
}

impl Draft {
    pub fn empty() -> Self {
        Self {
            patient: String::new(),
            owner: String::new(),
            email: String::new(),
            phone: String::new(),
            date: Utc::now(),
            date_selected: false,
            symptoms: String::new(),
        }
    }

    fn from_record(record: &PatientRecord) -> Self {
        Self {
            patient: record.patient.clone(),
            owner: record.owner.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            date: record.date,
            date_selected: true,
            symptoms: record.symptoms.clone(),
        }
    }

    pub(crate) fn to_record(&self, id: String) -> PatientRecord {
        PatientRecord {
            id,
            patient: self.patient.clone(),
            owner: self.owner.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            date: self.date,
            symptoms: self.symptoms.clone(),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.patient.is_empty() {
            missing.push("patient");
        }
        if self.owner.is_empty() {
            missing.push("owner");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        if self.phone.is_empty() {
            missing.push("phone");
        }
        if self.symptoms.is_empty() {
            missing.push("symptoms");
        }
        missing
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Closed,
    Creating,
    /// Editing an existing record; the carried id decides that `submit`
    /// commits as an update rather than a create.
    Editing { id: String },
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Closed
    }
}

/// What a successful `submit` did.
#[derive(Debug)]
pub enum SubmitOutcome {
    Created(PatientRecord),
    Updated(PatientRecord),
    /// The record under edit was deleted before the commit; the draft was
    /// dropped and nothing changed.
    Discarded,
}

#[derive(Default)]
pub struct FormSession {
    state: FormState,
    draft: Draft,
    picker_open: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the form for a new appointment, with every field reset.
    pub fn open_new(&mut self) {
        self.draft = Draft::empty();
        self.picker_open = false;
        self.state = FormState::Creating;
    }

    /// Open the form pre-populated with an existing record's fields.
    pub fn open_edit(&mut self, record: &PatientRecord) {
        self.draft = Draft::from_record(record);
        self.picker_open = false;
        self.state = FormState::Editing {
            id: record.id.clone(),
        };
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_patient(&mut self, value: impl Into<String>) {
        self.draft.patient = value.into();
    }

    pub fn set_owner(&mut self, value: impl Into<String>) {
        self.draft.owner = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.draft.email = value.into();
    }

    /// Phone input is capped at [`PHONE_MAX_LEN`] characters.
    pub fn set_phone(&mut self, value: &str) {
        self.draft.phone = value.chars().take(PHONE_MAX_LEN).collect();
    }

    pub fn set_symptoms(&mut self, value: impl Into<String>) {
        self.draft.symptoms = value.into();
    }

    pub fn open_date_picker(&mut self) {
        self.picker_open = true;
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    /// Confirm a picked date: the draft date is set and marked as selected.
    pub fn confirm_date(&mut self, date: DateTime<Utc>) {
        self.draft.date = date;
        self.draft.date_selected = true;
        self.picker_open = false;
    }

    /// Dismiss the picker, leaving the prior draft date and marker untouched.
    pub fn cancel_date_picker(&mut self) {
        self.picker_open = false;
    }

    /// What the date field shows: the placeholder prompt until a date has
    /// been picked, the formatted date afterwards.
    pub fn date_display(&self) -> String {
        if self.draft.date_selected {
            format_date(Some(&self.draft.date))
        } else {
            DATE_PLACEHOLDER.to_string()
        }
    }

    /// Validate the draft and commit it to the repository.
    ///
    /// A draft with any required text field empty is a [`CitasError::Validation`]
    /// and the form stays open, with no repository mutation and no save. A
    /// valid draft commits as a create (no carried id) or an update (carried
    /// id), then the form closes and the draft is cleared. An update whose
    /// target vanished commits as [`SubmitOutcome::Discarded`].
    pub fn submit<S: RecordStore>(
        &mut self,
        repo: &mut PatientRepository<S>,
    ) -> Result<SubmitOutcome> {
        if !self.is_open() {
            return Err(CitasError::Api("no form is open".to_string()));
        }

        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            return Err(CitasError::Validation(missing.join(", ")));
        }

        let outcome = if let FormState::Editing { id } = &self.state {
            match repo.update(id, &self.draft) {
                Some(record) => SubmitOutcome::Updated(record),
                None => SubmitOutcome::Discarded,
            }
        } else {
            SubmitOutcome::Created(repo.create(&self.draft))
        };

        self.close();
        Ok(outcome)
    }

    /// Close the form and discard any edits without touching the repository.
    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.state = FormState::Closed;
        self.draft = Draft::empty();
        self.picker_open = false;
    }
}
