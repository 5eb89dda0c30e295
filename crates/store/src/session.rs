use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use limelight_core::RecordId;
use limelight_roster::{Gender, Record, is_name_like, parse_age_input};

/// One staged-field update against the open edit session.
///
/// Carries the raw presentation-layer input; validation happens on apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    /// Raw age input; a trailing `" Years"` unit suffix is tolerated.
    Age(String),
    Gender(String),
    Country(String),
    Description(String),
}

/// Snapshot of a record's editable fields.
///
/// `age` mirrors the record's override — it stays `None` for records whose
/// age has never been staged, so staging any age (even the displayed one)
/// is a structural change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedFields {
    pub name: String,
    pub age: Option<i32>,
    pub gender: String,
    pub country: String,
    pub description: String,
}

impl StagedFields {
    pub fn snapshot(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age_override,
            gender: record.gender.clone(),
            country: record.country.clone(),
            description: record.description.clone(),
        }
    }
}

/// At most one edit session is open per store; exclusivity is enforced by
/// [`RosterStore::begin_edit`](crate::store::RosterStore::begin_edit).
///
/// Lifecycle: opened seeded from the target record, mutated field-by-field
/// through [`EditSession::apply`], consumed on commit or dropped on discard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    target: RecordId,
    staged: StagedFields,
}

impl EditSession {
    pub(crate) fn open(record: &Record) -> Self {
        Self {
            target: record.id_typed(),
            staged: StagedFields::snapshot(record),
        }
    }

    pub fn target(&self) -> RecordId {
        self.target
    }

    pub fn staged(&self) -> &StagedFields {
        &self.staged
    }

    pub(crate) fn into_staged(self) -> StagedFields {
        self.staged
    }

    /// Apply one field edit with the reject-and-keep-previous policy:
    /// input that fails its field's validation is dropped without touching
    /// the staged value, and no error surfaces.
    pub(crate) fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(value) => {
                if is_name_like(&value) {
                    self.staged.name = value;
                } else {
                    tracing::debug!(id = %self.target, "rejected staged name");
                }
            }
            FieldEdit::Age(raw) => match parse_age_input(&raw) {
                Some(age) => self.staged.age = Some(age),
                None => tracing::debug!(id = %self.target, "rejected staged age"),
            },
            FieldEdit::Gender(value) => {
                if value.parse::<Gender>().is_ok() {
                    self.staged.gender = value;
                } else {
                    tracing::debug!(id = %self.target, "rejected staged gender");
                }
            }
            FieldEdit::Country(value) => {
                if is_name_like(&value) {
                    self.staged.country = value;
                } else {
                    tracing::debug!(id = %self.target, "rejected staged country");
                }
            }
            FieldEdit::Description(value) => {
                self.staged.description = value;
            }
        }
    }

    /// Commit gate: the staged country must be non-empty after trimming AND
    /// the staged snapshot must differ structurally from the record's
    /// current editable fields. Both conditions together — an unmodified
    /// session is never dirty, and neither is one with a blank country,
    /// however many other fields changed.
    pub fn is_dirty(&self, original: &Record) -> bool {
        !self.staged.country.trim().is_empty()
            && self.staged != StagedFields::snapshot(original)
    }

    /// Age shown in the edit form: the staged value once one exists,
    /// otherwise the record's live-computed age.
    pub fn display_age(&self, record: &Record, today: NaiveDate) -> Option<i32> {
        self.staged.age.or_else(|| record.age(today))
    }
}
