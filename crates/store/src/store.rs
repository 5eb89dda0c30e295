use chrono::NaiveDate;

use limelight_core::{DomainError, DomainResult, RecordId};
use limelight_roster::{DatasetError, Record, bundled, filter_by_name, normalize_all};

use crate::session::{EditSession, FieldEdit};

/// The single mutable store of a page session.
///
/// Owns the authoritative record set and the two ephemeral flows (edit
/// session, delete confirmation) plus the search query and expansion mark.
/// The displayed subset is never stored: [`RosterStore::displayed`]
/// recomputes it from the authoritative set and the current query, so the
/// two can not diverge.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    records: Vec<Record>,
    query: String,
    expanded: Option<RecordId>,
    edit: Option<EditSession>,
    pending_delete: Option<RecordId>,
}

impl RosterStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            query: String::new(),
            expanded: None,
            edit: None,
            pending_delete: None,
        }
    }

    /// Seed from the bundled dataset. Normalization runs exactly once here.
    pub fn seed() -> Result<Self, DatasetError> {
        Ok(Self::new(normalize_all(bundled()?)))
    }

    // ---- read surface -----------------------------------------------------

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id_typed() == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The displayed subset: a pure derivation, recomputed on every call.
    pub fn displayed(&self) -> Vec<&Record> {
        filter_by_name(&self.records, &self.query)
    }

    pub fn expanded(&self) -> Option<RecordId> {
        self.expanded
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn pending_delete(&self) -> Option<RecordId> {
        self.pending_delete
    }

    pub fn is_delete_open(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Whether the edit affordance for `id` should be enabled: no session
    /// open, the record exists, and it is not under 18.
    pub fn can_edit(&self, id: RecordId, today: NaiveDate) -> bool {
        self.edit.is_none() && self.get(id).is_some_and(|r| r.is_adult(today))
    }

    /// Age shown in the open edit form: staged once staged, live otherwise.
    pub fn staged_age_display(&self, today: NaiveDate) -> Option<i32> {
        let session = self.edit.as_ref()?;
        let record = self.get(session.target())?;
        session.display_age(record, today)
    }

    // ---- search -----------------------------------------------------------

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    // ---- expansion --------------------------------------------------------

    /// Expand or collapse a record's detail panel. Locked while an edit
    /// session is open.
    pub fn toggle_expanded(&mut self, id: RecordId) {
        if self.edit.is_some() {
            return;
        }
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    // ---- edit session -----------------------------------------------------

    /// Open an edit session on `id`, seeded from the record's current
    /// field values.
    ///
    /// Preconditions enforced here: no other session may be open
    /// (`Conflict`), and the record must not be under 18 (`Validation`).
    /// An id absent from the authoritative set is a no-op — preventing
    /// that is the controller's job, not this store's.
    pub fn begin_edit(&mut self, id: RecordId, today: NaiveDate) -> DomainResult<()> {
        if let Some(open) = &self.edit {
            return Err(DomainError::conflict(format!(
                "an edit session is already open for record {}",
                open.target()
            )));
        }

        let Some(record) = self.get(id) else {
            tracing::warn!(%id, "begin_edit ignored: unknown record id");
            return Ok(());
        };

        if !record.is_adult(today) {
            return Err(DomainError::validation(
                "records under 18 cannot be edited",
            ));
        }

        self.edit = Some(EditSession::open(record));
        Ok(())
    }

    /// Stage one field edit. Valid only while a session is open; otherwise
    /// a no-op. Per-field validation inside the session silently drops
    /// rejected input.
    pub fn stage(&mut self, edit: FieldEdit) {
        match &mut self.edit {
            Some(session) => session.apply(edit),
            None => tracing::debug!("stage ignored: no open edit session"),
        }
    }

    /// Whether the open session may commit: staged country non-empty after
    /// trimming and the staged snapshot structurally different from the
    /// record. False when no session is open.
    pub fn is_dirty(&self) -> bool {
        match &self.edit {
            Some(session) => self
                .get(session.target())
                .is_some_and(|record| session.is_dirty(record)),
            None => false,
        }
    }

    /// Merge the staged fields into the target record and close the
    /// session. Refused unless [`RosterStore::is_dirty`] holds.
    ///
    /// The committed `name` does not re-derive `first_name`/`last_name`,
    /// and a staged age freezes the record's `age_override` permanently.
    pub fn commit(&mut self) -> DomainResult<()> {
        if !self.is_dirty() {
            return Err(DomainError::invariant(
                "commit requires staged changes and a non-empty country",
            ));
        }

        // is_dirty() implies an open session with an existing target.
        if let Some(session) = self.edit.take() {
            let target = session.target();
            let staged = session.into_staged();
            if let Some(record) = self.records.iter_mut().find(|r| r.id_typed() == target) {
                record.name = staged.name;
                record.gender = staged.gender;
                record.country = staged.country;
                record.description = staged.description;
                if staged.age.is_some() {
                    record.age_override = staged.age;
                }
            }
        }

        Ok(())
    }

    /// Close the session without effect.
    pub fn discard(&mut self) {
        self.edit = None;
    }

    // ---- delete confirmation ----------------------------------------------

    /// Open the delete confirmation for `id`.
    ///
    /// No-op for an unknown id (controller precondition, as with
    /// `begin_edit`) and while an edit session is open — the delete
    /// affordance is unreachable during an edit.
    pub fn request_delete(&mut self, id: RecordId) {
        if self.edit.is_some() {
            tracing::debug!(%id, "request_delete ignored: edit session open");
            return;
        }
        if self.get(id).is_none() {
            tracing::warn!(%id, "request_delete ignored: unknown record id");
            return;
        }
        self.pending_delete = Some(id);
    }

    /// Remove the pending record from the authoritative set, close the
    /// confirmation, and reset the search query to empty. The query reset
    /// is a deliberate coupling of deletion to search state.
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        self.records.retain(|r| r.id_typed() != id);
        if self.expanded == Some(id) {
            self.expanded = None;
        }
        self.query.clear();
    }

    /// Close the confirmation without mutation.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}
