//! The working set of editable records.
//!
//! [`RecordStore`] keeps the records in insertion order behind an
//! `Arc<[EditableRecord]>`. Mutations never touch the current slice in
//! place; they build the next one and swap it in, so every [`Snapshot`]
//! stays frozen at the moment it was taken.
//!
//! Missing ids are not errors: `edit` and `delete` on an unknown id leave the
//! store exactly as it was.

use std::sync::Arc;

use paramedit_core::{EditableRecord, ParamId};

/// Immutable view of the record set at one point in time.
pub type Snapshot = Arc<[EditableRecord]>;

/// Ordered, snapshotting store of editable records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Snapshot,
    /// Lower bound for the next allocated id; above every id ever stored.
    next_id: ParamId,
}

impl RecordStore {
    /// Creates a store over the given records, keeping their order.
    pub fn new(records: Vec<EditableRecord>) -> Self {
        let next_id = records
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or(ParamId(0))
            .max(ParamId(0))
            .next();
        RecordStore {
            records: records.into(),
            next_id,
        }
    }

    /// Borrows the current records.
    pub fn records(&self) -> &[EditableRecord] {
        &self.records
    }

    /// Returns the current snapshot. Cheap: only the `Arc` is cloned.
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: ParamId) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// First record with the given id.
    pub fn get(&self, id: ParamId) -> Option<&EditableRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Allocates an id for a new record.
    ///
    /// Ids come from a monotonic counter that is kept above every id the
    /// store has held, so an allocated id is never in use by a live record.
    pub fn next_id(&mut self) -> ParamId {
        let mut candidate = self.next_id;
        self.next_id = candidate.next();
        if self.contains(candidate) {
            // Counter saturated at i64::MAX; fall back to the lowest free id.
            candidate = (1..)
                .map(ParamId)
                .find(|id| !self.contains(*id))
                .unwrap_or(candidate);
        }
        candidate
    }

    /// Appends a record. Ids are not checked for uniqueness.
    pub fn add(&mut self, record: EditableRecord) {
        if record.id >= self.next_id {
            self.next_id = record.id.next();
        }
        let id = record.id;
        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.extend(self.records.iter().cloned());
        next.push(record);
        self.records = next.into();
        tracing::debug!(%id, len = self.records.len(), "record added");
    }

    /// Removes every record with the given id.
    pub fn delete(&mut self, id: ParamId) {
        if !self.contains(id) {
            tracing::trace!(%id, "delete of unknown record ignored");
            return;
        }
        let next: Vec<EditableRecord> = self
            .records
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        self.records = next.into();
        tracing::debug!(%id, len = self.records.len(), "record deleted");
    }

    /// Replaces the value of the record with the given id, keeping order and
    /// every other field.
    pub fn edit(&mut self, id: ParamId, value: impl Into<String>) {
        if !self.contains(id) {
            tracing::trace!(%id, "edit of unknown record ignored");
            return;
        }
        let value = value.into();
        let next: Vec<EditableRecord> = self
            .records
            .iter()
            .map(|r| {
                if r.id == id {
                    EditableRecord {
                        value: value.clone(),
                        ..r.clone()
                    }
                } else {
                    r.clone()
                }
            })
            .collect();
        self.records = next.into();
        tracing::debug!(%id, "record value edited");
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
