//! Editing session facade.
//!
//! [`ParamEditor`] is what a host application talks to: it reconciles the
//! host's definitions and stored values once at construction, then routes
//! every user action to the [`RecordStore`]. New parameters go through a
//! [`ParamDraft`], so the add-form checks apply whether the draft was filled
//! in field by field or arrived as an [`EditorEvent`].

use serde::{Deserialize, Serialize};

use paramedit_core::{
    reconcile, Dataset, EditableRecord, Model, ParamDraft, ParamId, ParamType,
    ParameterDefinition,
};

use crate::error::EditorError;
use crate::store::{RecordStore, Snapshot};

/// A single user action against the editor.
///
/// Serialized with an `op` tag, e.g.
/// `{"op": "edit", "id": 2, "value": "midi"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditorEvent {
    /// Submit a new parameter through the add form.
    Add {
        name: String,
        #[serde(rename = "type", default)]
        ty: ParamType,
        #[serde(default)]
        value: String,
    },
    /// Change the value of an existing record.
    Edit { id: ParamId, value: String },
    /// Remove a record.
    Delete { id: ParamId },
}

/// One editing session over a reconciled record set.
#[derive(Debug, Clone, Default)]
pub struct ParamEditor {
    store: RecordStore,
    draft: ParamDraft,
}

impl ParamEditor {
    pub fn new(params: &[ParameterDefinition], model: &Model) -> Self {
        let records = reconcile(params, &model.param_values);
        tracing::info!(
            params = params.len(),
            records = records.len(),
            "editor session opened"
        );
        ParamEditor {
            store: RecordStore::new(records),
            draft: ParamDraft::default(),
        }
    }

    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self::new(&dataset.params, &dataset.model)
    }

    pub fn records(&self) -> &[EditableRecord] {
        self.store.records()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn draft(&self) -> &ParamDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ParamDraft {
        &mut self.draft
    }

    /// Submits the current draft as a new record with a freshly allocated id.
    ///
    /// A rejected draft is left as it was and no id is consumed.
    pub fn submit_draft(&mut self) -> Result<ParamId, EditorError> {
        self.draft.validate()?;
        let id = self.store.next_id();
        let record = self.draft.submit(id)?;
        self.store.add(record);
        Ok(id)
    }

    /// Appends a record as-is; the caller owns the id.
    pub fn add(&mut self, record: EditableRecord) {
        self.store.add(record);
    }

    pub fn edit(&mut self, id: ParamId, value: impl Into<String>) {
        self.store.edit(id, value);
    }

    pub fn delete(&mut self, id: ParamId) {
        self.store.delete(id);
    }

    /// Applies one event. Only `Add` can fail, when the add-form checks
    /// reject it; the in-progress draft is not touched either way.
    pub fn apply(&mut self, event: EditorEvent) -> Result<(), EditorError> {
        match event {
            EditorEvent::Add { name, ty, value } => {
                let mut draft = ParamDraft::new();
                draft.set_type(ty);
                draft.set_name(name);
                draft.set_value(value);
                draft.validate()?;
                let id = self.store.next_id();
                self.store.add(draft.submit(id)?);
            }
            EditorEvent::Edit { id, value } => self.store.edit(id, value),
            EditorEvent::Delete { id } => self.store.delete(id),
        }
        Ok(())
    }

    /// Pretty-printed JSON of the current records.
    pub fn dump(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(self.records())?)
    }
}
