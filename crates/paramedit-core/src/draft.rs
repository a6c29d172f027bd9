//! Add-form state for new parameters.
//!
//! [`ParamDraft`] holds whatever the user has typed into the add form. The
//! value is a [`DraftValue`] whose variant is the selected parameter type, so
//! a select draft simply has no value to type into. Switching the type always
//! starts the value over.
//!
//! [`ParamDraft::validate`] is the form's submission gate. The record store
//! does not repeat it: anything that reaches the store is accepted.

use crate::error::DraftError;
use crate::id::ParamId;
use crate::types::{EditableRecord, ParamType};

/// Placeholder shown in place of a value for select drafts.
pub const SELECT_PLACEHOLDER: &str = "Должна быть только строка";

/// Value being typed into the add form, tagged with the chosen type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValue {
    Text(String),
    /// Raw input for a number field; not parsed.
    Number(String),
    Select,
}

impl DraftValue {
    /// An empty value of the given type.
    pub fn empty(ty: ParamType) -> Self {
        match ty {
            ParamType::String => DraftValue::Text(String::new()),
            ParamType::Number => DraftValue::Number(String::new()),
            ParamType::Select => DraftValue::Select,
        }
    }

    pub fn param_type(&self) -> ParamType {
        match self {
            DraftValue::Text(_) => ParamType::String,
            DraftValue::Number(_) => ParamType::Number,
            DraftValue::Select => ParamType::Select,
        }
    }

    /// Text the form displays in the value field.
    pub fn display(&self) -> &str {
        match self {
            DraftValue::Text(s) | DraftValue::Number(s) => s,
            DraftValue::Select => SELECT_PLACEHOLDER,
        }
    }
}

impl Default for DraftValue {
    fn default() -> Self {
        DraftValue::empty(ParamType::default())
    }
}

/// In-progress add-form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamDraft {
    pub name: String,
    pub value: DraftValue,
}

impl ParamDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param_type(&self) -> ParamType {
        self.value.param_type()
    }

    /// Switches the draft to `ty`, clearing any value typed so far.
    pub fn set_type(&mut self, ty: ParamType) {
        self.value = DraftValue::empty(ty);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the typed value. Select drafts have no value and ignore this.
    pub fn set_value(&mut self, value: impl Into<String>) {
        match &mut self.value {
            DraftValue::Text(s) | DraftValue::Number(s) => *s = value.into(),
            DraftValue::Select => {}
        }
    }

    /// Checks the draft against the form's submission rules.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::EmptyName);
        }
        match &self.value {
            DraftValue::Select => Err(DraftError::SelectNotSubmittable),
            DraftValue::Text(s) | DraftValue::Number(s) if s.trim().is_empty() => {
                Err(DraftError::EmptyValue)
            }
            DraftValue::Text(_) | DraftValue::Number(_) => Ok(()),
        }
    }

    /// Whether the submit button would be enabled.
    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Turns the draft into a record with the given id and resets the form.
    ///
    /// On error the draft is left untouched. Name and value are kept exactly
    /// as typed.
    pub fn submit(&mut self, id: ParamId) -> Result<EditableRecord, DraftError> {
        self.validate()?;
        let draft = std::mem::take(self);
        let ty = draft.param_type();
        let value = match draft.value {
            DraftValue::Text(s) | DraftValue::Number(s) => s,
            DraftValue::Select => String::new(),
        };
        Ok(EditableRecord {
            id,
            name: draft.name,
            ty,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(ty: ParamType, name: &str, value: &str) -> ParamDraft {
        let mut draft = ParamDraft::new();
        draft.set_type(ty);
        draft.set_name(name);
        draft.set_value(value);
        draft
    }

    #[test]
    fn default_is_empty_string_draft() {
        let draft = ParamDraft::new();
        assert_eq!(draft.param_type(), ParamType::String);
        assert_eq!(draft.value, DraftValue::Text(String::new()));
        assert!(!draft.is_submittable());
    }

    #[test]
    fn set_type_clears_value() {
        let mut draft = filled(ParamType::String, "Length", "maxi");
        draft.set_type(ParamType::Number);
        assert_eq!(draft.value, DraftValue::Number(String::new()));
        assert_eq!(draft.name, "Length");
    }

    #[test]
    fn set_name_keeps_value() {
        let mut draft = filled(ParamType::String, "Len", "maxi");
        draft.set_name("Length");
        assert_eq!(draft.value.display(), "maxi");
    }

    #[test]
    fn select_ignores_value_and_shows_placeholder() {
        let mut draft = filled(ParamType::Select, "Color", "red");
        assert_eq!(draft.value, DraftValue::Select);
        assert_eq!(draft.value.display(), SELECT_PLACEHOLDER);
        draft.set_value("blue");
        assert_eq!(draft.value, DraftValue::Select);
    }

    #[test]
    fn validate_rejects_blank_fields() {
        assert_eq!(
            filled(ParamType::String, "   ", "x").validate(),
            Err(DraftError::EmptyName)
        );
        assert_eq!(
            filled(ParamType::Number, "Size", " \t").validate(),
            Err(DraftError::EmptyValue)
        );
    }

    #[test]
    fn validate_rejects_select() {
        assert_eq!(
            filled(ParamType::Select, "Color", "").validate(),
            Err(DraftError::SelectNotSubmittable)
        );
    }

    #[test]
    fn submit_builds_record_and_resets() {
        let mut draft = filled(ParamType::Number, " Size ", "42");
        let record = draft.submit(ParamId(10)).unwrap();

        assert_eq!(record, EditableRecord::new(10, " Size ", ParamType::Number, "42"));
        assert_eq!(draft, ParamDraft::default());
    }

    #[test]
    fn failed_submit_keeps_draft() {
        let mut draft = filled(ParamType::String, "Name", "");
        let before = draft.clone();
        assert_eq!(draft.submit(ParamId(1)), Err(DraftError::EmptyValue));
        assert_eq!(draft, before);
    }
}
