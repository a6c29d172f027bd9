//! The parameter data model.
//!
//! Hosts supply [`ParameterDefinition`]s and a [`Model`] of [`StoredValue`]s;
//! reconciliation joins them into [`EditableRecord`]s, the unit the editor
//! works on. The serialized shapes follow the host's JSON conventions
//! (`paramId`, `paramValues`, lowercase type names).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::ParamId;

/// Kind of value a parameter holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    String,
    Number,
    Select,
}

impl ParamType {
    /// All parameter types, in the order the add form offers them.
    pub const ALL: [ParamType; 3] = [ParamType::String, ParamType::Number, ParamType::Select];

    pub fn as_str(self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Select => "select",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamType::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownParamType {
                name: s.to_string(),
            })
    }
}

/// Static descriptor of an editable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub id: ParamId,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ParamType,
}

impl ParameterDefinition {
    pub fn new(id: impl Into<ParamId>, name: impl Into<String>, ty: ParamType) -> Self {
        ParameterDefinition {
            id: id.into(),
            name: name.into(),
            ty,
        }
    }
}

/// The stored value of one parameter, keyed by the definition's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredValue {
    pub param_id: ParamId,
    pub value: String,
}

impl StoredValue {
    pub fn new(param_id: impl Into<ParamId>, value: impl Into<String>) -> Self {
        StoredValue {
            param_id: param_id.into(),
            value: value.into(),
        }
    }
}

/// A definition joined with its value: what the editor lists and mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableRecord {
    pub id: ParamId,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ParamType,
    pub value: String,
}

impl EditableRecord {
    pub fn new(
        id: impl Into<ParamId>,
        name: impl Into<String>,
        ty: ParamType,
        value: impl Into<String>,
    ) -> Self {
        EditableRecord {
            id: id.into(),
            name: name.into(),
            ty,
            value: value.into(),
        }
    }

    /// Builds a record from a definition and the value stored for it.
    pub fn from_parts(def: &ParameterDefinition, value: &StoredValue) -> Self {
        EditableRecord {
            id: def.id,
            name: def.name.clone(),
            ty: def.ty,
            value: value.value.clone(),
        }
    }
}

/// Stored values for a model, as handed over by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub param_values: Vec<StoredValue>,
}

/// Everything a host supplies to open an editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub params: Vec<ParameterDefinition>,
    #[serde(default)]
    pub model: Model,
}

impl Dataset {
    /// Parses a dataset from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The built-in two-parameter sample (a garment's purpose and length).
    pub fn sample() -> Self {
        Dataset {
            params: vec![
                ParameterDefinition::new(1, "Назначение", ParamType::String),
                ParameterDefinition::new(2, "Длина", ParamType::String),
            ],
            model: Model {
                param_values: vec![
                    StoredValue::new(1, "повседневное"),
                    StoredValue::new(2, "макси"),
                ],
            },
        }
    }
}
