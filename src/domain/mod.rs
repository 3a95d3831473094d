//! Form definitions served to the Web UI
//!
//! The browser mirrors these types in `ui/src/types.rs`; both sides use the
//! same camelCase JSON keys.

use serde::{Deserialize, Serialize};

/// Type tag of a form field.
///
/// The set is closed, so a definition file with an unknown tag fails to
/// parse instead of rendering a field with no control.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Password,
    Radio,
    Checkbox,
    Select,
    Date,
    Tel,
}

impl FieldType {
    /// Whether the field draws its controls from `options`
    pub fn uses_options(self) -> bool {
        matches!(self, FieldType::Radio | FieldType::Checkbox | FieldType::Select)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub label: String,
    pub field_type: FieldType,
    /// Unique within a form
    pub field_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    pub name: String,
    pub title: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    pub fields: Vec<FieldDescriptor>,
}

fn default_submit_label() -> String {
    "Submit".to_string()
}

/// Entry of the form listing
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormSummary {
    pub name: String,
    pub title: String,
    pub field_count: usize,
}

impl From<&FormDefinition> for FormSummary {
    fn from(form: &FormDefinition) -> Self {
        Self {
            name: form.name.clone(),
            title: form.title.clone(),
            field_count: form.fields.len(),
        }
    }
}
