//! Shared types for the dynaform Web UI
//!
//! These types mirror the backend form definitions served under `/api/forms`.

use serde::{Deserialize, Serialize};

// ============================================================================
// Field Type
// ============================================================================

/// Type tag of a form field. The set is closed: unknown tags fail to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
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
    /// HTML `type` attribute for single text-like inputs
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FieldType::Text => Some("text"),
            FieldType::Email => Some("email"),
            FieldType::Password => Some("password"),
            FieldType::Date => Some("date"),
            FieldType::Tel => Some("tel"),
            FieldType::Radio | FieldType::Checkbox | FieldType::Select => None,
        }
    }

    pub fn is_multi_valued(self) -> bool {
        self == FieldType::Checkbox
    }
}

// ============================================================================
// Field Descriptor
// ============================================================================

/// One entry of a form schema
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub label: String,
    pub field_type: FieldType,
    /// Mapping key and DOM identity key; unique within a schema
    pub field_name: String,
    /// Choices for radio, checkbox and select fields. Ignored otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    pub fn new(label: &str, field_type: FieldType, field_name: &str) -> Self {
        Self {
            label: label.to_string(),
            field_type,
            field_name: field_name.to_string(),
            options: vec![],
        }
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// DOM id of the control for one option: `{fieldName}-{option}`
    pub fn option_id(&self, option: &str) -> String {
        format!("{}-{}", self.field_name, option)
    }
}

// ============================================================================
// Form Definition
// ============================================================================

/// A named schema with the page title and submit button label
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    pub name: String,
    pub title: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    pub fields: Vec<FieldDescriptor>,
}

pub fn default_submit_label() -> String {
    "Submit".to_string()
}

/// Summary entry returned by `GET /api/forms`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSummary {
    pub name: String,
    pub title: String,
    pub field_count: usize,
}

/// Built-in farm form, used when the server cannot provide one
pub fn farm_form() -> FormDefinition {
    FormDefinition {
        name: "farm".to_string(),
        title: "Create a Farm".to_string(),
        submit_label: "Create Farm".to_string(),
        fields: vec![
            FieldDescriptor::new("First Name", FieldType::Text, "firstName"),
            FieldDescriptor::new("Last Name", FieldType::Text, "lastName"),
            FieldDescriptor::new("Gender", FieldType::Radio, "gender")
                .with_options(&["Male", "Female"]),
            FieldDescriptor::new("Crops", FieldType::Checkbox, "crops")
                .with_options(&["Wheat", "Corn", "Rice", "Barley"]),
            FieldDescriptor::new("Country", FieldType::Select, "country")
                .with_options(&["USA", "Canada", "UK", "Australia"]),
            FieldDescriptor::new("Email", FieldType::Email, "email"),
            FieldDescriptor::new("Phone Number", FieldType::Tel, "phoneNumber"),
            FieldDescriptor::new("Date of Birth", FieldType::Date, "dateOfBirth"),
        ],
    }
}
