//! Controlled form state
//!
//! A single mapping from field name to current value. Every edit produces a
//! new `FormState`; the previous value is never mutated, so signal observers
//! always see a fresh object per change.

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::FieldDescriptor;

// ============================================================================
// Field Value
// ============================================================================

/// Current value of one field
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single-valued fields (text-like, radio, select)
    Text(String),
    /// Checkbox fields: selected options, insertion ordered, no duplicates
    Choices(Vec<String>),
}

// ============================================================================
// Field Edit
// ============================================================================

/// A change event coming from one control
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEdit {
    /// New raw value from a text-like input, a radio or a select
    Value(String),
    /// A checkbox for `option` was checked or unchecked
    Toggle { option: String, checked: bool },
}

// ============================================================================
// Form State
// ============================================================================

/// Mapping from field name to value. Absent key means empty value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormState {
    values: IndexMap<String, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Single value for `name`, or `""` when unset or multi-valued
    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    /// Selected options for `name`, empty when unset or single-valued
    pub fn choices(&self, name: &str) -> &[String] {
        match self.values.get(name) {
            Some(FieldValue::Choices(choices)) => choices,
            _ => &[],
        }
    }

    /// Checked state of the control for `option`: equality for a single
    /// value, membership for a choice set.
    pub fn is_selected(&self, name: &str, option: &str) -> bool {
        match self.values.get(name) {
            Some(FieldValue::Text(value)) => value == option,
            Some(FieldValue::Choices(choices)) => choices.iter().any(|c| c == option),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }

    /// Applies one edit to `field` and returns the resulting state.
    ///
    /// Checkbox toggles add or remove the option from the field's set,
    /// treating a missing or non-set prior value as empty. Options not listed
    /// in the descriptor are ignored. Every other field type stores the raw
    /// value as-is.
    pub fn apply(&self, field: &FieldDescriptor, edit: FieldEdit) -> FormState {
        let mut next = self.clone();
        let key = field.field_name.clone();

        match edit {
            FieldEdit::Toggle { option, checked } if field.field_type.is_multi_valued() => {
                if !field.has_option(&option) {
                    log::warn!(
                        "Ignoring unknown option '{}' for checkbox field '{}'",
                        option,
                        field.field_name
                    );
                    return next;
                }
                let mut choices = self.choices(&field.field_name).to_vec();
                if checked {
                    if !choices.contains(&option) {
                        choices.push(option);
                    }
                } else {
                    choices.retain(|c| c != &option);
                }
                next.values.insert(key, FieldValue::Choices(choices));
            }
            FieldEdit::Value(value) if !field.field_type.is_multi_valued() => {
                next.values.insert(key, FieldValue::Text(value));
            }
            _ => {
                log::warn!(
                    "Ignoring edit that does not match the type of field '{}'",
                    field.field_name
                );
            }
        }

        next
    }

    /// JSON rendering of the mapping, as handed to submit callbacks' logs
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldType;

    fn text(label: &str, name: &str) -> FieldDescriptor {
        FieldDescriptor::new(label, FieldType::Text, name)
    }

    fn crops() -> FieldDescriptor {
        FieldDescriptor::new("Crops", FieldType::Checkbox, "crops").with_options(&["Wheat", "Corn"])
    }

    fn gender() -> FieldDescriptor {
        FieldDescriptor::new("Gender", FieldType::Radio, "gender").with_options(&["Male", "Female"])
    }

    fn toggle(option: &str, checked: bool) -> FieldEdit {
        FieldEdit::Toggle {
            option: option.to_string(),
            checked,
        }
    }

    #[test]
    fn test_untouched_form_serializes_empty() {
        let state = FormState::new();
        assert!(state.is_empty());
        assert_eq!(state.to_json(), "{}");
    }

    #[test]
    fn test_text_edit_is_stored() {
        let first_name = text("First Name", "firstName");
        let state = FormState::new().apply(&first_name, FieldEdit::Value("Ada".to_string()));
        assert_eq!(state.text("firstName"), "Ada");
        assert_eq!(state.to_json(), r#"{"firstName":"Ada"}"#);
    }

    #[test]
    fn test_apply_leaves_previous_state_untouched() {
        let first_name = text("First Name", "firstName");
        let before = FormState::new();
        let after = before.apply(&first_name, FieldEdit::Value("Ada".to_string()));
        assert!(before.is_empty());
        assert_ne!(before, after);
    }

    #[test]
    fn test_checkbox_sequence_keeps_remaining_option() {
        let crops = crops();
        let state = FormState::new()
            .apply(&crops, toggle("Wheat", true))
            .apply(&crops, toggle("Corn", true))
            .apply(&crops, toggle("Wheat", false));
        assert_eq!(state.choices("crops"), ["Corn".to_string()]);
        assert_eq!(state.to_json(), r#"{"crops":["Corn"]}"#);
    }

    #[test]
    fn test_checkbox_toggle_on_then_off_restores_set() {
        let crops = crops();
        let start = FormState::new().apply(&crops, toggle("Corn", true));
        let end = start
            .apply(&crops, toggle("Wheat", true))
            .apply(&crops, toggle("Wheat", false));
        assert_eq!(start.choices("crops"), end.choices("crops"));
    }

    #[test]
    fn test_checkbox_check_twice_does_not_duplicate() {
        let crops = crops();
        let state = FormState::new()
            .apply(&crops, toggle("Wheat", true))
            .apply(&crops, toggle("Wheat", true));
        assert_eq!(state.choices("crops"), ["Wheat".to_string()]);
    }

    #[test]
    fn test_checkbox_cleared_leaves_empty_set() {
        let crops = crops();
        let state = FormState::new()
            .apply(&crops, toggle("Wheat", true))
            .apply(&crops, toggle("Wheat", false));
        assert_eq!(state.get("crops"), Some(&FieldValue::Choices(vec![])));
        assert_eq!(state.to_json(), r#"{"crops":[]}"#);
    }

    #[test]
    fn test_checkbox_ignores_unknown_option() {
        let crops = crops();
        let state = FormState::new().apply(&crops, toggle("Rice", true));
        assert!(state.is_empty());
    }

    #[test]
    fn test_radio_last_selection_wins() {
        let gender = gender();
        let state = FormState::new()
            .apply(&gender, FieldEdit::Value("Male".to_string()))
            .apply(&gender, FieldEdit::Value("Female".to_string()));
        assert_eq!(state.text("gender"), "Female");
        assert!(state.is_selected("gender", "Female"));
        assert!(!state.is_selected("gender", "Male"));
    }

    #[test]
    fn test_mismatched_edits_are_ignored() {
        let crops = crops();
        let gender = gender();
        let state = FormState::new()
            .apply(&crops, FieldEdit::Value("Wheat".to_string()))
            .apply(&gender, toggle("Male", true));
        assert!(state.is_empty());
    }

    #[test]
    fn test_queries_on_absent_keys() {
        let state = FormState::new();
        assert_eq!(state.text("email"), "");
        assert!(state.choices("crops").is_empty());
        assert!(!state.is_selected("gender", "Male"));
    }

    #[test]
    fn test_select_placeholder_stores_empty_value() {
        let favorite = FieldDescriptor::new("Favorite Crop", FieldType::Select, "favoriteCrop")
            .with_options(&["Wheat", "Corn"]);
        let state = FormState::new()
            .apply(&favorite, FieldEdit::Value("Corn".to_string()))
            .apply(&favorite, FieldEdit::Value(String::new()));
        assert_eq!(state.text("favoriteCrop"), "");
        assert!(!state.is_selected("favoriteCrop", "Corn"));
        assert_eq!(state.to_json(), r#"{"favoriteCrop":""}"#);
    }

    #[test]
    fn test_queries_across_value_kinds() {
        let crops = crops();
        let gender = gender();
        let state = FormState::new()
            .apply(&crops, toggle("Wheat", true))
            .apply(&gender, FieldEdit::Value("Female".to_string()));
        assert_eq!(state.text("crops"), "");
        assert!(state.choices("gender").is_empty());
        assert!(state.is_selected("crops", "Wheat"));
        assert!(state.is_selected("gender", "Female"));
    }

    #[test]
    fn test_keys_keep_edit_order() {
        let last = text("Last Name", "lastName");
        let first = text("First Name", "firstName");
        let state = FormState::new()
            .apply(&last, FieldEdit::Value("Lovelace".to_string()))
            .apply(&first, FieldEdit::Value("Ada".to_string()));
        let keys: Vec<&String> = state.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["lastName", "firstName"]);
    }
}
