//! Render layout for a field list
//!
//! Static structure of the form: which group and which controls each
//! descriptor produces. Values and checked states are bound separately by the
//! components, from `FormState`.

use crate::types::{FieldDescriptor, FieldType};

/// One option control (radio, checkbox) or select entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionLayout {
    pub value: String,
    /// DOM id of the input, also the `for` of its label
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlLayout {
    /// Single text-like input with the given `type` attribute
    Input { input_type: &'static str },
    Radio(Vec<OptionLayout>),
    Checkbox(Vec<OptionLayout>),
    /// Choice control with a blank placeholder entry first
    Select {
        placeholder: String,
        options: Vec<OptionLayout>,
    },
}

/// Labeled group rendered for one descriptor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    /// Identity key of the group (the field name)
    pub key: String,
    pub label: String,
    pub control: ControlLayout,
}

/// One group per descriptor, in schema order
pub fn layout(fields: &[FieldDescriptor]) -> Vec<FieldLayout> {
    fields.iter().map(field_layout).collect()
}

pub fn field_layout(field: &FieldDescriptor) -> FieldLayout {
    let options = || -> Vec<OptionLayout> {
        field
            .options
            .iter()
            .map(|option| OptionLayout {
                value: option.clone(),
                id: field.option_id(option),
            })
            .collect()
    };

    let control = match field.field_type {
        FieldType::Text
        | FieldType::Email
        | FieldType::Password
        | FieldType::Date
        | FieldType::Tel => ControlLayout::Input {
            input_type: field.field_type.input_type().unwrap_or("text"),
        },
        FieldType::Radio => ControlLayout::Radio(options()),
        FieldType::Checkbox => ControlLayout::Checkbox(options()),
        FieldType::Select => ControlLayout::Select {
            placeholder: format!("Select {}", field.label),
            options: options(),
        },
    };

    FieldLayout {
        key: field.field_name.clone(),
        label: format!("{}:", field.label),
        control,
    }
}
