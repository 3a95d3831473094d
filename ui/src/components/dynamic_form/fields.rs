//! Field Renderers
//!
//! One labeled group per descriptor, dispatched on the layout's control kind.
//! Every value and checked attribute is bound to `FormState`, so the DOM
//! never holds state of its own.

use leptos::prelude::*;

use super::layout::{field_layout, ControlLayout, OptionLayout};
use super::state::{FieldEdit, FormState};
use crate::types::FieldDescriptor;

const INPUT_CLASS: &str = "w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500";
const OPTION_LABEL_CLASS: &str = "text-sm text-gray-700";

// ============================================================================
// Field Group
// ============================================================================

/// Labeled group for one descriptor
#[component]
pub fn FormField(field: FieldDescriptor, form_state: RwSignal<FormState>) -> impl IntoView {
    let group = field_layout(&field);
    let name = field.field_name.clone();

    // Each edit replaces the state with a fresh value
    let on_edit = Callback::new(move |edit: FieldEdit| {
        let next = form_state.with_untracked(|state| state.apply(&field, edit));
        form_state.set(next);
    });

    let control = match group.control {
        ControlLayout::Input { input_type } => view! {
            <TextInput name=name input_type=input_type form_state=form_state on_edit=on_edit />
        }
        .into_any(),
        ControlLayout::Radio(options) => view! {
            <RadioGroup name=name options=options form_state=form_state on_edit=on_edit />
        }
        .into_any(),
        ControlLayout::Checkbox(options) => view! {
            <CheckboxGroup name=name options=options form_state=form_state on_edit=on_edit />
        }
        .into_any(),
        ControlLayout::Select { placeholder, options } => view! {
            <ChoiceSelect
                name=name
                placeholder=placeholder
                options=options
                form_state=form_state
                on_edit=on_edit
            />
        }
        .into_any(),
    };

    view! {
        <div class="mb-3" data-field=group.key>
            <label class="block text-sm font-medium text-gray-700 mb-1">{group.label}</label>
            {control}
        </div>
    }
}

// ============================================================================
// Text Input
// ============================================================================

#[component]
fn TextInput(
    name: String,
    input_type: &'static str,
    form_state: RwSignal<FormState>,
    on_edit: Callback<FieldEdit>,
) -> impl IntoView {
    let name_for_value = name.clone();

    view! {
        <div class="mb-3">
            <input
                type=input_type
                class=INPUT_CLASS
                name=name
                prop:value=move || form_state.with(|s| s.text(&name_for_value).to_string())
                on:input=move |ev| on_edit.run(FieldEdit::Value(event_target_value(&ev)))
            />
        </div>
    }
}

// ============================================================================
// Radio Group
// ============================================================================

#[component]
fn RadioGroup(
    name: String,
    options: Vec<OptionLayout>,
    form_state: RwSignal<FormState>,
    on_edit: Callback<FieldEdit>,
) -> impl IntoView {
    view! {
        <div class="mb-3 flex flex-wrap gap-4">
            {options.into_iter().map(|option| {
                let name_for_check = name.clone();
                let value_for_check = option.value.clone();
                let label = option.value.clone();

                view! {
                    <div class="inline-flex items-center gap-2">
                        <input
                            type="radio"
                            id=option.id.clone()
                            name=name.clone()
                            value=option.value
                            prop:checked=move || {
                                form_state.with(|s| s.is_selected(&name_for_check, &value_for_check))
                            }
                            on:change=move |ev| on_edit.run(FieldEdit::Value(event_target_value(&ev)))
                        />
                        <label for=option.id class=OPTION_LABEL_CLASS>{label}</label>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

// ============================================================================
// Checkbox Group
// ============================================================================

#[component]
fn CheckboxGroup(
    name: String,
    options: Vec<OptionLayout>,
    form_state: RwSignal<FormState>,
    on_edit: Callback<FieldEdit>,
) -> impl IntoView {
    view! {
        <div class="mb-3 flex flex-wrap gap-4">
            {options.into_iter().map(|option| {
                let name_for_check = name.clone();
                let value_for_check = option.value.clone();
                let value_for_change = option.value.clone();
                let label = option.value.clone();

                view! {
                    <div class="inline-flex items-center gap-2">
                        <input
                            type="checkbox"
                            id=option.id.clone()
                            name=name.clone()
                            value=option.value
                            prop:checked=move || {
                                form_state.with(|s| s.is_selected(&name_for_check, &value_for_check))
                            }
                            on:change=move |ev| {
                                on_edit.run(FieldEdit::Toggle {
                                    option: value_for_change.clone(),
                                    checked: event_target_checked(&ev),
                                });
                            }
                        />
                        <label for=option.id class=OPTION_LABEL_CLASS>{label}</label>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

// ============================================================================
// Choice Select
// ============================================================================

#[component]
fn ChoiceSelect(
    name: String,
    placeholder: String,
    options: Vec<OptionLayout>,
    form_state: RwSignal<FormState>,
    on_edit: Callback<FieldEdit>,
) -> impl IntoView {
    let name_for_blank = name.clone();

    view! {
        <div class="mb-3">
            <select
                class=INPUT_CLASS
                name=name.clone()
                on:change=move |ev| on_edit.run(FieldEdit::Value(event_target_value(&ev)))
            >
                <option
                    value=""
                    prop:selected=move || form_state.with(|s| s.text(&name_for_blank).is_empty())
                >
                    {placeholder}
                </option>
                {options.into_iter().map(|option| {
                    let name_for_selected = name.clone();
                    let value_for_selected = option.value.clone();
                    let label = option.value.clone();

                    view! {
                        <option
                            value=option.value
                            prop:selected=move || {
                                form_state.with(|s| s.text(&name_for_selected) == value_for_selected)
                            }
                        >
                            {label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
