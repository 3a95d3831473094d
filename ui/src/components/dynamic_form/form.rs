//! Main Dynamic Form Component

use leptos::prelude::*;

use super::fields::FormField;
use super::state::FormState;
use crate::types::{default_submit_label, FieldDescriptor};

/// Dynamic Form Component
///
/// Renders `fields` in order and calls `on_submit` once per submit with the
/// current state. The browser's default submit navigation is suppressed.
#[component]
pub fn DynamicForm(
    /// Ordered field descriptors; field names must be unique
    fields: Vec<FieldDescriptor>,
    /// Receives the accumulated mapping on submit
    on_submit: Callback<FormState>,
    /// Label of the submit button
    #[prop(into, default = default_submit_label())]
    submit_label: String,
) -> impl IntoView {
    let form_state = RwSignal::new(FormState::new());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(form_state, on_submit);
    };

    view! {
        <form on:submit=on_form_submit class="bg-white rounded-lg shadow p-6">
            <div class="space-y-2">
                {fields.into_iter().map(|field| view! {
                    <FormField field=field form_state=form_state />
                }).collect_view()}

                <div class="text-center pt-4">
                    <button
                        type="submit"
                        class="px-6 py-2 bg-green-600 text-white rounded hover:bg-green-700"
                    >
                        {submit_label}
                    </button>
                </div>
            </div>
        </form>
    }
}

/// Passes the current state to `on_submit` once and returns what was passed.
fn submit(form_state: RwSignal<FormState>, on_submit: Callback<FormState>) -> FormState {
    let submitted = form_state.get_untracked();
    on_submit.run(submitted.clone());
    submitted
}
