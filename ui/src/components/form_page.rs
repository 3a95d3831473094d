use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::dynamic_form::{DynamicForm, FormState};
use crate::types::{farm_form, FormDefinition};

/// Loads a form definition by name and renders it.
///
/// When the server cannot provide the definition, `fallback` is rendered
/// instead (if given).
#[component]
pub fn FormPage(
    #[prop(into)] name: Signal<String>,
    #[prop(optional)] fallback: Option<FormDefinition>,
    on_submit: Callback<FormState>,
) -> impl IntoView {
    let definition = LocalResource::new(move || {
        let name = name.get();
        let fallback = fallback.clone();
        async move {
            match api::get_form(&name).await {
                Ok(form) => Some(form),
                Err(e) => {
                    log::warn!("Failed to load form '{}': {}", name, e);
                    fallback
                }
            }
        }
    });

    view! {
        <div class="p-6 max-w-3xl mx-auto">
            <Suspense fallback=move || view! { <div class="text-gray-500">"Loading form..."</div> }>
                {move || {
                    match definition.get() {
                        Some(Some(form)) => {
                            let FormDefinition { title, submit_label, fields, .. } = form;
                            view! {
                                <div>
                                    <h1 class="text-2xl font-bold text-center mb-6">{title}</h1>
                                    <DynamicForm
                                        fields=fields
                                        on_submit=on_submit
                                        submit_label=submit_label
                                    />
                                </div>
                            }.into_any()
                        }
                        Some(None) => view! {
                            <div class="bg-red-50 border border-red-200 rounded-lg p-4">
                                <p class="text-red-800">
                                    <strong>"Form not found."</strong>
                                    " Check the forms configured on the server."
                                </p>
                            </div>
                        }.into_any(),
                        None => view! {
                            <div class="text-gray-500">"Loading form..."</div>
                        }.into_any(),
                    }
                }}
            </Suspense>
        </div>
    }
}

/// The "Create a Farm" page
#[component]
pub fn CreateFarm() -> impl IntoView {
    let on_submit = Callback::new(|form_data: FormState| {
        log::info!("Farm Created: {}", form_data.to_json());
    });

    view! {
        <FormPage name="farm".to_string() fallback=farm_form() on_submit=on_submit />
    }
}

/// Any registered form, addressed as `/forms/:name`
#[component]
pub fn FormRoute() -> impl IntoView {
    let params = use_params_map();
    let name = Signal::derive(move || params.read().get("name").unwrap_or_default());

    let on_submit = Callback::new(move |form_data: FormState| {
        log::info!("Form '{}' submitted: {}", name.get_untracked(), form_data.to_json());
    });

    view! {
        <FormPage name=name on_submit=on_submit />
    }
}
