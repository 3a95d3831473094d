use leptos::prelude::*;
use leptos_router::components::A;

use crate::api;

/// Links to every form registered on the server
#[component]
pub fn FormsNav() -> impl IntoView {
    let forms = LocalResource::new(|| async move {
        match api::list_forms().await {
            Ok(forms) => forms,
            Err(e) => {
                log::warn!("Failed to list forms: {}", e);
                vec![]
            }
        }
    });

    view! {
        <nav class="flex flex-wrap gap-2">
            <Suspense fallback=|| ()>
                {move || {
                    forms.get().unwrap_or_default().into_iter().map(|form| {
                        let href = format!("/forms/{}", urlencoding::encode(&form.name));
                        view! {
                            <A href=href attr:class="px-3 py-1 text-sm rounded hover:bg-gray-700 transition-colors">
                                {form.title}
                                <span class="ml-1 text-xs text-gray-400">{format!("({})", form.field_count)}</span>
                            </A>
                        }
                    }).collect_view()
                }}
            </Suspense>
        </nav>
    }
}
