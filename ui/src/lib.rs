use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub mod api;
pub mod components;
pub mod types;

use components::form_page::{CreateFarm, FormRoute};
use components::forms_nav::FormsNav;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-100">
                <header class="bg-gray-800 text-white px-6 py-3 flex items-center gap-6">
                    <a href="/" class="text-xl font-bold">"dynaform"</a>
                    <FormsNav />
                </header>

                <main>
                    <Routes fallback=|| "Not found.">
                        <Route path=path!("/") view=CreateFarm/>
                        <Route path=path!("/forms/:name") view=FormRoute/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
