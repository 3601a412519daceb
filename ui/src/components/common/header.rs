//! Application Header Component

use leptos::*;

use crate::components::common::PlusIcon;

/// Page header with the catalog branding and the "new dish" action
#[component]
pub fn Header(
    #[prop(into)] on_open_create: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="bg-accent">
            <div class="max-w-7xl mx-auto px-6 py-12 pb-24 flex items-center justify-between">
                // Logo
                <div class="flex items-center gap-3 text-white font-bold text-2xl">
                    <span class="text-3xl">"🍽️"</span>
                    <span>"Plateful"</span>
                </div>

                <button
                    class="btn-primary flex items-center gap-2"
                    on:click=move |_| on_open_create.call(())
                >
                    <span>"New dish"</span>
                    <PlusIcon class="w-4 h-4" />
                </button>
            </div>
        </header>
    }
}
