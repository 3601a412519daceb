//! Add Food Modal
//!
//! Modal form collecting the fields for a new dish. Availability is not
//! asked for; new dishes are always created as available.

use leptos::*;

use super::FoodInput;

/// Modal to create a new dish
#[component]
pub fn AddFoodModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<FoodInput>,
) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (price, set_price) = create_signal(String::new());
    let (image, set_image) = create_signal(String::new());

    let submit = move |_| {
        let input = FoodInput {
            name: name.get(),
            description: description.get(),
            price: price.get(),
            image: image.get(),
        };
        set_name.set(String::new());
        set_description.set(String::new());
        set_price.set(String::new());
        set_image.set(String::new());
        on_submit.call(input);
        on_close.call(());
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50">
                <div class="bg-theme-surface rounded-xl w-[450px] shadow-xl border border-theme-border">
                    <div class="flex items-center justify-between p-4 border-b border-theme-border">
                        <h2 class="text-lg font-semibold text-theme">"New Dish"</h2>
                        <button
                            class="p-1.5 hover:bg-theme-surface-hover rounded-lg text-theme-secondary hover:text-theme transition-colors"
                            on:click=move |_| on_close.call(())
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="p-4 space-y-4">
                        <div class="space-y-1">
                            <label class="text-sm text-theme-secondary">"Name"</label>
                            <input
                                type="text"
                                class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
                                placeholder="e.g., Ao molho"
                                prop:value=move || name.get()
                                on:input=move |e| set_name.set(event_target_value(&e))
                            />
                        </div>

                        <div class="space-y-1">
                            <label class="text-sm text-theme-secondary">"Description"</label>
                            <textarea
                                class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme resize-none focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
                                rows="3"
                                placeholder="What goes on the plate..."
                                prop:value=move || description.get()
                                on:input=move |e| set_description.set(event_target_value(&e))
                            />
                        </div>

                        <div class="space-y-1">
                            <label class="text-sm text-theme-secondary">"Price"</label>
                            <input
                                type="text"
                                class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
                                placeholder="19.90"
                                prop:value=move || price.get()
                                on:input=move |e| set_price.set(event_target_value(&e))
                            />
                        </div>

                        <div class="space-y-1">
                            <label class="text-sm text-theme-secondary">"Image URL"</label>
                            <input
                                type="text"
                                class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
                                placeholder="https://..."
                                prop:value=move || image.get()
                                on:input=move |e| set_image.set(event_target_value(&e))
                            />
                        </div>
                    </div>

                    <div class="p-4 border-t border-theme-border flex justify-end gap-3">
                        <button
                            class="btn-secondary"
                            on:click=move |_| on_close.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn-primary disabled:opacity-50"
                            disabled=move || name.get().trim().is_empty()
                            on:click=submit
                        >
                            "Add Dish"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
