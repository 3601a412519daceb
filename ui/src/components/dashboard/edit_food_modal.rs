//! Edit Food Modal
//!
//! Modal form for editing an existing dish. Fields are seeded from the dish
//! being edited each time the modal opens; id and availability are carried
//! over by the dashboard, not collected here.

use leptos::*;
use plateful_shared::Food;

use super::FoodInput;

/// Modal to edit an existing dish
#[component]
pub fn EditFoodModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] editing_food: Signal<Option<Food>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<FoodInput>,
) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (price, set_price) = create_signal(String::new());
    let (image, set_image) = create_signal(String::new());

    // Seed the fields whenever the modal opens on a dish.
    create_effect(move |_| {
        if open.get() {
            if let Some(food) = editing_food.get_untracked() {
                set_name.set(food.name);
                set_description.set(food.description);
                set_price.set(food.price);
                set_image.set(food.image);
            }
        }
    });

    let submit = move |_| {
        on_submit.call(FoodInput {
            name: name.get(),
            description: description.get(),
            price: price.get(),
            image: image.get(),
        });
        on_close.call(());
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50">
                <div class="bg-theme-surface rounded-xl w-[450px] shadow-xl border border-theme-border">
                    <div class="flex items-center justify-between p-4 border-b border-theme-border">
                        <h2 class="text-lg font-semibold text-theme">"Edit Dish"</h2>
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
                                prop:value=move || name.get()
                                on:input=move |e| set_name.set(event_target_value(&e))
                            />
                        </div>

                        <div class="space-y-1">
                            <label class="text-sm text-theme-secondary">"Description"</label>
                            <textarea
                                class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme resize-none focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
                                rows="3"
                                prop:value=move || description.get()
                                on:input=move |e| set_description.set(event_target_value(&e))
                            />
                        </div>

                        <div class="space-y-1">
                            <label class="text-sm text-theme-secondary">"Price"</label>
                            <input
                                type="text"
                                class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
                                prop:value=move || price.get()
                                on:input=move |e| set_price.set(event_target_value(&e))
                            />
                        </div>

                        <div class="space-y-1">
                            <label class="text-sm text-theme-secondary">"Image URL"</label>
                            <input
                                type="text"
                                class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
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
                            "Save Changes"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
