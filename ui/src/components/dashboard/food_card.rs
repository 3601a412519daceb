//! Food Card Component

use leptos::*;
use plateful_shared::Food;

use crate::components::common::{PencilIcon, TrashIcon};

/// One catalog entry rendered as a card with edit/delete actions
#[component]
pub fn FoodCard(
    food: Food,
    #[prop(into)] on_edit: Callback<Food>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let food_for_edit = food.clone();

    let badge_class = if available {
        "px-2 py-0.5 text-xs font-medium rounded bg-green-500/20 text-green-400"
    } else {
        "px-2 py-0.5 text-xs font-medium rounded bg-slate-500/20 text-slate-400"
    };

    view! {
        <div class="bg-theme-surface rounded-xl border border-theme-border overflow-hidden flex flex-col">
            <div class="h-44 bg-theme-surface-hover">
                <img
                    class="w-full h-full object-cover"
                    src=food.image.clone()
                    alt=food.name.clone()
                />
            </div>

            <div class="p-4 flex-1 flex flex-col gap-2">
                <div class="flex items-center justify-between gap-2">
                    <h3 class="font-semibold text-theme truncate">{food.name.clone()}</h3>
                    <span class=badge_class>
                        {if available { "Available" } else { "Unavailable" }}
                    </span>
                </div>
                <p class="text-sm text-theme-secondary flex-1">{food.description.clone()}</p>
                <div class="text-lg font-bold text-accent">"$ "{food.price.clone()}</div>
            </div>

            <div class="px-4 py-3 border-t border-theme-border flex items-center gap-2">
                <button
                    class="btn-ghost text-xs px-2 py-1 flex items-center gap-1.5"
                    title="Edit dish"
                    on:click=move |_| on_edit.call(food_for_edit.clone())
                >
                    <PencilIcon class="w-4 h-4" />
                    "Edit"
                </button>
                <button
                    class="btn-ghost text-xs px-2 py-1 flex items-center gap-1.5 text-red-400"
                    title="Delete dish"
                    on:click=move |_| on_delete.call(id)
                >
                    <TrashIcon class="w-4 h-4" />
                    "Delete"
                </button>
            </div>
        </div>
    }
}
