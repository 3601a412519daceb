//! Catalog Dashboard
//!
//! The dashboard view: loads the food list once on first display, renders a
//! card grid, and drives the create/edit modal forms against the catalog
//! service. All list mutations go through the reconciliation functions in
//! [`crate::state`], applied only after the service has responded.

mod add_food_modal;
mod edit_food_modal;
mod food_card;

pub use add_food_modal::AddFoodModal;
pub use edit_food_modal::EditFoodModal;
pub use food_card::FoodCard;

use leptos::*;
use plateful_shared::{Food, NewFood};

use crate::client::{CatalogClient, RestClient};
use crate::components::common::Header;
use crate::state::{append_created, remove_editing, replace_updated};

/// Fields collected by the create and edit forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodInput {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

/// Catalog dashboard component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (foods, set_foods) = create_signal(Vec::<Food>::new());
    let (editing_food, set_editing_food) = create_signal(Option::<Food>::None);
    let (add_modal_open, set_add_modal_open) = create_signal(false);
    let (edit_modal_open, set_edit_modal_open) = create_signal(false);
    let (loading, set_loading) = create_signal(true);

    // Load the catalog once on first display. No retry; failures only log.
    create_effect(move |prev_run: Option<bool>| {
        if prev_run.is_some() {
            return true;
        }
        spawn_local(async move {
            let client = RestClient::from_window_origin();
            match client.list_foods().await {
                Ok(list) => set_foods.set(list),
                Err(e) => tracing::error!("Failed to load catalog: {}", e),
            }
            set_loading.set(false);
        });
        true
    });

    // New entries are always created as available.
    let handle_add_food = move |input: FoodInput| {
        spawn_local(async move {
            let payload = NewFood {
                name: input.name,
                description: input.description,
                price: input.price,
                image: input.image,
                available: true,
            };
            let client = RestClient::from_window_origin();
            match client.create_food(&payload).await {
                Ok(created) => {
                    set_foods.set(append_created(&foods.get_untracked(), created));
                }
                Err(e) => tracing::error!("Failed to create dish: {}", e),
            }
        });
    };

    // The id and availability come from the entry being edited; the form
    // only collects the other fields.
    let handle_update_food = move |input: FoodInput| {
        let Some(editing) = editing_food.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let payload = NewFood {
                name: input.name,
                description: input.description,
                price: input.price,
                image: input.image,
                available: editing.available,
            };
            let client = RestClient::from_window_origin();
            match client.update_food(editing.id, &payload).await {
                Ok(updated) => {
                    // The edited entry moves to the end of the list.
                    set_foods.set(replace_updated(&foods.get_untracked(), updated));
                }
                Err(e) => tracing::error!("Failed to update dish {}: {}", editing.id, e),
            }
        });
    };

    // Local removal keys off the entry currently being edited, not the id
    // passed in; that id only names the endpoint. The entry disappears from
    // the list before the request resolves and regardless of its outcome.
    let handle_delete_food = move |id: u64| {
        set_foods.set(remove_editing(
            &foods.get_untracked(),
            editing_food.get_untracked().as_ref(),
        ));
        spawn_local(async move {
            let client = RestClient::from_window_origin();
            if let Err(e) = client.delete_food(id).await {
                tracing::error!("Failed to delete dish {}: {}", id, e);
            }
            set_editing_food.set(None);
        });
    };

    let handle_edit_food = move |food: Food| {
        set_edit_modal_open.update(|open| *open = !*open);
        set_editing_food.set(Some(food));
    };

    view! {
        <div class="min-h-screen bg-theme-bg">
            <Header on_open_create=Callback::new(move |_| {
                set_add_modal_open.update(|open| *open = !*open);
            }) />

            <AddFoodModal
                open=add_modal_open
                on_close=Callback::new(move |_| set_add_modal_open.update(|open| *open = !*open))
                on_submit=Callback::new(handle_add_food)
            />

            <EditFoodModal
                open=edit_modal_open
                editing_food=editing_food
                on_close=Callback::new(move |_| set_edit_modal_open.update(|open| *open = !*open))
                on_submit=Callback::new(handle_update_food)
            />

            <div class="max-w-7xl mx-auto px-6 -mt-12 pb-16">
                {move || {
                    if loading.get() {
                        view! { <div class="text-theme-secondary">"Loading..."</div> }.into_view()
                    } else {
                        let list = foods.get();
                        if list.is_empty() {
                            view! {
                                <div class="text-theme-secondary text-center py-12 bg-theme-surface rounded-xl border border-theme-border">
                                    <p>"No dishes yet"</p>
                                    <p class="text-sm mt-2 text-theme-muted">"Add a dish to start building the menu"</p>
                                </div>
                            }
                            .into_view()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                                    {list
                                        .into_iter()
                                        .map(|food| {
                                            view! {
                                                <FoodCard
                                                    food=food
                                                    on_edit=Callback::new(handle_edit_food)
                                                    on_delete=Callback::new(handle_delete_food)
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_view()
                        }
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::*;
    use plateful_shared::Food;

    fn food(id: u64, name: &str) -> Food {
        Food {
            id,
            name: name.to_string(),
            image: format!("https://example.com/{id}.png"),
            price: "19.90".to_string(),
            description: "Macarrao ao molho branco com funghi.".to_string(),
            available: true,
        }
    }

    // Mounting the dashboard needs a browser, so these exercise the signal
    // operations its handlers perform, not the rendered component.

    #[test]
    fn modal_flag_double_toggle_round_trips() {
        let runtime = create_runtime();

        let (open, set_open) = create_signal(false);
        set_open.update(|open| *open = !*open);
        assert!(open.get_untracked());
        set_open.update(|open| *open = !*open);
        assert!(!open.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn load_replaces_list_wholesale() {
        let runtime = create_runtime();

        let (foods, set_foods) = create_signal(vec![food(1, "Ao molho"), food(2, "Veggie")]);
        let listed = vec![food(3, "A la Camarón")];
        set_foods.set(listed.clone());

        // Nothing from the previous list survives a load.
        assert_eq!(foods.get_untracked(), listed);

        runtime.dispose();
    }
}
