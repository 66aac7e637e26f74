//! Pizza Card Component
//!
//! Heading, description, remove button and the ingredient sub-container.
//! Ingredient rows are keyed, so adding one appends a single row.

use leptos::prelude::*;
use pizza_core::{Item, ItemId};

use crate::context::AppContext;
use crate::store::store_children;

/// DOM id of a pizza's ingredient sub-container
pub fn ingredients_container_id(item_id: ItemId) -> String {
    format!("ingredients-container-{}", item_id)
}

/// A single pizza block
#[component]
pub fn PizzaCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;
    let board = ctx.board;
    let (ingredient, set_ingredient) = signal(String::new());

    let add_ingredient = move |_: web_sys::MouseEvent| {
        if ctx.add_sub_item(&ingredient.get(), id) {
            set_ingredient.set(String::new());
        }
    };

    view! {
        <div class="pizza-card">
            <h2>{item.name}</h2>
            <p>{item.description}</p>
            <button class="remove-btn" on:click=move |_| ctx.remove_item(id)>"Remove pizza"</button>

            <div class="ingredients-container" id=ingredients_container_id(id)>
                <ul class="ingredient-list">
                    <For
                        each=move || store_children(&board, id)
                        key=|sub_item| sub_item.id
                        children=move |sub_item| view! { <li>{sub_item.text}</li> }
                    />
                </ul>
                <input
                    type="text"
                    placeholder="Add ingredient"
                    prop:value=move || ingredient.get()
                    on:input=move |ev| set_ingredient.set(event_target_value(&ev))
                />
                <button class="add-ingredient-btn" on:click=add_ingredient>"Add ingredient"</button>
            </div>
        </div>
    }
}
