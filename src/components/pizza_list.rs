//! Pizza List Component
//!
//! One block per pizza, keyed by id so adding or removing a pizza touches
//! only that block.

use leptos::prelude::*;

use crate::components::PizzaCard;
use crate::context::AppContext;
use crate::store::BoardStateStoreFields;

#[component]
pub fn PizzaList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let board = ctx.board;

    view! {
        <div id="pizza-list" class="pizza-list">
            <For
                each=move || board.items().get()
                key=|item| item.id
                children=move |item| view! { <PizzaCard item=item /> }
            />
        </div>
    }
}
