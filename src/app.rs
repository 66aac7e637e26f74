//! Pizza List App
//!
//! Loads the persisted list once and renders the form and the list.

use leptos::prelude::*;
use pizza_core::{BrowserStorage, KeyValueStore, ListStore, MemoryStorage, StoreConfig};
use reactive_stores::Store;

use crate::components::{NewPizzaForm, PizzaList};
use crate::context::AppContext;
use crate::store::BoardState;

#[component]
pub fn App() -> impl IntoView {
    let list = ListStore::load(open_storage(), StoreConfig::default());
    log::info!("[APP] Replaying {} pizzas", list.len());

    // Replay every persisted pizza with all of its ingredients
    let board = Store::new(BoardState::new(list.items().to_vec()));
    provide_context(AppContext::new(list, board));

    view! {
        <main class="pizza-app">
            <h1>"Pizzas"</h1>
            <NewPizzaForm />
            <PizzaList />
        </main>
    }
}

/// localStorage, or a session-only store when the browser refuses it
fn open_storage() -> Box<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("[APP] {}; pizzas will not survive a reload", e);
            Box::new(MemoryStorage::new())
        }
    }
}
