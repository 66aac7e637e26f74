//! New Pizza Form Component
//!
//! Name and description fields with a submit button.

use leptos::prelude::*;

use crate::context::AppContext;

/// Form for creating new pizzas
#[component]
pub fn NewPizzaForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_pizza = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Rejected input stays in the fields for the user to fix
        if ctx.add_item(&name.get(), &description.get()) {
            set_name.set(String::new());
            set_description.set(String::new());
        }
    };

    view! {
        <form id="my-form" class="new-pizza-form" on:submit=create_pizza>
            <input
                id="text-input"
                type="text"
                placeholder="Pizza name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                id="description-input"
                type="text"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add pizza"</button>
        </form>
    }
}
