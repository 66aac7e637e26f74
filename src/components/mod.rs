//! UI Components
//!
//! Leptos components for the pizza list.

mod new_pizza_form;
mod pizza_card;
mod pizza_list;

pub use new_pizza_form::NewPizzaForm;
pub use pizza_card::PizzaCard;
pub use pizza_list::PizzaList;
