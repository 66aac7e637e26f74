//! Domain Layer
//!
//! Contains all domain entities and core abstractions.

mod entity;
mod id;
mod item;

pub use entity::{position_of, DomainError, DomainResult, Entity};
pub use id::{system_clock, Clock, IdGenerator};
pub use item::{Item, ItemId, NewItem, SubItem, SubItemId};
