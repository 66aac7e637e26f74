//! Entities and Errors
//!
//! Pizzas and ingredients are both looked up by id inside an ordered list;
//! `Entity` is what that lookup needs.

/// Something stored in an ordered list and found by id
pub trait Entity: Sized + Send + Sync + Clone {
    /// Id type, printable for log lines and `NotFound` messages
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Display + Send + Sync;

    fn id(&self) -> Self::Id;
}

/// Index of the first entity with the given ID
pub fn position_of<T: Entity>(entities: &[T], id: T::Id) -> Option<usize> {
    entities.iter().position(|entity| entity.id() == id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
