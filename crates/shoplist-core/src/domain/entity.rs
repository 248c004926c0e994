//! Identified records and domain errors
//!
//! Lists and items are both looked up by identifier inside ordered
//! collections; [`Entity`] lets the store share those lookups.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A record carrying a stable identifier
pub trait Entity: Sized + Send + Sync + Clone {
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    fn id(&self) -> &Self::Id;
}

/// First record with `id`
pub fn find_by_id<'a, E: Entity>(records: &'a [E], id: &E::Id) -> Option<&'a E> {
    records.iter().find(|record| record.id() == id)
}

/// Index of the first record with `id`
pub fn position_by_id<E: Entity>(records: &[E], id: &E::Id) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Rejections raised by the validation guards.
///
/// Store mutators never produce these; an invalid intent there is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    Conflict(String),
}
