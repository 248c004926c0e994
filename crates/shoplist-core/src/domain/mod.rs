//! Domain Layer
//!
//! Lists, items, identifiers and the per-session view state.

mod entity;
mod id;
mod item;
mod list;
mod session;

pub use entity::{find_by_id, position_by_id, DomainError, DomainResult, Entity};
pub use id::{ItemId, ListId, UserId};
pub use item::Item;
pub use list::ShoppingList;
pub use session::{ItemFilter, OwnerFilter, Role, SessionState};
