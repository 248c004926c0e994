//! Shopping list core
//!
//! In-memory list store, its mutators and the derived views the UI renders.
//! No browser dependencies; everything here is tested natively.
//!
//! Layers:
//! - domain: records, identifiers and session state
//! - store: the replace-on-write snapshot and its mutators
//! - views: pure projections over a snapshot
//! - validation: input guards the UI runs before mutating

pub mod config;
pub mod domain;
pub mod routes;
pub mod seed;
pub mod store;
pub mod validation;
pub mod views;

pub use config::{AppConfig, ConfigError, LogLevel};
pub use domain::{
    DomainError, DomainResult, Item, ItemFilter, ItemId, ListId, OwnerFilter, Role, SessionState,
    ShoppingList, UserId,
};
pub use routes::AppRoute;
pub use seed::{initial_store, initial_store_or_empty, SeedError};
pub use store::{ListAction, ListStore};
