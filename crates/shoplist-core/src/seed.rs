//! Seed data
//!
//! The store starts from an embedded JSON document. Nothing is written
//! back; the state is discarded when the page unloads.

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::config::AppConfig;
use crate::domain::ShoppingList;
use crate::store::ListStore;

const SEED_JSON: &str = include_str!("seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate list id `{0}` in seed document")]
    DuplicateListId(String),
}

#[derive(Debug, Deserialize)]
struct SeedDocument {
    #[serde(default)]
    config: AppConfig,
    #[serde(default)]
    lists: Vec<ShoppingList>,
}

/// Parse a seed document into its configuration and initial store
pub fn parse_seed(json: &str) -> Result<(AppConfig, ListStore), SeedError> {
    let document: SeedDocument = serde_json::from_str(json)?;
    for (index, list) in document.lists.iter().enumerate() {
        if document.lists[..index].iter().any(|other| other.id == list.id) {
            return Err(SeedError::DuplicateListId(list.id.to_string()));
        }
    }
    let store = ListStore::new(document.config.session(), document.lists);
    Ok((document.config, store))
}

/// The embedded seed
pub fn initial_store() -> Result<(AppConfig, ListStore), SeedError> {
    let (config, store) = parse_seed(SEED_JSON)?;
    info!(
        "event=seed_loaded module=core status=ok lists={} current_user={}",
        store.lists().len(),
        store.current_user()
    );
    Ok((config, store))
}

/// The embedded seed, or an empty store for the default user when the
/// document cannot be used
pub fn initial_store_or_empty() -> (AppConfig, ListStore) {
    initial_store().unwrap_or_else(|err| {
        warn!("event=seed_loaded module=core status=fallback error={}", err);
        let config = AppConfig::default();
        let store = ListStore::new(config.session(), Vec::new());
        (config, store)
    })
}
