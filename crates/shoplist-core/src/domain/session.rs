//! Session and query state
//!
//! Values owned by the presentation layer and read by the derived views.

use serde::{Deserialize, Serialize};
use super::id::UserId;

/// Which lists the overview shows by ownership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OwnerFilter {
    #[default]
    All,
    /// Lists the current user owns
    Mine,
    /// Lists owned by someone else where the current user is a member
    Shared,
}

impl OwnerFilter {
    pub const ALL: [OwnerFilter; 3] = [OwnerFilter::All, OwnerFilter::Mine, OwnerFilter::Shared];

    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerFilter::All => "all",
            OwnerFilter::Mine => "mine",
            OwnerFilter::Shared => "shared",
        }
    }

    /// Unknown values fall back to `All`
    pub fn from_str(s: &str) -> Self {
        match s {
            "mine" => OwnerFilter::Mine,
            "shared" => OwnerFilter::Shared,
            _ => OwnerFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OwnerFilter::All => "All Lists",
            OwnerFilter::Mine => "My Lists",
            OwnerFilter::Shared => "Shared with Me",
        }
    }
}

/// Which items the detail view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemFilter {
    #[default]
    All,
    Unresolved,
    Resolved,
}

impl ItemFilter {
    pub const ALL: [ItemFilter; 3] = [ItemFilter::All, ItemFilter::Unresolved, ItemFilter::Resolved];

    pub fn label(&self) -> &'static str {
        match self {
            ItemFilter::All => "All",
            ItemFilter::Unresolved => "Unresolved",
            ItemFilter::Resolved => "Resolved",
        }
    }
}

/// Relation between a user and a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Member,
    /// Neither owner nor member
    Guest,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Member => "Member",
            Role::Guest => "Guest",
        }
    }
}

/// Ambient session values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Fixed for the lifetime of the session
    pub current_user: UserId,
    pub search_term: String,
    pub owner_filter: OwnerFilter,
    pub show_archived: bool,
}

impl SessionState {
    pub fn new(current_user: impl Into<UserId>) -> Self {
        Self {
            current_user: current_user.into(),
            search_term: String::new(),
            owner_filter: OwnerFilter::All,
            show_archived: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_filter_round_trip() {
        for filter in OwnerFilter::ALL {
            assert_eq!(OwnerFilter::from_str(filter.as_str()), filter);
        }
        assert_eq!(OwnerFilter::from_str("bogus"), OwnerFilter::All);
    }

    #[test]
    fn test_session_defaults() {
        let session = SessionState::new("john@example.com");
        assert_eq!(session.owner_filter, OwnerFilter::All);
        assert!(session.search_term.is_empty());
        assert!(!session.show_archived);
    }
}
