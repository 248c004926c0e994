//! Route table
//!
//! URL paths of the navigational surface. The UI router mounts one view per
//! variant and builds every link through [`AppRoute::to_path`].

use crate::domain::ListId;

const LISTS_PATH: &str = "/lists";
const NEW_LIST_PATH: &str = "/lists/new";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// `/lists`
    Overview,
    /// `/lists/new`
    NewList,
    /// `/lists/:listId`
    Detail(ListId),
    /// `/lists/:listId/members`
    Members(ListId),
}

impl AppRoute {
    pub fn to_path(&self) -> String {
        match self {
            AppRoute::Overview => LISTS_PATH.to_string(),
            AppRoute::NewList => NEW_LIST_PATH.to_string(),
            AppRoute::Detail(id) => format!("{LISTS_PATH}/{id}"),
            AppRoute::Members(id) => format!("{LISTS_PATH}/{id}/members"),
        }
    }

    /// Where `/` redirects
    pub fn landing() -> Self {
        AppRoute::Overview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppRoute::Overview, "/lists")]
    #[case(AppRoute::NewList, "/lists/new")]
    #[case(AppRoute::Detail(ListId::from("17")), "/lists/17")]
    #[case(AppRoute::Members(ListId::from("17")), "/lists/17/members")]
    fn test_to_path(#[case] route: AppRoute, #[case] expected: &str) {
        assert_eq!(route.to_path(), expected);
    }

    #[test]
    fn test_landing_is_overview() {
        assert_eq!(AppRoute::landing().to_path(), "/lists");
    }
}
