//! Store scenario tests
//!
//! Mutator behaviour against small hand-built stores and the embedded seed.

use super::*;
use crate::domain::{ItemId, ListId, OwnerFilter, SessionState};
use crate::views::{unresolved_count, visible_lists};

const JOHN: &str = "john";
const JANE: &str = "jane";

fn list_id(id: &str) -> ListId {
    ListId::from(id)
}

fn item_id(id: &str) -> ItemId {
    ItemId::from(id)
}

/// Single list "1" owned by john, shared with jane, holding one unresolved
/// "Milk" item
fn setup_store() -> ListStore {
    ListStore::new(
        SessionState::new(JOHN),
        vec![ShoppingList::new(
            "1",
            "Weekly Groceries",
            JOHN,
            vec![JANE.to_string()],
            vec![Item::new("1", "Milk")],
        )],
    )
}

fn list<'a>(store: &'a ListStore, id: &str) -> &'a ShoppingList {
    store.find(&list_id(id)).expect("list should exist")
}

#[test]
fn test_toggle_item_scenario() {
    let store = setup_store();
    assert_eq!(unresolved_count(list(&store, "1")), 1);

    let next = store.toggle_item(&list_id("1"), &item_id("1"));
    let item = list(&next, "1").item(&item_id("1")).unwrap();
    assert!(item.resolved);
    assert_eq!(unresolved_count(list(&next, "1")), 0);
}

#[test]
fn test_create_list_scenario() {
    let store = setup_store().create_list("Snacks", JOHN, vec![], vec![]);

    let snacks: Vec<_> = store.lists().iter().filter(|l| l.name == "Snacks").collect();
    assert_eq!(snacks.len(), 1);
    let snacks = snacks[0];
    assert_ne!(snacks.id, list_id("1"));
    assert!(!snacks.archived);
    assert!(snacks.items.is_empty());

    let visible = visible_lists(store.lists(), store.session());
    assert!(visible.iter().any(|l| l.id == snacks.id));
}

#[test]
fn test_create_list_assigns_distinct_ids() {
    let store = setup_store()
        .create_list("A", JOHN, vec![], vec![])
        .create_list("B", JOHN, vec![], vec![]);
    let mut ids: Vec<_> = store.lists().iter().map(|l| l.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_create_list_cleans_members_and_name() {
    let store = ListStore::empty(JOHN).create_list(
        "  Snacks ",
        JOHN,
        vec![" jane ".to_string(), String::new(), JOHN.to_string(), "jane".to_string()],
        vec![],
    );
    let created = &store.lists()[0];
    assert_eq!(created.name, "Snacks");
    assert_eq!(created.owner, JOHN);
    assert_eq!(created.members, vec![JANE.to_string()]);
}

#[test]
fn test_create_list_rejects_blank_name() {
    let store = setup_store();
    let next = store.create_list("   ", JOHN, vec![], vec![]);
    assert!(next.shares_lists_with(&store));
    assert_eq!(next.lists().len(), 1);
}

#[test]
fn test_delete_list() {
    let store = setup_store();
    let next = store.delete_list(&list_id("1"));
    assert!(next.lists().is_empty());

    let again = next.delete_list(&list_id("1"));
    assert!(again.shares_lists_with(&next));
}

#[test]
fn test_archive_twice_restores_flag() {
    let store = setup_store();
    let once = store.archive_list(&list_id("1"));
    assert!(list(&once, "1").archived);
    let twice = once.archive_list(&list_id("1"));
    assert_eq!(list(&twice, "1").archived, list(&store, "1").archived);
}

#[test]
fn test_archived_list_hidden_by_default() {
    let store = setup_store().archive_list(&list_id("1"));
    assert!(visible_lists(store.lists(), store.session()).is_empty());
    let shown = store.with_show_archived(true);
    assert_eq!(visible_lists(shown.lists(), shown.session()).len(), 1);
}

#[test]
fn test_rename_list() {
    let store = setup_store();
    let renamed = store.rename_list(&list_id("1"), "  Monthly ");
    assert_eq!(list(&renamed, "1").name, "Monthly");
    assert_eq!(list(&renamed, "1").id, list_id("1"));

    assert!(store.rename_list(&list_id("1"), "  ").shares_lists_with(&store));
    assert!(store
        .rename_list(&list_id("1"), "Weekly Groceries")
        .shares_lists_with(&store));
    assert!(store.rename_list(&list_id("9"), "X").shares_lists_with(&store));
}

#[test]
fn test_leave_list() {
    let store = setup_store();
    let left = store.leave_list(&list_id("1"), JANE);
    assert!(list(&left, "1").members.is_empty());

    let again = left.leave_list(&list_id("1"), JANE);
    assert!(again.shares_lists_with(&left));
}

#[test]
fn test_owner_cannot_leave() {
    let store = setup_store();
    let next = store.leave_list(&list_id("1"), JOHN);
    assert!(next.shares_lists_with(&store));
    assert_eq!(list(&next, "1").owner, JOHN);
}

#[test]
fn test_add_item_appears_once_unresolved() {
    let store = setup_store();
    let next = store.add_item(&list_id("1"), " Bread ");
    let items = &list(&next, "1").items;
    assert_eq!(items.len(), 2);

    let added: Vec<_> = items.iter().filter(|i| i.text == "Bread").collect();
    assert_eq!(added.len(), 1);
    assert!(!added[0].resolved);
    assert_ne!(added[0].id, item_id("1"));
}

#[test]
fn test_add_item_ids_unique_within_list() {
    let store = setup_store()
        .add_item(&list_id("1"), "Bread")
        .add_item(&list_id("1"), "Bread");
    let items = &list(&store, "1").items;
    assert_eq!(items.len(), 3);
    assert_ne!(items[1].id, items[2].id);
}

#[test]
fn test_add_item_rejects_blank_text_and_unknown_list() {
    let store = setup_store();
    assert!(store.add_item(&list_id("1"), " \n ").shares_lists_with(&store));
    let unknown = store.add_item(&list_id("9"), "Bread");
    assert!(unknown.shares_lists_with(&store));
    assert_eq!(unknown, store);
}

#[test]
fn test_toggle_unknown_item_is_noop() {
    let store = setup_store();
    assert!(store
        .toggle_item(&list_id("1"), &item_id("42"))
        .shares_lists_with(&store));
    assert!(store
        .toggle_item(&list_id("42"), &item_id("1"))
        .shares_lists_with(&store));
}

#[test]
fn test_delete_item_twice() {
    let store = setup_store();
    let once = store.delete_item(&list_id("1"), &item_id("1"));
    assert!(list(&once, "1").items.is_empty());

    let twice = once.delete_item(&list_id("1"), &item_id("1"));
    assert!(twice.shares_lists_with(&once));
    assert_eq!(twice, once);
}

#[test]
fn test_add_member_twice_keeps_one_entry() {
    let store = setup_store();
    let next = store
        .add_member(&list_id("1"), "bob")
        .add_member(&list_id("1"), "bob");
    let bobs = list(&next, "1").members.iter().filter(|m| *m == "bob").count();
    assert_eq!(bobs, 1);
}

#[test]
fn test_add_member_rules() {
    let store = setup_store();
    assert!(store.add_member(&list_id("1"), "  ").shares_lists_with(&store));
    assert!(store.add_member(&list_id("1"), JOHN).shares_lists_with(&store));

    // exact match: a differently cased address is a new member
    let next = store.add_member(&list_id("1"), "Jane");
    assert_eq!(list(&next, "1").members, vec![JANE.to_string(), "Jane".to_string()]);
}

#[test]
fn test_remove_member() {
    let store = setup_store();
    let next = store.remove_member(&list_id("1"), JANE);
    assert!(list(&next, "1").members.is_empty());
    assert!(next.remove_member(&list_id("1"), JANE).shares_lists_with(&next));
}

#[test]
fn test_previous_snapshot_unchanged() {
    let store = setup_store();
    let before = store.snapshot();
    let _ = store
        .add_item(&list_id("1"), "Bread")
        .toggle_item(&list_id("1"), &item_id("1"))
        .archive_list(&list_id("1"))
        .remove_member(&list_id("1"), JANE);

    assert_eq!(before.len(), 1);
    assert_eq!(before[0].items.len(), 1);
    assert!(!before[0].items[0].resolved);
    assert!(!before[0].archived);
    assert_eq!(before[0].members, vec![JANE.to_string()]);
}

#[test]
fn test_session_setters_share_lists() {
    let store = setup_store();
    let next = store
        .with_search_term("groc")
        .with_owner_filter(OwnerFilter::Mine)
        .with_show_archived(true);
    assert!(next.shares_lists_with(&store));
    assert_eq!(next.session().search_term, "groc");
    assert_eq!(next.session().owner_filter, OwnerFilter::Mine);
    assert!(next.session().show_archived);
    assert_eq!(next.current_user(), JOHN);
}

#[test]
fn test_fresh_ids_skip_seeded_ids() {
    let (_, store) = crate::seed::initial_store().unwrap();
    let next = store.create_list("Snacks", "john@example.com", vec![], vec![]);
    let created = next.lists().last().unwrap();
    assert!(store.find(&created.id).is_none());
    assert_eq!(created.id.numeric(), Some(4));
}

#[test]
fn test_fresh_ids_after_max_numeric_id() {
    let store = ListStore::new(
        SessionState::new(JOHN),
        vec![ShoppingList::new(u64::MAX, "Edge", JOHN, vec![], vec![Item::new(u64::MAX, "Max")])],
    );
    let next = store
        .create_list("A", JOHN, vec![], vec![])
        .create_list("B", JOHN, vec![], vec![]);
    let mut ids: Vec<_> = next.lists().iter().map(|l| l.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    let edge = ListId::from(u64::MAX);
    let with_items = store.add_item(&edge, "Bread").add_item(&edge, "Eggs");
    let mut item_ids: Vec<_> = list(&with_items, &edge.to_string())
        .items
        .iter()
        .map(|i| i.id.clone())
        .collect();
    item_ids.sort();
    item_ids.dedup();
    assert_eq!(item_ids.len(), 3);
}

#[test]
fn test_create_list_renumbers_supplied_items() {
    let store = ListStore::empty(JOHN).create_list(
        "A",
        JOHN,
        vec![],
        vec![Item::new("1", "x"), Item::new("1", "y").toggled()],
    );
    let created = &store.lists()[0];
    assert_eq!(created.items.len(), 2);
    assert_ne!(created.items[0].id, created.items[1].id);
    assert_ne!(created.items[0].id.as_str(), created.id.as_str());
    assert_eq!(created.items[0].text, "x");
    assert!(created.items[1].resolved);

    let first = created.items[0].id.clone();
    let toggled = store.toggle_item(&created.id, &first);
    let resolved: Vec<_> = toggled.lists()[0].items.iter().map(|i| i.resolved).collect();
    assert_eq!(resolved, vec![true, true]);
    let untouched = store.toggle_item(&created.id, &created.items[1].id.clone());
    let resolved: Vec<_> = untouched.lists()[0].items.iter().map(|i| i.resolved).collect();
    assert_eq!(resolved, vec![false, false]);
}
