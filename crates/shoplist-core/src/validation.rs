//! Input guards
//!
//! Run by the UI before it forwards an intent, so blank input never reaches
//! the store and a duplicate invite can be reported to the user. The store
//! applies the same rules again and silently ignores what fails them.

use crate::domain::{DomainError, DomainResult, ShoppingList, UserId};

/// Trimmed `value`, or `InvalidInput` when nothing is left
pub fn required_text(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

/// Trimmed email to invite into `list`.
///
/// The duplicate check is an exact, case-sensitive comparison.
pub fn check_new_member(list: &ShoppingList, email: &str) -> DomainResult<String> {
    let email = required_text("email", email)?;
    if list.is_owner(&email) {
        return Err(DomainError::Conflict(format!("{email} owns this list")));
    }
    if list.is_member(&email) {
        return Err(DomainError::Conflict(
            "This email is already a member of the list".to_string(),
        ));
    }
    Ok(email)
}

/// Member to add for the invite form's `input`.
///
/// Blank input is `Ok(None)`: the form simply ignores it. Only a duplicate
/// or the owner's own address is an error worth showing.
pub fn invite_candidate(list: &ShoppingList, input: &str) -> DomainResult<Option<UserId>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    check_new_member(list, input).map(Some)
}

/// Non-blank, trimmed entries of the new-list member rows, first occurrence
/// wins
pub fn collect_member_emails<S: AsRef<str>>(inputs: &[S]) -> Vec<UserId> {
    let mut emails: Vec<UserId> = Vec::new();
    for input in inputs {
        let email = input.as_ref().trim();
        if !email.is_empty() && !emails.iter().any(|e| e == email) {
            emails.push(email.to_string());
        }
    }
    emails
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> ShoppingList {
        ShoppingList::new("1", "Weekly", "john", vec!["jane".to_string()], vec![])
    }

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("name", "  Snacks ").unwrap(), "Snacks");
        assert!(matches!(
            required_text("name", " \t "),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_check_new_member() {
        assert_eq!(check_new_member(&list(), " bob ").unwrap(), "bob");
        assert!(matches!(check_new_member(&list(), "jane"), Err(DomainError::Conflict(_))));
        assert!(matches!(check_new_member(&list(), "john"), Err(DomainError::Conflict(_))));
        assert!(matches!(check_new_member(&list(), ""), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_invite_candidate_ignores_blank_input() {
        assert_eq!(invite_candidate(&list(), "  "), Ok(None));
        assert_eq!(invite_candidate(&list(), ""), Ok(None));
        assert_eq!(invite_candidate(&list(), " bob "), Ok(Some("bob".to_string())));
        assert!(matches!(invite_candidate(&list(), "jane"), Err(DomainError::Conflict(_))));
    }

    #[test]
    fn test_member_check_is_case_sensitive() {
        assert_eq!(check_new_member(&list(), "Jane").unwrap(), "Jane");
    }

    #[test]
    fn test_collect_member_emails() {
        let rows = ["a@x.com", " ", "b@x.com ", "a@x.com", ""];
        assert_eq!(collect_member_emails(&rows), vec!["a@x.com", "b@x.com"]);
    }
}
