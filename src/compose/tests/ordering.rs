//! Order specification tests.

use crate::compose::QueryComposer;
use crate::error::SybilError;

fn specs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_bare_column_defaults_to_asc() {
    let composer = QueryComposer::new("SELECT * FROM users");
    let query = composer
        .apply_ordering(composer.base(), &specs(&["name"]))
        .unwrap();
    assert_eq!(query, "SELECT * FROM users ORDER BY name ASC");
}

#[test]
fn test_explicit_directions_uppercased() {
    let composer = QueryComposer::new("SELECT * FROM users");
    let query = composer
        .apply_ordering(composer.base(), &specs(&["id DESC", "name asc"]))
        .unwrap();
    assert_eq!(query, "SELECT * FROM users ORDER BY id DESC, name ASC");
}

#[test]
fn test_qualified_column_accepted() {
    let composer = QueryComposer::new("SELECT * FROM users u");
    let query = composer
        .apply_ordering(composer.base(), &specs(&["u.created_at desc"]))
        .unwrap();
    assert_eq!(query, "SELECT * FROM users u ORDER BY u.created_at DESC");
}

#[test]
fn test_unknown_direction_rejected() {
    let composer = QueryComposer::new("SELECT * FROM users");
    let err = composer
        .apply_ordering(composer.base(), &specs(&["name SIDEWAYS"]))
        .unwrap_err();
    assert!(matches!(err, SybilError::InvalidOrderSpec(_)));
}

#[test]
fn test_too_many_tokens_rejected() {
    let composer = QueryComposer::new("SELECT * FROM users");
    let err = composer
        .apply_ordering(composer.base(), &specs(&["name ASC NULLS"]))
        .unwrap_err();
    assert!(matches!(err, SybilError::InvalidOrderSpec(_)));
}

#[test]
fn test_invalid_column_rejected() {
    let composer = QueryComposer::new("SELECT * FROM users");
    let err = composer
        .apply_ordering(composer.base(), &specs(&["1abc"]))
        .unwrap_err();
    assert!(matches!(err, SybilError::InvalidIdentifier(_)));
}

#[test]
fn test_empty_order_leaves_query_unchanged() {
    let composer = QueryComposer::new("SELECT * FROM users");
    let query = composer.apply_ordering(composer.base(), &[]).unwrap();
    assert_eq!(query, "SELECT * FROM users");
}
