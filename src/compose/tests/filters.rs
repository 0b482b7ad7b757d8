//! Filter predicate tests.

use uuid::Uuid;

use crate::compose::{FilterClause, QueryComposer};
use crate::error::SybilError;
use crate::value::Value;

#[test]
fn test_value_filter_binds_parameter() {
    let composer = QueryComposer::new("SELECT * FROM users");
    let (query, params) = composer
        .apply_filters(composer.base(), &[FilterClause::new("status", "active")])
        .unwrap();

    assert_eq!(query, "SELECT * FROM users WHERE status = :filter_0");
    assert_eq!(params.get("filter_0"), Some(&Value::String("active".into())));
    assert_eq!(params.len(), 1);
}

#[test]
fn test_null_filter_emits_is_null_without_parameter() {
    let composer = QueryComposer::new("SELECT * FROM users");
    let (query, params) = composer
        .apply_filters(composer.base(), &[FilterClause::new("deleted", Value::Null)])
        .unwrap();

    assert_eq!(query, "SELECT * FROM users WHERE deleted IS NULL");
    assert!(params.is_empty());
}

#[test]
fn test_existing_where_is_extended_with_and() {
    let composer = QueryComposer::new("SELECT * FROM users WHERE active = 1");
    let (query, _) = composer
        .apply_filters(composer.base(), &[FilterClause::new("status", "active")])
        .unwrap();

    assert_eq!(
        query,
        "SELECT * FROM users WHERE active = 1 AND status = :filter_0"
    );
}

#[test]
fn test_predicates_join_in_insertion_order() {
    let composer = QueryComposer::new("SELECT * FROM users");
    let filters = vec![
        FilterClause::new("deleted", Value::Null),
        FilterClause::new("status", "active"),
    ];
    let (query, params) = composer.apply_filters(composer.base(), &filters).unwrap();

    // Parameter names track filter position, so the null filter at index 0
    // leaves a gap rather than shifting later names.
    assert_eq!(
        query,
        "SELECT * FROM users WHERE deleted IS NULL AND status = :filter_1"
    );
    assert_eq!(params.len(), 1);
    assert!(params.contains_key("filter_1"));
}

#[test]
fn test_duplicate_columns_produce_duplicate_predicates() {
    let composer = QueryComposer::new("SELECT * FROM events");
    let filters = vec![
        FilterClause::new("kind", "create"),
        FilterClause::new("kind", "delete"),
    ];
    let (query, params) = composer.apply_filters(composer.base(), &filters).unwrap();

    assert_eq!(
        query,
        "SELECT * FROM events WHERE kind = :filter_0 AND kind = :filter_1"
    );
    assert_eq!(params.len(), 2);
}

#[test]
fn test_typed_scalar_values_bind() {
    let composer = QueryComposer::new("SELECT * FROM sessions");
    let id = Uuid::new_v4();
    let filters = vec![
        FilterClause::new("user_id", id),
        FilterClause::new("attempts", 3i64),
    ];
    let (_, params) = composer.apply_filters(composer.base(), &filters).unwrap();

    assert_eq!(params.get("filter_0"), Some(&Value::Uuid(id)));
    assert_eq!(params.get("filter_1"), Some(&Value::Int(3)));
}

#[test]
fn test_invalid_column_fails_closed() {
    let composer = QueryComposer::new("SELECT * FROM users");
    let err = composer
        .apply_filters(
            composer.base(),
            &[FilterClause::new("status; DROP TABLE users", "x")],
        )
        .unwrap_err();

    assert!(matches!(err, SybilError::InvalidIdentifier(_)));
}

#[test]
fn test_empty_filters_leave_query_unchanged() {
    let composer = QueryComposer::new("SELECT * FROM users");
    let (query, params) = composer.apply_filters(composer.base(), &[]).unwrap();

    assert_eq!(query, "SELECT * FROM users");
    assert!(params.is_empty());
}
