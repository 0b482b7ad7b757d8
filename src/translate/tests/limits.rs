//! Row-limit rewrite tests, textual and structured shapes.

use crate::translate::{LimitRewriter, RowBounds, translate};

#[test]
fn test_limit_to_top() {
    let result = translate("SELECT * FROM users LIMIT 10");
    assert_eq!(result, "SELECT TOP 10 * FROM users");
}

#[test]
fn test_limit_offset_to_top_start_at() {
    // START AT is 1-based: skipping 20 rows starts at row 21.
    let result = translate("SELECT * FROM users LIMIT 10 OFFSET 20");
    assert_eq!(result, "SELECT TOP 10 START AT 21 * FROM users");
}

#[test]
fn test_offset_zero_is_plain_top() {
    let result = translate("SELECT * FROM t LIMIT 5 OFFSET 0");
    assert_eq!(result, "SELECT TOP 5 * FROM t");
}

#[test]
fn test_non_trailing_limit_passes_through() {
    let sql = "SELECT * FROM (SELECT * FROM t LIMIT 5) sub";
    assert_eq!(translate(sql), sql);
}

#[test]
fn test_lowercase_keywords() {
    let result = translate("select * from users where active = true limit 5");
    assert_eq!(result, "SELECT TOP 5 * from users where active = 1");
}

#[test]
fn test_bounds_top_fast_path() {
    let rewriter = LimitRewriter::new();
    let result = rewriter.apply_bounds("SELECT id FROM t", RowBounds::first(10));
    assert_eq!(result, "SELECT TOP 10 id FROM t");
}

#[test]
fn test_bounds_no_op() {
    let rewriter = LimitRewriter::new();
    let result = rewriter.apply_bounds("SELECT id FROM t", RowBounds::new(0, None));
    assert_eq!(result, "SELECT id FROM t");
}

#[test]
fn test_bounds_window_wrap() {
    let rewriter = LimitRewriter::new();
    let result = rewriter.apply_bounds("SELECT id FROM t", RowBounds::new(20, Some(30)));
    assert!(result.contains("ROW_NUMBER() OVER (ORDER BY (SELECT NULL)) AS __row_num__"));
    assert!(result.contains("FROM (SELECT id FROM t) inner_query"));
    assert!(result.contains("WHERE __row_num__ > 20 AND __row_num__ <= 30"));
}

#[test]
fn test_bounds_window_wrap_without_upper() {
    let rewriter = LimitRewriter::new();
    let result = rewriter.apply_bounds("SELECT id FROM t", RowBounds::new(20, None));
    assert!(result.contains("WHERE __row_num__ > 20"));
    assert!(!result.contains("<="));
}
