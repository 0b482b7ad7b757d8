//! Row-limit rewriting.
//!
//! Sybase ASE has no LIMIT/OFFSET. A trailing textual clause moves into a
//! `TOP n [START AT m+1]` directly after SELECT; structured bounds with a
//! non-zero skip are emulated with a `ROW_NUMBER()` wrapper, because `TOP`
//! alone can only take a prefix, never skip one.

use regex::Regex;

use crate::dialect::{SqlGenerator, SybaseGenerator};

/// Absolute row bounds, as a query planner holds them: skip `low` rows,
/// stop after row `high` (exclusive of nothing; `high` is the last row
/// index returned).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBounds {
    pub low: u64,
    pub high: Option<u64>,
}

impl RowBounds {
    pub fn new(low: u64, high: Option<u64>) -> Self {
        Self { low, high }
    }

    /// Bounds with no skipped prefix.
    pub fn first(high: u64) -> Self {
        Self { low: 0, high: Some(high) }
    }
}

/// Rewrites row-limiting syntax for the target dialect.
pub struct LimitRewriter {
    limit_pattern: Regex,
    select_pattern: Regex,
    generator: SybaseGenerator,
}

impl Default for LimitRewriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LimitRewriter {
    pub fn new() -> Self {
        Self {
            limit_pattern: Regex::new(r"(?i)\bLIMIT\s+(\d+)(?:\s+OFFSET\s+(\d+))?\s*$").unwrap(),
            select_pattern: Regex::new(r"(?i)\bSELECT\b").unwrap(),
            generator: SybaseGenerator,
        }
    }

    /// Rewrite a trailing `LIMIT n [OFFSET m]` into `TOP n [START AT m+1]`.
    ///
    /// The clause must be the final clause of the statement; anything else
    /// (mid-statement LIMIT, unioned selects) passes through unchanged.
    /// `OFFSET 0` is equivalent to no offset. START AT is 1-based, hence
    /// the +1.
    pub fn rewrite(&self, sql: &str) -> String {
        let Some(caps) = self.limit_pattern.captures(sql) else {
            return sql.to_string();
        };
        let Ok(limit) = caps[1].parse::<u64>() else {
            return sql.to_string();
        };
        let offset = caps
            .get(2)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0);
        let start_at = if offset > 0 { Some(offset + 1) } else { None };

        let stripped = self.limit_pattern.replace(sql, "");
        let stripped = stripped.trim_end();
        let top = self.generator.top_clause(limit, start_at);
        self.select_pattern
            .replacen(stripped, 1, format!("SELECT {}", top).as_str())
            .into_owned()
    }

    /// Apply structured bounds to a statement carrying no textual LIMIT.
    ///
    /// A zero skip becomes a plain `TOP` prefix. A non-zero skip wraps the
    /// statement: the original column list is preserved unchanged inside a
    /// subquery, a synthetic row sequence is projected over an arbitrary
    /// deterministic order, and the outer query keeps rows with
    /// `low < seq <= high`.
    pub fn apply_bounds(&self, sql: &str, bounds: RowBounds) -> String {
        match (bounds.low, bounds.high) {
            (0, None) => sql.to_string(),
            (0, Some(high)) => {
                let top = self.generator.top_clause(high, None);
                self.select_pattern
                    .replacen(sql, 1, format!("SELECT {}", top).as_str())
                    .into_owned()
            }
            (low, high) => {
                let upper_filter = match high {
                    Some(h) => format!(" AND __row_num__ <= {}", h),
                    None => String::new(),
                };
                format!(
                    "SELECT * FROM (\n    SELECT {} AS __row_num__, inner_query.*\n    FROM ({}) inner_query\n) outer_query\nWHERE __row_num__ > {}{}",
                    self.generator.row_number(),
                    sql,
                    low,
                    upper_filter
                )
            }
        }
    }
}
