//! Dynamic query composition.
//!
//! Builds a filtered, ordered, paginated SELECT and its bound-parameter map
//! from structured inputs. Two invariants hold throughout: values travel
//! out-of-band in the parameter map, never in the text; and identifiers
//! pass through [`validate_identifier`] before they touch the text.
//!
//! ```
//! use sybil::compose::{FilterClause, PageRequest, QueryComposer};
//!
//! let composer = QueryComposer::new("SELECT id, name FROM users");
//! let query = composer
//!     .build(
//!         &[FilterClause::new("status", "active")],
//!         &["name".to_string()],
//!         PageRequest::new(1, 10),
//!     )
//!     .unwrap();
//! assert!(query.text.starts_with("SELECT id, name FROM users WHERE status = :filter_0"));
//! ```

mod page;

#[cfg(test)]
mod tests;

pub use page::{PageInfo, PageRequest};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dialect::{SqlGenerator, SybaseGenerator};
use crate::error::{SybilError, SybilResult};
use crate::ident::validate_identifier;
use crate::value::Value;

/// Bound parameters in insertion order.
pub type Params = IndexMap<String, Value>;

/// A composed statement and the parameters to bind when executing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedQuery {
    pub text: String,
    pub params: Params,
}

/// Sort direction of one order specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a direction token case-insensitively.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(SortOrder::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(SortOrder::Desc)
        } else {
            None
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// One column filter. Duplicate columns are allowed; each occurrence
/// produces its own AND-ed predicate in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    pub column: String,
    pub value: Value,
}

impl FilterClause {
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

impl<C: Into<String>, V: Into<Value>> From<(C, V)> for FilterClause {
    fn from((column, value): (C, V)) -> Self {
        Self::new(column, value)
    }
}

/// Builds filterable, orderable, paginated SELECTs over a trusted base
/// statement.
///
/// The base query is trusted: confirming it is a single SELECT is the
/// caller's responsibility, as is executing the composed text. Composition
/// is purely functional; the composer holds no mutable state.
#[derive(Debug, Clone)]
pub struct QueryComposer {
    base: String,
    generator: SybaseGenerator,
}

impl QueryComposer {
    /// Wrap a base SELECT. Surrounding whitespace and one trailing
    /// semicolon are stripped.
    pub fn new(base_query: &str) -> Self {
        let mut base = base_query.trim().to_string();
        if let Some(stripped) = base.strip_suffix(';') {
            base = stripped.trim_end().to_string();
        }
        Self {
            base,
            generator: SybaseGenerator,
        }
    }

    /// The normalized base statement.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Append filter predicates to `query`.
    ///
    /// Null values emit `column IS NULL` with no parameter; everything else
    /// emits `column = :filter_K` and binds the value under that name.
    /// Predicates join with AND, extending an existing WHERE clause when the
    /// keyword is present anywhere in the text (a substring heuristic: a
    /// WHERE inside a literal or comment is misdetected; the trusted-base
    /// contract is what makes this acceptable).
    pub fn apply_filters(
        &self,
        query: &str,
        filters: &[FilterClause],
    ) -> SybilResult<(String, Params)> {
        let mut params = Params::new();
        if filters.is_empty() {
            return Ok((query.to_string(), params));
        }

        let has_where = query.to_ascii_uppercase().contains("WHERE");
        let mut predicates = Vec::with_capacity(filters.len());
        for (idx, filter) in filters.iter().enumerate() {
            let column = validate_identifier(&filter.column)?;
            if filter.value.is_null() {
                predicates.push(format!("{} IS NULL", column));
            } else {
                let name = format!("filter_{}", idx);
                predicates.push(format!("{} = {}", column, self.generator.placeholder(&name)));
                params.insert(name, filter.value.clone());
            }
        }

        let connector = if has_where { "AND" } else { "WHERE" };
        Ok((
            format!("{} {} {}", query, connector, predicates.join(" AND ")),
            params,
        ))
    }

    /// Append an ORDER BY clause built from order specifications.
    ///
    /// Each spec is `column` (direction defaults to ASC) or
    /// `column ASC|DESC`, direction case-insensitive. Column names are
    /// validated; any other shape fails with
    /// [`SybilError::InvalidOrderSpec`].
    pub fn apply_ordering(&self, query: &str, order_by: &[String]) -> SybilResult<String> {
        if order_by.is_empty() {
            return Ok(query.to_string());
        }

        let mut clauses = Vec::with_capacity(order_by.len());
        for spec in order_by {
            let mut tokens = spec.split_whitespace();
            let clause = match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(column), None, None) => {
                    format!("{} {}", validate_identifier(column)?, SortOrder::Asc.keyword())
                }
                (Some(column), Some(direction), None) => {
                    let order = SortOrder::parse(direction)
                        .ok_or_else(|| SybilError::InvalidOrderSpec(spec.clone()))?;
                    format!("{} {}", validate_identifier(column)?, order.keyword())
                }
                _ => return Err(SybilError::InvalidOrderSpec(spec.clone())),
            };
            clauses.push(clause);
        }

        Ok(format!("{} ORDER BY {}", query, clauses.join(", ")))
    }

    /// Append the offset pagination clause, binding `offset` and
    /// `page_size`.
    ///
    /// OFFSET/FETCH is only well-defined relative to an explicit order, so
    /// a no-op ordering expression is injected when the text carries no
    /// ORDER BY (same substring heuristic as the WHERE detection).
    pub fn apply_pagination(&self, query: &str, page: PageRequest) -> (String, Params) {
        let page = page.clamped();

        let mut query = query.to_string();
        if !query.to_ascii_uppercase().contains("ORDER BY") {
            query = format!("{} ORDER BY {}", query, self.generator.null_order());
        }

        let clause = self.generator.offset_fetch(
            &self.generator.placeholder("offset"),
            &self.generator.placeholder("page_size"),
        );
        let query = format!("{} {}", query, clause);

        let mut params = Params::new();
        params.insert("offset".to_string(), Value::Int(page.offset() as i64));
        params.insert("page_size".to_string(), Value::Int(page.page_size as i64));
        (query, params)
    }

    /// Filters, then ordering, then pagination, over the base statement.
    /// Returns the composed text and the union of all bound parameters.
    pub fn build(
        &self,
        filters: &[FilterClause],
        order_by: &[String],
        page: PageRequest,
    ) -> SybilResult<ComposedQuery> {
        let (query, mut params) = self.apply_filters(&self.base, filters)?;
        let query = self.apply_ordering(&query, order_by)?;
        let (query, page_params) = self.apply_pagination(&query, page);
        params.extend(page_params);

        debug!(params = params.len(), "composed data query");
        Ok(ComposedQuery { text: query, params })
    }

    /// Derive the matching COUNT query: `SELECT COUNT(*) AS total` plus the
    /// base text from its first FROM onward, byte-identical, with the same
    /// filters applied (no ordering, no pagination).
    pub fn count_query(&self, filters: &[FilterClause]) -> SybilResult<ComposedQuery> {
        let from_index = self
            .base
            .to_ascii_uppercase()
            .find("FROM")
            .ok_or(SybilError::MissingFromClause)?;
        let count = format!("SELECT COUNT(*) AS total {}", &self.base[from_index..]);
        let (text, params) = self.apply_filters(&count, filters)?;

        debug!(params = params.len(), "composed count query");
        Ok(ComposedQuery { text, params })
    }
}
