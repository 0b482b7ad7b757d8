//! Dialect-specific SQL spellings.
//!
//! The translator and the composer both target Sybase ASE; the trait keeps
//! every target-specific spelling in one place so the two subsystems cannot
//! drift apart.

/// Trait for target-dialect SQL generation.
pub trait SqlGenerator {
    /// Boolean literal on engines without a boolean type.
    fn bool_literal(&self, val: bool) -> &'static str;
    /// String concatenation operator.
    fn concat_operator(&self) -> &'static str;
    /// Identifier quote pair.
    fn identifier_quotes(&self) -> (char, char);
    /// Named bind-parameter placeholder.
    fn placeholder(&self, name: &str) -> String;
    /// Row-limiting clause inserted directly after SELECT. `start_at` is
    /// the 1-based position of the first row to return.
    fn top_clause(&self, limit: u64, start_at: Option<u64>) -> String;
    /// Deterministic no-op ordering expression, for clauses that require an
    /// explicit order.
    fn null_order(&self) -> &'static str;
    /// Synthetic strictly-increasing row sequence projection.
    fn row_number(&self) -> String;
    /// Offset pagination clause over two named parameters.
    fn offset_fetch(&self, offset: &str, fetch: &str) -> String;
    /// Case-insensitive pattern match over two rendered operands.
    fn fuzzy_compare(&self, lhs: &str, rhs: &str) -> String;
}

/// Sybase ASE SQL generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SybaseGenerator;

impl SqlGenerator for SybaseGenerator {
    fn bool_literal(&self, val: bool) -> &'static str {
        if val { "1" } else { "0" }
    }

    fn concat_operator(&self) -> &'static str {
        "+"
    }

    fn identifier_quotes(&self) -> (char, char) {
        ('[', ']')
    }

    fn placeholder(&self, name: &str) -> String {
        format!(":{}", name)
    }

    fn top_clause(&self, limit: u64, start_at: Option<u64>) -> String {
        match start_at {
            Some(start) => format!("TOP {} START AT {}", limit, start),
            None => format!("TOP {}", limit),
        }
    }

    fn null_order(&self) -> &'static str {
        "(SELECT NULL)"
    }

    fn row_number(&self) -> String {
        format!("ROW_NUMBER() OVER (ORDER BY {})", self.null_order())
    }

    fn offset_fetch(&self, offset: &str, fetch: &str) -> String {
        format!("OFFSET {} ROWS FETCH NEXT {} ROWS ONLY", offset, fetch)
    }

    fn fuzzy_compare(&self, lhs: &str, rhs: &str) -> String {
        format!("UPPER({}) LIKE UPPER({})", lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_clause() {
        let generator = SybaseGenerator;
        assert_eq!(generator.top_clause(10, None), "TOP 10");
        assert_eq!(generator.top_clause(10, Some(21)), "TOP 10 START AT 21");
    }

    #[test]
    fn test_placeholder_and_offset_fetch() {
        let generator = SybaseGenerator;
        assert_eq!(generator.placeholder("filter_0"), ":filter_0");
        assert_eq!(
            generator.offset_fetch(":offset", ":page_size"),
            "OFFSET :offset ROWS FETCH NEXT :page_size ROWS ONLY"
        );
    }
}
