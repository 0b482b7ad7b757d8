//! PostgreSQL to Sybase statement translation.
//!
//! An ordered pipeline of eight text-to-text stages. Each stage is total:
//! input carrying none of its trigger tokens passes through unchanged, so
//! translation as a whole never fails.
//!
//! Stage order is fixed; later stages operate on the output of earlier
//! ones, and output stability depends on one canonical order.
//!
//! ```
//! use sybil::translate;
//!
//! let sql = translate("SELECT * FROM t LIMIT 10 OFFSET 20");
//! assert_eq!(sql, "SELECT TOP 10 START AT 21 * FROM t");
//! ```

mod limit;
mod rules;

#[cfg(test)]
mod tests;

pub use limit::{LimitRewriter, RowBounds};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::dialect::{SqlGenerator, SybaseGenerator};
use crate::scanner::{QuoteScanner, QuoteState};

lazy_static! {
    static ref TRANSLATOR: Translator = Translator::new();
}

/// Translate a single PostgreSQL statement into Sybase ASE syntax.
///
/// Uses a process-wide [`Translator`] whose rule tables are compiled once.
/// Behavior is undefined for multi-statement scripts and for statements
/// whose row-limiting clause is not the final clause of the text.
pub fn translate(sql: &str) -> String {
    TRANSLATOR.translate(sql)
}

/// The dialect-translation pipeline with its compiled rule tables.
///
/// Construction compiles every pattern; all later calls only read. A single
/// instance is safe to share across threads.
pub struct Translator {
    bool_rules: Vec<(Regex, &'static str)>,
    type_rules: Vec<(Regex, &'static str)>,
    function_rules: Vec<(Regex, &'static str)>,
    returning_pattern: Regex,
    ilike_pattern: Regex,
    limit: LimitRewriter,
    generator: SybaseGenerator,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    pub fn new() -> Self {
        let generator = SybaseGenerator;
        let bool_rules = vec![
            (Regex::new(r"(?i)\bTRUE\b").unwrap(), generator.bool_literal(true)),
            (Regex::new(r"(?i)\bFALSE\b").unwrap(), generator.bool_literal(false)),
        ];
        let type_rules = rules::TYPE_RULES
            .iter()
            .map(|(pattern, replacement)| {
                let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(pattern))).unwrap();
                (re, *replacement)
            })
            .collect();
        let function_rules = rules::FUNCTION_RULES
            .iter()
            .map(|(pattern, replacement)| {
                let re = Regex::new(&format!("(?i){}", regex::escape(pattern))).unwrap();
                (re, *replacement)
            })
            .collect();
        Self {
            bool_rules,
            type_rules,
            function_rules,
            returning_pattern: Regex::new(r"(?i)\bRETURNING\s+[\w\s,*]+$").unwrap(),
            ilike_pattern: Regex::new(r"(?i)(\w+)\s+ILIKE\s+('[^']*')").unwrap(),
            limit: LimitRewriter::new(),
            generator,
        }
    }

    /// Run the full pipeline. Empty or all-whitespace input is returned
    /// unchanged; otherwise the result is trimmed.
    pub fn translate(&self, sql: &str) -> String {
        if sql.trim().is_empty() {
            return sql.to_string();
        }

        let out = self.rewrite_booleans(sql);
        let out = self.rewrite_concatenation(&out);
        let out = self.rewrite_types(&out);
        let out = self.rewrite_functions(&out);
        let out = self.rewrite_identifier_quotes(&out);
        let out = self.limit.rewrite(&out);
        let out = self.neutralize_returning(&out);
        let out = self.rewrite_ilike(&out);

        trace!(input_len = sql.len(), output_len = out.len(), "translated statement");
        out.trim().to_string()
    }

    /// Stage 1: TRUE/FALSE to 1/0, word-boundary delimited so a keyword
    /// embedded in a longer identifier is never altered.
    fn rewrite_booleans(&self, sql: &str) -> String {
        self.bool_rules
            .iter()
            .fold(sql.to_string(), |acc, (re, replacement)| {
                re.replace_all(&acc, *replacement).into_owned()
            })
    }

    /// Stage 2: `||` to the target concatenation operator, outside quoted
    /// regions only.
    fn rewrite_concatenation(&self, sql: &str) -> String {
        let chars: Vec<char> = sql.chars().collect();
        let mut out = String::with_capacity(sql.len());
        let mut scanner = QuoteScanner::new();
        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];
            let state = scanner.advance(ch);
            if state.outside() && ch == '|' && chars.get(i + 1) == Some(&'|') {
                out.push_str(self.generator.concat_operator());
                scanner.advance('|');
                i += 2;
                continue;
            }
            out.push(ch);
            i += 1;
        }
        out
    }

    /// Stage 3: type keywords, word-boundary delimited, in table order.
    fn rewrite_types(&self, sql: &str) -> String {
        self.type_rules
            .iter()
            .fold(sql.to_string(), |acc, (re, replacement)| {
                re.replace_all(&acc, *replacement).into_owned()
            })
    }

    /// Stage 4: function names, matched with their opening parenthesis
    /// where the call shape allows, in table order.
    fn rewrite_functions(&self, sql: &str) -> String {
        self.function_rules
            .iter()
            .fold(sql.to_string(), |acc, (re, replacement)| {
                re.replace_all(&acc, *replacement).into_owned()
            })
    }

    /// Stage 5: double-quoted identifiers to the target quote pair, string
    /// literal content untouched.
    fn rewrite_identifier_quotes(&self, sql: &str) -> String {
        let (open, close) = self.generator.identifier_quotes();
        let mut out = String::with_capacity(sql.len());
        let mut scanner = QuoteScanner::new();
        for ch in sql.chars() {
            let before = scanner.state();
            let after = scanner.advance(ch);
            match (before, after) {
                (QuoteState::Outside, QuoteState::InIdentifier) => out.push(open),
                (QuoteState::InIdentifier, QuoteState::Outside) => out.push(close),
                _ => out.push(ch),
            }
        }
        out
    }

    /// Stage 7: a trailing RETURNING clause has no Sybase equivalent; keep
    /// it as a line comment so the information is not silently dropped.
    fn neutralize_returning(&self, sql: &str) -> String {
        self.returning_pattern
            .replace(sql, |caps: &regex::Captures| {
                format!(
                    "-- {} (RETURNING not supported in Sybase, use SELECT after INSERT/UPDATE)",
                    &caps[0]
                )
            })
            .into_owned()
    }

    /// Stage 8: ILIKE has no Sybase spelling; wrap both operands in UPPER()
    /// over a plain LIKE.
    fn rewrite_ilike(&self, sql: &str) -> String {
        self.ilike_pattern
            .replace_all(sql, |caps: &regex::Captures| {
                self.generator.fuzzy_compare(&caps[1], &caps[2])
            })
            .into_owned()
    }

    /// Structured row bounds for callers holding integer limits instead of
    /// LIMIT text. See [`LimitRewriter::apply_bounds`].
    pub fn apply_bounds(&self, sql: &str, bounds: RowBounds) -> String {
        self.limit.apply_bounds(sql, bounds)
    }
}
