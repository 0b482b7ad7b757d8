//! Rewrite rule tables.
//!
//! Read-only match/replacement pairs, compiled once per [`Translator`] and
//! never written afterwards. Word-boundary tables match whole keywords
//! case-insensitively; the function table matches raw substrings so a call
//! is recognized together with its opening parenthesis.
//!
//! [`Translator`]: super::Translator

/// PostgreSQL type keywords and their Sybase spellings.
///
/// Order is significant: multi-word variants precede their one-word
/// prefixes, so `TIMESTAMP WITH TIME ZONE` maps as a unit before the bare
/// `TIMESTAMP` rule can fire on its first word.
pub const TYPE_RULES: &[(&str, &str)] = &[
    ("BIGSERIAL", "NUMERIC(19,0) IDENTITY"),
    ("SMALLSERIAL", "NUMERIC(5,0) IDENTITY"),
    ("SERIAL", "NUMERIC(10,0) IDENTITY"),
    ("BOOLEAN", "BIT"),
    ("BYTEA", "IMAGE"),
    ("TEXT", "VARCHAR(MAX)"),
    ("DOUBLE PRECISION", "DOUBLE PRECISION"),
    ("TIMESTAMP WITHOUT TIME ZONE", "DATETIME"),
    ("TIMESTAMP WITH TIME ZONE", "DATETIME"),
    ("TIMESTAMP", "DATETIME"),
];

/// PostgreSQL built-ins and their Sybase equivalents.
///
/// Matched as substrings, so entries for real calls include the opening
/// parenthesis. Order is significant: `CURRENT_TIMESTAMP` precedes its
/// prefix `CURRENT_TIME`.
pub const FUNCTION_RULES: &[(&str, &str)] = &[
    ("NOW()", "GETDATE()"),
    ("CURRENT_TIMESTAMP", "GETDATE()"),
    ("CURRENT_DATE", "CONVERT(DATE, GETDATE())"),
    ("CURRENT_TIME", "CONVERT(TIME, GETDATE())"),
    ("LENGTH(", "LEN("),
    ("SUBSTR(", "SUBSTRING("),
    ("RANDOM()", "RAND()"),
];
