//! PostgreSQL to Sybase ASE dialect bridge.
//!
//! Two independent entry points share one target-dialect vocabulary:
//!
//! - [`translate`] rewrites a full PostgreSQL statement into Sybase ASE
//!   syntax (booleans, concatenation, types, functions, identifier quoting,
//!   LIMIT/OFFSET, RETURNING, ILIKE).
//! - [`QueryComposer`] builds a filtered, ordered, paginated SELECT and its
//!   bound-parameter map from structured inputs. Values are always carried
//!   out-of-band; identifiers are validated before they touch the text.
//!
//! ```
//! use sybil::translate;
//!
//! assert_eq!(
//!     translate("SELECT * FROM users WHERE active = TRUE LIMIT 10"),
//!     "SELECT TOP 10 * FROM users WHERE active = 1"
//! );
//! ```

pub mod compose;
pub mod dialect;
pub mod error;
pub mod ident;
pub mod scanner;
pub mod translate;
pub mod value;

pub use compose::{ComposedQuery, FilterClause, QueryComposer};
pub use error::{SybilError, SybilResult};
pub use translate::{Translator, translate};

pub mod prelude {
    pub use crate::compose::{
        ComposedQuery, FilterClause, PageInfo, PageRequest, Params, QueryComposer, SortOrder,
    };
    pub use crate::error::{SybilError, SybilResult};
    pub use crate::ident::validate_identifier;
    pub use crate::translate::{LimitRewriter, RowBounds, Translator, translate};
    pub use crate::value::Value;
}
