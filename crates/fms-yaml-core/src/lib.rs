//! Converter core for legacy diag_table files.
//!
//! Raw lines are tokenized and classified by [`lexer`], folded into the
//! file → model → variable → sub-parameter hierarchy by [`parser`], and
//! returned as a [`DiagTable`] whose `Serialize` impl yields the
//! `diag_table:` YAML document in input order.

pub mod catalogs;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod types;

pub use catalogs::{NULL_SENTINEL, ROOT_KEY};
pub use error::ParseError;
pub use lexer::{classify, lex, lex_line, tokenize};
pub use parser::{normalize_var, parse_lines, parse_string, parse_tokens};
pub use types::*;
