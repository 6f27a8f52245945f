//! Errors raised while converting a diag_table.
//!
//! Every variant aborts the whole parse; there is no partial output.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line could not be tokenized (unbalanced quotes, odd pair count).
    #[error("line {line}: malformed line ({reason}): {content}")]
    MalformedLine {
        line: usize,
        content: String,
        reason: String,
    },

    /// The line does not fit the nesting of the lines before it.
    #[error("line {line}: structure error ({reason}): {content}")]
    Structure {
        line: usize,
        content: String,
        reason: String,
    },

    /// A file entry without `field_type` or a variable entry without `variable`.
    #[error("line {line}: missing required field \"{field}\": {content}")]
    MissingRequiredField {
        line: usize,
        content: String,
        field: &'static str,
    },
}

impl ParseError {
    /// 1-based line number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedLine { line, .. }
            | ParseError::Structure { line, .. }
            | ParseError::MissingRequiredField { line, .. } => *line,
        }
    }

    /// Raw text of the offending line.
    pub fn content(&self) -> &str {
        match self {
            ParseError::MalformedLine { content, .. }
            | ParseError::Structure { content, .. }
            | ParseError::MissingRequiredField { content, .. } => content,
        }
    }
}
