use regex::Regex;
use std::sync::LazyLock;

use crate::catalogs::{max_header_fields, FILE_DEPTH, MODEL_DEPTH, TERMINATOR, VARIABLE_DEPTH};
use crate::error::ParseError;
use crate::types::*;

// --- Regex patterns ---

static RE_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*$").unwrap());
static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*#").unwrap());
static RE_INDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*").unwrap());

/// Tokenize every line of a diag_table. Fails on the first malformed line.
pub fn lex<I, S>(lines: I, options: &ParseOptions) -> Result<Vec<Line>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, raw)| lex_line(raw.as_ref(), i + 1, options.tab_width))
        .collect()
}

/// Tokenize one raw line, recording its indentation depth.
pub fn lex_line(raw_line: &str, number: usize, tab_width: usize) -> Result<Line, ParseError> {
    // Strip trailing \r for CRLF
    let raw = raw_line.strip_suffix('\r').unwrap_or(raw_line);

    if RE_BLANK.is_match(raw) || RE_COMMENT.is_match(raw) {
        return Ok(Line {
            number,
            raw: raw.to_string(),
            depth: 0,
            fields: Vec::new(),
            terminated: false,
        });
    }

    let indent = RE_INDENT.find(raw).map(|m| m.as_str()).unwrap_or("");
    let (fields, terminated) =
        tokenize(&raw[indent.len()..]).map_err(|reason| ParseError::MalformedLine {
            line: number,
            content: raw.to_string(),
            reason,
        })?;

    Ok(Line {
        number,
        raw: raw.to_string(),
        depth: indent_depth(indent, tab_width),
        fields,
        terminated,
    })
}

/// A tab is one level; every `tab_width` spaces are one more.
fn indent_depth(indent: &str, tab_width: usize) -> usize {
    let tabs = indent.chars().filter(|&c| c == '\t').count();
    let spaces = indent.len() - tabs;
    if tab_width == 0 {
        tabs
    } else {
        tabs + spaces / tab_width
    }
}

/// Split line content on commas outside quotes.
///
/// Quotes (`"` or `'`) are stripped. Whitespace outside quotes separates the
/// fragments of a field. A bare `/` closing the line is removed and reported
/// through the returned flag. A trailing comma adds no empty field.
pub fn tokenize(content: &str) -> Result<(Vec<Field>, bool), String> {
    let mut fields: Vec<Field> = Vec::new();
    let mut current = Field::default();
    let mut word = String::new();
    let mut last_bare = false;
    let mut chars = content.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => {
                if flush_word(&mut word, &mut current) {
                    last_bare = true;
                }
                let mut quoted = String::new();
                let mut closed = false;
                for q in chars.by_ref() {
                    if q == c {
                        closed = true;
                        break;
                    }
                    quoted.push(q);
                }
                if !closed {
                    return Err(format!("unbalanced {c} quote"));
                }
                current.fragments.push(quoted);
                last_bare = false;
            }
            ',' => {
                if flush_word(&mut word, &mut current) {
                    last_bare = true;
                }
                fields.push(std::mem::take(&mut current));
            }
            c if c.is_whitespace() => {
                if flush_word(&mut word, &mut current) {
                    last_bare = true;
                }
            }
            _ => word.push(c),
        }
    }
    if flush_word(&mut word, &mut current) {
        last_bare = true;
    }

    let terminated = last_bare && current.fragments.last().is_some_and(|f| f == TERMINATOR);
    if terminated {
        current.fragments.pop();
    }
    if !current.fragments.is_empty() {
        fields.push(current);
    }

    Ok((fields, terminated))
}

fn flush_word(word: &mut String, field: &mut Field) -> bool {
    if word.is_empty() {
        return false;
    }
    field.fragments.push(std::mem::take(word));
    true
}

/// Decide what a line does to the open hierarchy.
///
/// `open_var_depth` is the depth of the line that opened the variable still
/// accepting sub-parameters, if any. Lines indented past it continue it.
pub fn classify(line: &Line, open_var_depth: Option<usize>) -> Result<LineKind, ParseError> {
    if line.fields.is_empty() {
        return Ok(if line.terminated {
            LineKind::Terminator
        } else {
            LineKind::Blank
        });
    }

    let depth = line.depth;
    let field_count = line.fields.len();
    if let Some(anchor) = open_var_depth {
        if depth > anchor
            || (depth == VARIABLE_DEPTH && field_count > max_header_fields(VARIABLE_DEPTH))
        {
            return Ok(LineKind::Continuation);
        }
    }

    match depth {
        FILE_DEPTH => Ok(LineKind::TopLevelStart),
        MODEL_DEPTH => Ok(LineKind::ModelStart),
        VARIABLE_DEPTH if field_count <= max_header_fields(VARIABLE_DEPTH) => {
            Ok(LineKind::VariableStart)
        }
        _ => Err(ParseError::Structure {
            line: line.number,
            content: line.raw.clone(),
            reason: format!("depth {depth} line with no open variable to continue"),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
