use log::{debug, trace, warn};

use crate::catalogs::{max_header_fields, FILE_DEPTH, MODEL_DEPTH, VARIABLE_DEPTH};
use crate::error::ParseError;
use crate::lexer::{classify, lex_line};
use crate::types::*;

// --- Parser state ---

struct OpenGroup {
    group: SubParamGroup,
    /// Free text waiting to prefix the next attribute name (legacy keys only).
    pending: String,
}

struct OpenVar {
    entry: VarEntry,
    /// Depth of the line that opened this variable.
    depth: usize,
    group: Option<OpenGroup>,
}

struct ParserState<'a> {
    options: &'a ParseOptions,
    files: Vec<FileEntry>,
    file: Option<FileEntry>,
    model: Option<ModelEntry>,
    var: Option<OpenVar>,
}

/// Parse diag_table text into the assembled table.
pub fn parse_string(content: &str, options: &ParseOptions) -> Result<DiagTable, ParseError> {
    parse_lines(content.lines(), options)
}

/// Parse an ordered sequence of raw diag_table lines.
///
/// Lines are tokenized and applied one at a time, so the first bad line
/// (malformed or misplaced) is the one reported.
pub fn parse_lines<I, S>(lines: I, options: &ParseOptions) -> Result<DiagTable, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ParserState::new(options);
    for (i, raw) in lines.into_iter().enumerate() {
        let line = lex_line(raw.as_ref(), i + 1, options.tab_width)?;
        state.process_line(&line)?;
    }
    Ok(state.assemble())
}

/// Parse lines that were already tokenized with [`crate::lexer::lex`].
pub fn parse_tokens(lines: &[Line], options: &ParseOptions) -> Result<DiagTable, ParseError> {
    let mut state = ParserState::new(options);
    for line in lines {
        state.process_line(line)?;
    }
    Ok(state.assemble())
}

/// Fill the `longname` default and renumber sub-parameter groups densely,
/// dropping groups that never received an entry. Idempotent.
pub fn normalize_var(entry: &mut VarEntry, null_sentinel: &str) {
    if entry.longname.trim().is_empty() {
        entry.longname = null_sentinel.to_string();
    }

    let before = entry.subparams.len();
    entry.subparams.retain(|g| !g.params.is_empty());
    let dropped = before - entry.subparams.len();
    if dropped > 0 {
        warn!(variable = entry.variable, dropped; "discarded empty sub-parameter groups");
    }

    for (i, group) in entry.subparams.iter_mut().enumerate() {
        group.index = i;
    }
}

impl<'a> ParserState<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            files: Vec::new(),
            file: None,
            model: None,
            var: None,
        }
    }

    fn process_line(&mut self, line: &Line) -> Result<(), ParseError> {
        let kind = classify(line, self.var.as_ref().map(|v| v.depth))?;
        trace!(line = line.number, depth = line.depth, kind:?; "classified line");

        match kind {
            LineKind::TopLevelStart => self.handle_top_level(line)?,
            LineKind::ModelStart => self.handle_model_start(line)?,
            LineKind::VariableStart => self.handle_variable_start(line)?,
            LineKind::Continuation => self.handle_continuation(line)?,
            LineKind::Terminator | LineKind::Blank => {}
        }

        if line.terminated {
            self.close_innermost();
        }
        Ok(())
    }

    fn handle_top_level(&mut self, line: &Line) -> Result<(), ParseError> {
        let texts = header_texts(line, FILE_DEPTH)?;
        let field_type = required(line, &texts[0], "field_type")?.to_lowercase();

        self.close_file();
        debug!(line = line.number, field_type; "opened file entry");
        self.file = Some(FileEntry {
            field_type,
            modlist: Vec::new(),
        });

        if let Some(model_type) = texts.get(1) {
            self.open_model(line, model_type);
            if let Some(variable) = texts.get(2) {
                self.open_var(line, variable, texts.get(3))?;
            }
        }
        Ok(())
    }

    fn handle_model_start(&mut self, line: &Line) -> Result<(), ParseError> {
        let texts = header_texts(line, MODEL_DEPTH)?;
        if self.file.is_none() {
            return Err(structure_error(line, "model line with no open file entry"));
        }

        self.open_model(line, &texts[0]);
        if let Some(variable) = texts.get(1) {
            self.open_var(line, variable, texts.get(2))?;
        }
        Ok(())
    }

    fn handle_variable_start(&mut self, line: &Line) -> Result<(), ParseError> {
        let texts = header_texts(line, VARIABLE_DEPTH)?;
        if self.model.is_none() {
            return Err(structure_error(line, "variable line with no open model entry"));
        }

        self.open_var(line, &texts[0], texts.get(1))
    }

    fn handle_continuation(&mut self, line: &Line) -> Result<(), ParseError> {
        let mode = self.options.key_mode;
        let tokens = line.tokens(mode);

        let Some(var) = self.var.as_mut() else {
            return Err(structure_error(line, "continuation line with no open variable"));
        };
        let index = var.entry.subparams.len();
        if var.group.is_none() {
            debug!(variable = var.entry.variable, index; "opened sub-parameter group");
        }
        let open = var.group.get_or_insert_with(|| OpenGroup {
            group: SubParamGroup {
                index,
                params: Vec::new(),
            },
            pending: String::new(),
        });

        match mode {
            KeyMode::Legacy => match tokens.as_slice() {
                [] => {}
                [text] => open.pending.push_str(text),
                [dropped @ .., key, value] => {
                    if !dropped.is_empty() {
                        warn!(line = line.number, dropped:?; "dropped leading continuation tokens");
                    }
                    let key = format!("{}{}", std::mem::take(&mut open.pending), key);
                    open.group.params.push(SubParam {
                        key,
                        value: value.clone(),
                    });
                }
            },
            KeyMode::Paired => {
                if tokens.len() % 2 != 0 {
                    return Err(ParseError::MalformedLine {
                        line: line.number,
                        content: line.raw.clone(),
                        reason: format!("{} tokens do not form name/value pairs", tokens.len()),
                    });
                }
                for pair in tokens.chunks(2) {
                    open.group.params.push(SubParam {
                        key: pair[0].clone(),
                        value: pair[1].clone(),
                    });
                }
            }
        }
        Ok(())
    }

    fn open_model(&mut self, line: &Line, model_type: &str) {
        self.close_model();
        debug!(line = line.number, model_type; "opened model entry");
        self.model = Some(ModelEntry {
            model_type: model_type.to_string(),
            varlist: Vec::new(),
        });
    }

    fn open_var(
        &mut self,
        line: &Line,
        variable: &str,
        longname: Option<&String>,
    ) -> Result<(), ParseError> {
        let variable = required(line, variable, "variable")?;

        self.close_var();
        debug!(line = line.number, variable; "opened variable entry");
        self.var = Some(OpenVar {
            entry: VarEntry {
                variable,
                longname: longname.cloned().unwrap_or_default(),
                subparams: Vec::new(),
            },
            depth: line.depth,
            group: None,
        });
        Ok(())
    }

    /// Close the deepest open level only.
    fn close_innermost(&mut self) {
        if let Some(var) = self.var.as_ref() {
            if var.group.is_some() {
                self.close_group();
            } else {
                self.close_var();
            }
        } else if self.model.is_some() {
            self.close_model();
        } else if self.file.is_some() {
            self.close_file();
        } else {
            debug!("terminator with nothing open");
        }
    }

    fn close_group(&mut self) {
        let Some(var) = self.var.as_mut() else {
            return;
        };
        if let Some(open) = var.group.take() {
            if !open.pending.is_empty() {
                warn!(variable = var.entry.variable, text = open.pending; "free text not followed by an attribute was dropped");
            }
            var.entry.subparams.push(open.group);
        }
    }

    fn close_var(&mut self) {
        self.close_group();
        if let Some(open) = self.var.take() {
            let mut entry = open.entry;
            normalize_var(&mut entry, &self.options.null_sentinel);
            if let Some(model) = self.model.as_mut() {
                model.varlist.push(entry);
            }
        }
    }

    fn close_model(&mut self) {
        self.close_var();
        if let Some(model) = self.model.take() {
            if let Some(file) = self.file.as_mut() {
                file.modlist.push(model);
            }
        }
    }

    fn close_file(&mut self) {
        self.close_model();
        if let Some(file) = self.file.take() {
            self.files.push(file);
        }
    }

    /// Close everything still open and hand back the finished table.
    fn assemble(mut self) -> DiagTable {
        self.close_file();
        debug!(files = self.files.len(); "assembled diag_table");
        DiagTable { files: self.files }
    }
}

fn header_texts(line: &Line, depth: usize) -> Result<Vec<String>, ParseError> {
    let texts = line.texts();
    let max = max_header_fields(depth);
    if texts.len() > max {
        return Err(structure_error(
            line,
            &format!(
                "{} fields on a depth {depth} header line (at most {max})",
                texts.len()
            ),
        ));
    }
    Ok(texts)
}

fn required(line: &Line, value: &str, field: &'static str) -> Result<String, ParseError> {
    if value.trim().is_empty() {
        return Err(ParseError::MissingRequiredField {
            line: line.number,
            content: line.raw.clone(),
            field,
        });
    }
    Ok(value.to_string())
}

fn structure_error(line: &Line, reason: &str) -> ParseError {
    ParseError::Structure {
        line: line.number,
        content: line.raw.clone(),
        reason: reason.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
