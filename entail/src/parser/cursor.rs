use crate::ast::Span;
use crate::error::LogicError;
use crate::semantic::is_symbol_char;
use std::sync::Arc;

/// A read position within one line of clause text
///
/// Every reader takes the cursor by `&mut`, so nested reads see the
/// advancement made by the reads they call.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    line: &'a str,
    pos: usize,
    /// Byte offset of `line` within the whole source
    offset: usize,
    line_no: usize,
    source_id: &'a str,
    source_text: Arc<str>,
}

impl<'a> Cursor<'a> {
    /// Cursor over a standalone piece of text
    pub fn new(text: &'a str, source_id: &'a str) -> Self {
        Self {
            line: text,
            pos: 0,
            offset: 0,
            line_no: 1,
            source_id,
            source_text: Arc::from(text),
        }
    }

    /// Cursor over line `line_no` of a larger source, starting at byte `offset`
    pub fn for_line(
        line: &'a str,
        offset: usize,
        line_no: usize,
        source_id: &'a str,
        source_text: Arc<str>,
    ) -> Self {
        Self {
            line,
            pos: 0,
            offset,
            line_no,
            source_id,
            source_text,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<char> {
        self.line[self.pos..].chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.line.len()
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    /// Everything after the cursor
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Read a run of symbol characters
    ///
    /// The word ends at `)`, at whitespace or at the end of the line. Any
    /// other character is an error.
    pub fn read_word(&mut self) -> Result<&'a str, LogicError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_symbol_char(c) {
                self.bump();
            } else if c == ')' || c.is_whitespace() {
                break;
            } else {
                return Err(self.parse_error_with_suggestion(
                    format!("Unexpected character '{}'", c),
                    self.pos,
                    self.pos + c.len_utf8(),
                    "symbols and connectives may only contain letters, digits and '_'",
                ));
            }
        }
        Ok(&self.line[start..self.pos])
    }

    /// Span between two byte positions of this line
    pub fn span(&self, start: usize, end: usize) -> Span {
        let col = self.line[..start].chars().count() + 1;
        Span::new(self.offset + start, self.offset + end, self.line_no, col)
    }

    pub fn parse_error(&self, message: impl Into<String>, start: usize, end: usize) -> LogicError {
        LogicError::parse(
            message,
            self.span(start, end),
            self.source_id,
            self.source_text.clone(),
        )
    }

    pub fn parse_error_with_suggestion(
        &self,
        message: impl Into<String>,
        start: usize,
        end: usize,
        suggestion: impl Into<String>,
    ) -> LogicError {
        LogicError::parse_with_suggestion(
            message,
            self.span(start, end),
            self.source_id,
            self.source_text.clone(),
            suggestion,
        )
    }

    pub fn invalid_error_with_suggestion(
        &self,
        message: impl Into<String>,
        start: usize,
        end: usize,
        suggestion: impl Into<String>,
    ) -> LogicError {
        LogicError::invalid_with_suggestion(
            message,
            self.span(start, end),
            self.source_id,
            self.source_text.clone(),
            suggestion,
        )
    }

    /// Error for a form opened at `open` that never closed
    pub fn unexpected_end(&self, open: usize) -> LogicError {
        self.parse_error_with_suggestion(
            "Unexpected end of input",
            open,
            self.line.len(),
            "add the missing ')'",
        )
    }
}
