use crate::ast::{DepthGuard, Span};
use crate::error::LogicError;
use crate::resource_limits::ResourceLimits;
use crate::semantic::{Clause, Expression};
use std::sync::Arc;
use tracing::{trace, warn};

pub mod canonical;
pub mod cursor;
pub mod expressions;

pub use canonical::parse_canonical;
pub use cursor::Cursor;

/// Parse every clause in a source text, one clause per line
///
/// Lines starting with `#` and blank lines are skipped. Clauses are returned
/// in line order.
pub fn parse_source(
    content: &str,
    source_id: &str,
    limits: &ResourceLimits,
) -> Result<Vec<Clause>, LogicError> {
    if content.len() > limits.max_file_size_bytes {
        return Err(LogicError::ResourceLimitExceeded {
            limit_name: "max_file_size_bytes".to_string(),
            limit_value: format!(
                "{} bytes ({} MB)",
                limits.max_file_size_bytes,
                limits.max_file_size_bytes / (1024 * 1024)
            ),
            actual_value: format!(
                "{} bytes ({:.2} MB)",
                content.len(),
                content.len() as f64 / (1024.0 * 1024.0)
            ),
            suggestion: "Reduce file size or split the clauses over several files".to_string(),
        });
    }

    let source_text: Arc<str> = Arc::from(content);
    let mut clauses = Vec::new();

    for (index, (offset, line)) in source_lines(content).enumerate() {
        if is_skipped(line) {
            continue;
        }
        let line_no = index + 1;
        let mut cursor = Cursor::for_line(line, offset, line_no, source_id, source_text.clone());
        let expression = parse_clause(&mut cursor, limits)?;
        trace!(source = source_id, line = line_no, clause = %expression, "parsed clause");
        clauses.push(Clause::new(
            expression,
            source_id,
            Span::line(offset, line.len(), line_no),
        ));
    }

    Ok(clauses)
}

/// Parse a single expression from standalone text
pub fn parse(text: &str) -> Result<Expression, LogicError> {
    let mut cursor = Cursor::new(text, "<input>");
    parse_clause(&mut cursor, &ResourceLimits::default())
}

/// Read one clause from the cursor
///
/// Only the first complete expression on the line is used. Anything after
/// it is reported and dropped.
pub fn parse_clause(
    cursor: &mut Cursor<'_>,
    limits: &ResourceLimits,
) -> Result<Expression, LogicError> {
    let mut depth = DepthGuard::with_max_depth(limits.max_expression_depth);
    let expression = expressions::parse_expression(cursor, &mut depth)?;

    cursor.skip_whitespace();
    if !cursor.at_end() {
        let at = cursor.span(cursor.position(), cursor.position());
        warn!(
            line = at.line,
            col = at.col,
            ignored = cursor.rest(),
            "ignoring input after the first expression"
        );
    }
    Ok(expression)
}

/// True for comment lines and lines with nothing to parse
pub fn is_skipped(line: &str) -> bool {
    line.starts_with('#') || line.trim().is_empty()
}

/// Split text into lines paired with their byte offset
///
/// Handles `\n`, `\r\n` and lone `\r` endings; the terminators are not part
/// of the yielded lines.
pub fn source_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    let bytes = content.as_bytes();
    let mut start = 0;
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let mut i = start;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    let line = (start, &content[start..i]);
                    start = i + 1;
                    return Some(line);
                }
                b'\r' => {
                    let line = (start, &content[start..i]);
                    start = if bytes.get(i + 1) == Some(&b'\n') {
                        i + 2
                    } else {
                        i + 1
                    };
                    return Some(line);
                }
                _ => i += 1,
            }
        }
        done = true;
        if start < bytes.len() {
            Some((start, &content[start..]))
        } else {
            None
        }
    })
}
