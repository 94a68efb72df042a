use crate::ast::DepthGuard;
use crate::error::LogicError;
use crate::parser::cursor::Cursor;
use crate::semantic::{Expression, Operator};

/// Read one expression in prefix form starting at the cursor
///
/// ```text
/// expr       := atom | '(' connective ws expr+ ')'
/// atom       := (alnum | '_')+
/// ```
///
/// The connective word is read directly after `(`. Content after the
/// expression is left for the caller.
pub(crate) fn parse_expression(
    cursor: &mut Cursor<'_>,
    depth: &mut DepthGuard,
) -> Result<Expression, LogicError> {
    cursor.skip_whitespace();
    match cursor.peek() {
        None => {
            let at = cursor.position();
            Err(cursor.parse_error("Expected an expression, found end of input", at, at))
        }
        Some('(') => {
            if let Err(actual) = depth.push_depth() {
                return Err(LogicError::ResourceLimitExceeded {
                    limit_name: "max_expression_depth".to_string(),
                    limit_value: depth.max_depth().to_string(),
                    actual_value: actual.to_string(),
                    suggestion: "Simplify nested expressions to reduce depth".to_string(),
                });
            }
            let result = parse_connective(cursor, depth);
            depth.pop_depth();
            result
        }
        Some(_) => Ok(Expression::atom(cursor.read_word()?)),
    }
}

fn parse_connective(
    cursor: &mut Cursor<'_>,
    depth: &mut DepthGuard,
) -> Result<Expression, LogicError> {
    let open = cursor.position();
    cursor.bump();

    let word_start = cursor.position();
    let word = cursor.read_word()?;
    let word_end = cursor.position();

    let operands = parse_operands(cursor, depth, open)?;

    let op = Operator::from_keyword(word).ok_or_else(|| {
        let message = if word.is_empty() {
            "Missing connective after '('".to_string()
        } else {
            format!("Unknown connective '{}'", word)
        };
        let (start, end) = if word.is_empty() {
            (open, open + 1)
        } else {
            (word_start, word_end)
        };
        cursor.invalid_error_with_suggestion(
            message,
            start,
            end,
            "expected one of: not, and, or, xor, if, iff",
        )
    })?;

    Ok(Expression::connective(op, operands))
}

/// Read operands up to and including the closing `)`
fn parse_operands(
    cursor: &mut Cursor<'_>,
    depth: &mut DepthGuard,
    open: usize,
) -> Result<Vec<Expression>, LogicError> {
    let mut operands = Vec::new();
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            None => return Err(cursor.unexpected_end(open)),
            Some(')') => {
                cursor.bump();
                return Ok(operands);
            }
            Some(_) => operands.push(parse_expression(cursor, depth)?),
        }
    }
}
