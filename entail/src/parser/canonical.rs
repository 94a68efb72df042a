//! Reader for the canonical infix rendering
//!
//! Accepts what [`Expression::canonical`](crate::Expression::canonical) writes:
//! `(not e)`, `(p impl q)`, `(p iff q)` and `(e1 op e2 ... op en)` with a
//! single repeated operator. A one-operand form `(e)` reads back as a
//! conjunction.

use crate::ast::DepthGuard;
use crate::error::LogicError;
use crate::parser::cursor::Cursor;
use crate::semantic::{Expression, Operator};
use crate::{EntailResult, ResourceLimits};

pub fn parse_canonical(text: &str, limits: &ResourceLimits) -> EntailResult<Expression> {
    let mut cursor = Cursor::new(text, "<canonical>");
    let mut depth = DepthGuard::with_max_depth(limits.max_expression_depth);
    let expression = parse_infix(&mut cursor, &mut depth)?;

    cursor.skip_whitespace();
    if !cursor.at_end() {
        let start = cursor.position();
        return Err(cursor.parse_error(
            format!("Unexpected trailing input '{}'", cursor.rest()),
            start,
            text.len(),
        ));
    }
    Ok(expression)
}

fn operator_for_word(word: &str) -> Option<Operator> {
    if word.eq_ignore_ascii_case("impl") {
        return Some(Operator::If);
    }
    match Operator::from_keyword(word) {
        Some(Operator::Not) | None => None,
        op => op,
    }
}

fn parse_infix(cursor: &mut Cursor<'_>, depth: &mut DepthGuard) -> EntailResult<Expression> {
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
            let result = parse_group(cursor, depth);
            depth.pop_depth();
            result
        }
        Some(_) => Ok(Expression::atom(cursor.read_word()?)),
    }
}

fn parse_group(cursor: &mut Cursor<'_>, depth: &mut DepthGuard) -> EntailResult<Expression> {
    let open = cursor.position();
    cursor.bump();
    cursor.skip_whitespace();

    let first = match cursor.peek() {
        None => return Err(cursor.unexpected_end(open)),
        Some('(') => parse_infix(cursor, depth)?,
        Some(_) => {
            let word = cursor.read_word()?;
            if word.eq_ignore_ascii_case("not") {
                let operand = parse_infix(cursor, depth)?;
                expect_close(cursor, open)?;
                return Ok(Expression::not(operand));
            }
            Expression::atom(word)
        }
    };

    let mut op: Option<Operator> = None;
    let mut operands = vec![first];
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            None => return Err(cursor.unexpected_end(open)),
            Some(')') => {
                cursor.bump();
                break;
            }
            Some(_) => {
                let word_start = cursor.position();
                let word = cursor.read_word()?;
                let word_end = cursor.position();
                let found = operator_for_word(word).ok_or_else(|| {
                    cursor.parse_error_with_suggestion(
                        format!("Expected a connective, found '{}'", word),
                        word_start,
                        word_end,
                        "expected one of: and, or, xor, impl, iff",
                    )
                })?;
                match op {
                    None => op = Some(found),
                    Some(existing) if existing != found => {
                        return Err(cursor.parse_error_with_suggestion(
                            format!(
                                "Mixed connectives '{}' and '{}' in one group",
                                existing.canonical_word(),
                                found.canonical_word()
                            ),
                            word_start,
                            word_end,
                            "wrap each connective in its own parentheses",
                        ));
                    }
                    Some(_) => {}
                }
                if !found.arity().accepts(operands.len() + 1) {
                    return Err(cursor.parse_error_with_suggestion(
                        format!(
                            "Connective '{}' takes {}",
                            found.canonical_word(),
                            found.arity()
                        ),
                        word_start,
                        word_end,
                        "wrap each connective in its own parentheses",
                    ));
                }
                operands.push(parse_infix(cursor, depth)?);
            }
        }
    }

    Ok(Expression::connective(op.unwrap_or(Operator::And), operands))
}

fn expect_close(cursor: &mut Cursor<'_>, open: usize) -> EntailResult<()> {
    cursor.skip_whitespace();
    match cursor.peek() {
        None => Err(cursor.unexpected_end(open)),
        Some(')') => {
            cursor.bump();
            Ok(())
        }
        Some(c) => {
            let at = cursor.position();
            Err(cursor.parse_error(
                format!("Expected ')', found '{}'", c),
                at,
                at + c.len_utf8(),
            ))
        }
    }
}
