use crate::knowledge::{KnowledgeBase, Statement, ValidatedKnowledgeBase};
use crate::semantic::{is_symbol_char, Arity, Clause, Expression, Operator};
use crate::{EntailResult, LogicError};
use std::fmt;
use std::sync::Arc;

/// The first structural rule an expression breaks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    EmptySymbol,
    IllegalSymbol {
        name: String,
    },
    Arity {
        op: Operator,
        expected: Arity,
        found: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptySymbol => write!(f, "Empty symbol"),
            Violation::IllegalSymbol { name } => write!(f, "Illegal symbol '{}'", name),
            Violation::Arity {
                op,
                expected,
                found,
            } => write!(
                f,
                "Connective '{}' takes {}, found {}",
                op, expected, found
            ),
        }
    }
}

impl Violation {
    fn suggestion(&self) -> &'static str {
        match self {
            Violation::EmptySymbol | Violation::IllegalSymbol { .. } => {
                "symbols are non-empty runs of letters, digits and '_'"
            }
            Violation::Arity { .. } => {
                "not takes 1 operand, if and iff take 2, and/or/xor take 1 or more"
            }
        }
    }
}

/// Structural checks run after parsing and before entailment
///
/// Connective words are resolved while parsing, so an unknown connective
/// never reaches the validator; it is reported by the parser as an
/// invalid-expression error.
#[derive(Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Whether `expr` and every operand below it satisfy the grammar rules
    pub fn is_valid(&self, expr: &Expression) -> bool {
        self.check(expr).is_ok()
    }

    /// Check `expr` top-down, stopping at the first violation
    pub fn check(&self, expr: &Expression) -> Result<(), Violation> {
        match expr {
            Expression::Atom { name } => check_symbol(name),
            Expression::Connective { op, operands } => {
                let expected = op.arity();
                if !expected.accepts(operands.len()) {
                    return Err(Violation::Arity {
                        op: *op,
                        expected,
                        found: operands.len(),
                    });
                }
                operands.iter().try_for_each(|operand| self.check(operand))
            }
        }
    }

    /// Validate every clause of a knowledge base and freeze it
    ///
    /// The base is rejected as a whole on the first invalid clause.
    pub fn validate_knowledge_base(
        &self,
        kb: KnowledgeBase,
    ) -> EntailResult<ValidatedKnowledgeBase> {
        for clause in kb.clauses() {
            self.validate_clause(clause, kb.source_text(&clause.source_id))?;
        }
        Ok(ValidatedKnowledgeBase::new(kb))
    }

    pub fn validate_statement(&self, statement: &Statement) -> EntailResult<()> {
        self.validate_clause(&statement.clause, statement.source_text.clone())
    }

    fn validate_clause(&self, clause: &Clause, source_text: Arc<str>) -> EntailResult<()> {
        self.check(&clause.expression).map_err(|violation| {
            LogicError::invalid_with_suggestion(
                format!("{} in clause {}", violation, clause.expression),
                clause.span.clone(),
                clause.source_id.clone(),
                source_text,
                violation.suggestion(),
            )
        })
    }
}

fn check_symbol(name: &str) -> Result<(), Violation> {
    if name.is_empty() {
        return Err(Violation::EmptySymbol);
    }
    if !name.chars().all(is_symbol_char) {
        return Err(Violation::IllegalSymbol {
            name: name.to_string(),
        });
    }
    Ok(())
}
