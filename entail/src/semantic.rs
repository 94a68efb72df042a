use crate::ast::Span;
use serde::Serialize;
use std::fmt;

/// Characters allowed in a symbol name: alphanumerics and underscore
pub fn is_symbol_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A propositional connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Not,
    And,
    Or,
    Xor,
    If,
    Iff,
}

/// Number of operands a connective accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == *n,
            Arity::AtLeast(n) => count >= *n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(1) => write!(f, "exactly 1 operand"),
            Arity::Exactly(n) => write!(f, "exactly {} operands", n),
            Arity::AtLeast(1) => write!(f, "at least 1 operand"),
            Arity::AtLeast(n) => write!(f, "at least {} operands", n),
        }
    }
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::If,
        Operator::Iff,
    ];

    /// Resolve a connective word, ignoring case
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.keyword().eq_ignore_ascii_case(word))
    }

    /// The word used in clause source text
    pub fn keyword(&self) -> &'static str {
        match self {
            Operator::Not => "not",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Xor => "xor",
            Operator::If => "if",
            Operator::Iff => "iff",
        }
    }

    /// The word used in the canonical infix rendering
    pub fn canonical_word(&self) -> &'static str {
        match self {
            Operator::If => "impl",
            other => other.keyword(),
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Operator::Not => Arity::Exactly(1),
            Operator::If | Operator::Iff => Arity::Exactly(2),
            Operator::And | Operator::Or | Operator::Xor => Arity::AtLeast(1),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A propositional expression: an atomic symbol or a connective over operands
///
/// Operand order is kept as written. It matters for `if`/`iff` and keeps
/// rendering reproducible for the commutative connectives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    Atom {
        name: String,
    },
    Connective {
        op: Operator,
        operands: Vec<Expression>,
    },
}

impl Expression {
    pub fn atom(name: impl Into<String>) -> Self {
        Expression::Atom { name: name.into() }
    }

    pub fn connective(op: Operator, operands: Vec<Expression>) -> Self {
        Expression::Connective { op, operands }
    }

    pub fn not(operand: Expression) -> Self {
        Self::connective(Operator::Not, vec![operand])
    }

    pub fn and(operands: Vec<Expression>) -> Self {
        Self::connective(Operator::And, operands)
    }

    pub fn or(operands: Vec<Expression>) -> Self {
        Self::connective(Operator::Or, operands)
    }

    pub fn xor(operands: Vec<Expression>) -> Self {
        Self::connective(Operator::Xor, operands)
    }

    pub fn implies(antecedent: Expression, consequent: Expression) -> Self {
        Self::connective(Operator::If, vec![antecedent, consequent])
    }

    pub fn iff(left: Expression, right: Expression) -> Self {
        Self::connective(Operator::Iff, vec![left, right])
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Expression::Atom { name } => Some(name),
            Expression::Connective { .. } => None,
        }
    }

    /// The atom under a `(not atom)` form
    pub fn as_negated_atom(&self) -> Option<&str> {
        match self {
            Expression::Connective {
                op: Operator::Not,
                operands,
            } => match operands.as_slice() {
                [operand] => operand.as_atom(),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn operands(&self) -> &[Expression] {
        match self {
            Expression::Atom { .. } => &[],
            Expression::Connective { operands, .. } => operands,
        }
    }

    /// Canonical infix rendering, e.g. `(a and b)`, `(p impl q)`, `(not a)`
    pub fn canonical(&self) -> Canonical<'_> {
        Canonical(self)
    }
}

/// Renders the prefix form accepted by the clause parser, e.g. `(and a (not b))`
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Atom { name } => write!(f, "{}", name),
            Expression::Connective { op, operands } => {
                write!(f, "({}", op)?;
                for operand in operands {
                    write!(f, " {}", operand)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Display adapter for the canonical infix rendering of an [`Expression`]
pub struct Canonical<'a>(&'a Expression);

impl fmt::Display for Canonical<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Expression::Atom { name } => write!(f, "{}", name),
            Expression::Connective {
                op: Operator::Not,
                operands,
            } => {
                write!(f, "(not")?;
                for operand in operands {
                    write!(f, " {}", operand.canonical())?;
                }
                write!(f, ")")
            }
            Expression::Connective { op, operands } => {
                write!(f, "(")?;
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", op.canonical_word())?;
                    }
                    write!(f, "{}", operand.canonical())?;
                }
                write!(f, ")")
            }
        }
    }
}

/// One top-level clause together with where it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub expression: Expression,
    pub source_id: String,
    pub span: Span,
}

impl Clause {
    pub fn new(expression: Expression, source_id: impl Into<String>, span: Span) -> Self {
        Self {
            expression,
            source_id: source_id.into(),
            span,
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}
