//! Compiled formulas and their truth-functional evaluation

use crate::evaluator::context::SymbolTable;
use crate::semantic::{Expression, Operator};

/// An expression with symbols resolved to slots of a valuation
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    Var(usize),
    Connective(Operator, Vec<Formula>),
}

impl Formula {
    /// Resolve every atom of `expr` to its slot in `symbols`
    pub fn compile(expr: &Expression, symbols: &mut SymbolTable) -> Formula {
        match expr {
            Expression::Atom { name } => Formula::Var(symbols.slot(name)),
            Expression::Connective { op, operands } => Formula::Connective(
                *op,
                operands
                    .iter()
                    .map(|operand| Formula::compile(operand, symbols))
                    .collect(),
            ),
        }
    }

    /// Conjunction of already compiled formulas
    pub fn all(formulas: Vec<Formula>) -> Formula {
        Formula::Connective(Operator::And, formulas)
    }

    /// Evaluate under a complete assignment
    ///
    /// Validation fixes the arity of `not`, `if` and `iff`. The n-ary readings
    /// used here (nand, right-nested implication, all-equal) reduce to the
    /// usual unary/binary definitions at those arities, so no operand count
    /// can make evaluation fail.
    pub fn eval(&self, values: &[bool]) -> bool {
        match self {
            Formula::Var(slot) => values[*slot],
            Formula::Connective(op, operands) => match op {
                Operator::Not => !operands.iter().all(|f| f.eval(values)),
                Operator::And => operands.iter().all(|f| f.eval(values)),
                Operator::Or => operands.iter().any(|f| f.eval(values)),
                Operator::Xor => operands
                    .iter()
                    .fold(false, |parity, f| parity ^ f.eval(values)),
                Operator::If => match operands.split_last() {
                    None => true,
                    Some((consequent, antecedents)) => antecedents
                        .iter()
                        .rev()
                        .fold(consequent.eval(values), |acc, p| !p.eval(values) || acc),
                },
                Operator::Iff => match operands.split_first() {
                    None => true,
                    Some((first, rest)) => {
                        let expected = first.eval(values);
                        rest.iter().all(|f| f.eval(values) == expected)
                    }
                },
            },
        }
    }
}
