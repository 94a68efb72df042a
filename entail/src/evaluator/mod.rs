//! Entailment by exhaustive model enumeration
//!
//! Checks a statement against a knowledge base by:
//! 1. Collecting every symbol of the base and the statement
//! 2. Pinning the symbols seeded by top-level unit literals
//! 3. Enumerating all assignments of the remaining free symbols
//! 4. Counting models of the base, split by the statement's value
//!
//! There is no unit propagation and no early exit: every assignment is
//! evaluated, so the cost grows with `2^free`.

pub mod context;
pub mod expression;

use crate::knowledge::{Statement, ValidatedKnowledgeBase};
use crate::response::{Entailment, ModelCounts, Verdict};
use context::{Assignments, SymbolTable};
use expression::Formula;
use tracing::debug;

/// Classifies statements against validated knowledge bases
#[derive(Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Symbols of the base and statement with no seeded value
    pub fn free_symbols(&self, kb: &ValidatedKnowledgeBase, statement: &Statement) -> Vec<String> {
        let mut symbols = kb.symbols();
        symbols.extend_from(statement.expression());
        symbols
            .iter()
            .filter(|name| !kb.seed().is_seeded(name))
            .map(str::to_string)
            .collect()
    }

    /// Count models over every assignment and derive the verdict
    pub fn classify(&self, kb: &ValidatedKnowledgeBase, statement: &Statement) -> Entailment {
        let mut symbols = kb.symbols();
        symbols.extend_from(statement.expression());
        let mut table = SymbolTable::from_symbols(&symbols);

        let base = Formula::all(
            kb.clauses()
                .iter()
                .map(|clause| Formula::compile(&clause.expression, &mut table))
                .collect(),
        );
        let query = Formula::compile(statement.expression(), &mut table);

        let mut assignments = Assignments::new(&table, kb.seed());
        let free_symbols: Vec<String> = assignments
            .free_slots()
            .iter()
            .map(|slot| table.name(*slot).to_string())
            .collect();
        debug!(
            symbols = table.len(),
            free = free_symbols.len(),
            seeded = kb.seed().len(),
            "enumerating assignments"
        );

        let mut counts = ModelCounts::default();
        while let Some(values) = assignments.next_assignment() {
            counts.assignments += 1;
            if !base.eval(values) {
                continue;
            }
            counts.models += 1;
            if query.eval(values) {
                counts.query_true += 1;
            } else {
                counts.query_false += 1;
            }
        }

        let verdict = Verdict::from_counts(&counts);
        debug!(
            assignments = counts.assignments,
            models = counts.models,
            query_true = counts.query_true,
            query_false = counts.query_false,
            verdict = %verdict,
            "classified statement"
        );

        Entailment {
            verdict,
            counts,
            free_symbols,
            seeded: kb.seed().clone(),
        }
    }
}
