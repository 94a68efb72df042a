//! Symbol and seed extraction
//!
//! Shared infrastructure for pulling atomic symbols out of expression trees
//! and for reading directly asserted truth values off a knowledge base.
//!
//! Used by the engine to size and pin the truth-assignment enumeration.

use crate::semantic::{Clause, Expression};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Distinct symbol names in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSet {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl SymbolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every symbol of `expr`, pre-order, skipping ones already present
    pub fn extend_from(&mut self, expr: &Expression) {
        match expr {
            Expression::Atom { name } => {
                if self.seen.insert(name.clone()) {
                    self.names.push(name.clone());
                }
            }
            Expression::Connective { operands, .. } => {
                for operand in operands {
                    self.extend_from(operand);
                }
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

/// Collect the symbols referenced anywhere in an expression.
///
/// # Examples
/// ```text
/// Expression: (or (not p) (and q p))
/// Returns: ["p", "q"]
/// ```
pub fn collect_symbols(expr: &Expression) -> SymbolSet {
    let mut symbols = SymbolSet::new();
    symbols.extend_from(expr);
    symbols
}

impl Expression {
    /// Distinct symbols in pre-order of first appearance
    pub fn symbols(&self) -> Vec<String> {
        collect_symbols(self).into_vec()
    }
}

/// Truth values pinned by unit-literal clauses at the top of a knowledge base
///
/// A symbol without an entry is free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TruthSeed {
    bindings: BTreeMap<String, bool>,
}

impl TruthSeed {
    /// Read seed bindings from the top-level clause list only
    ///
    /// `p` pins `p` to true and `(not p)` pins it to false. Later clauses
    /// overwrite earlier ones; any other clause shape pins nothing.
    pub fn from_clauses<'a>(clauses: impl IntoIterator<Item = &'a Clause>) -> Self {
        let mut bindings = BTreeMap::new();
        for clause in clauses {
            if let Some(name) = clause.expression.as_atom() {
                bindings.insert(name.to_string(), true);
            } else if let Some(name) = clause.expression.as_negated_atom() {
                bindings.insert(name.to_string(), false);
            }
        }
        Self { bindings }
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.bindings.get(name).copied()
    }

    pub fn is_seeded(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
