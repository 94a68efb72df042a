use crate::analysis::{SymbolSet, TruthSeed};
use crate::ast::Span;
use crate::parser::parse_source;
use crate::semantic::{Clause, Expression};
use crate::{EntailResult, LogicError, ResourceLimits, Validator};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

const MEMORY_SOURCE: &str = "<memory>";

/// Clauses gathered from one or more sources, read as one conjunction
///
/// Clauses keep the order in which sources were added and, within a source,
/// line order.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    clauses: Vec<Clause>,
    sources: HashMap<String, Arc<str>>,
    limits: ResourceLimits,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Build a base straight from expressions, one clause each
    pub fn from_expressions(expressions: impl IntoIterator<Item = Expression>) -> Self {
        let mut kb = Self::new();
        for expression in expressions {
            kb.push(expression);
        }
        kb
    }

    /// Parse a source and append its clauses, returning how many were added
    pub fn add_source(&mut self, content: &str, source_id: &str) -> EntailResult<usize> {
        let clauses = parse_source(content, source_id, &self.limits)?;
        let added = clauses.len();
        debug!(source = source_id, clauses = added, "loaded clauses");

        self.sources.insert(source_id.to_string(), Arc::from(content));
        self.clauses.extend(clauses);
        Ok(added)
    }

    /// Append one clause that has no source text
    pub fn push(&mut self, expression: Expression) {
        self.clauses
            .push(Clause::new(expression, MEMORY_SOURCE, Span::default()));
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Text of a loaded source, empty for unknown ids
    pub fn source_text(&self, source_id: &str) -> Arc<str> {
        self.sources
            .get(source_id)
            .cloned()
            .unwrap_or_else(|| Arc::from(""))
    }

    /// The whole base as `(and clause1 clause2 ...)`
    pub fn expression(&self) -> Expression {
        Expression::and(
            self.clauses
                .iter()
                .map(|clause| clause.expression.clone())
                .collect(),
        )
    }

    pub fn validate(self) -> EntailResult<ValidatedKnowledgeBase> {
        Validator::new().validate_knowledge_base(self)
    }
}

/// A knowledge base that passed validation; read-only from here on
#[derive(Debug, Clone)]
pub struct ValidatedKnowledgeBase {
    kb: KnowledgeBase,
    seed: TruthSeed,
}

impl ValidatedKnowledgeBase {
    pub(crate) fn new(kb: KnowledgeBase) -> Self {
        let seed = TruthSeed::from_clauses(kb.clauses());
        debug!(
            clauses = kb.len(),
            seeded = seed.len(),
            "knowledge base frozen"
        );
        Self { kb, seed }
    }

    pub fn clauses(&self) -> &[Clause] {
        self.kb.clauses()
    }

    pub fn expression(&self) -> Expression {
        self.kb.expression()
    }

    pub fn seed(&self) -> &TruthSeed {
        &self.seed
    }

    pub fn symbols(&self) -> SymbolSet {
        let mut symbols = SymbolSet::new();
        for clause in self.kb.clauses() {
            symbols.extend_from(&clause.expression);
        }
        symbols
    }

    pub fn len(&self) -> usize {
        self.kb.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kb.is_empty()
    }
}

/// The query whose entailment is checked, validated on construction
#[derive(Debug, Clone)]
pub struct Statement {
    pub(crate) clause: Clause,
    pub(crate) source_text: Arc<str>,
}

impl Statement {
    /// Read the single clause of a statement source
    ///
    /// Comment and blank lines are skipped like in knowledge base sources.
    /// Exactly one clause must remain.
    pub fn from_source(
        content: &str,
        source_id: &str,
        limits: &ResourceLimits,
    ) -> EntailResult<Self> {
        let mut clauses = parse_source(content, source_id, limits)?;
        if clauses.len() != 1 {
            return Err(LogicError::Input(format!(
                "Statement source '{}' must contain exactly one clause, found {}",
                source_id,
                clauses.len()
            )));
        }
        let statement = Self {
            clause: clauses.remove(0),
            source_text: Arc::from(content),
        };
        Validator::new().validate_statement(&statement)?;
        Ok(statement)
    }

    pub fn from_expression(expression: Expression) -> EntailResult<Self> {
        let statement = Self {
            clause: Clause::new(expression, MEMORY_SOURCE, Span::default()),
            source_text: Arc::from(""),
        };
        Validator::new().validate_statement(&statement)?;
        Ok(statement)
    }

    pub fn expression(&self) -> &Expression {
        &self.clause.expression
    }

    pub fn clause(&self) -> &Clause {
        &self.clause
    }
}
