use crate::evaluator::Evaluator;
use crate::knowledge::{KnowledgeBase, Statement, ValidatedKnowledgeBase};
use crate::{Entailment, EntailResult, LogicError, ResourceLimits, Validator};

/// The entailment engine.
///
/// Collects knowledge base sources, then checks statements against them.
pub struct Engine {
    knowledge_base: KnowledgeBase,
    validator: Validator,
    evaluator: Evaluator,
    limits: ResourceLimits,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_limits(ResourceLimits::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            knowledge_base: KnowledgeBase::with_limits(limits.clone()),
            validator: Validator,
            evaluator: Evaluator,
            limits,
        }
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Parse a knowledge base source and append its clauses
    pub fn add_source(&mut self, content: &str, source_id: &str) -> EntailResult<usize> {
        self.knowledge_base.add_source(content, source_id)
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Validate the clauses loaded so far
    pub fn validated(&self) -> EntailResult<ValidatedKnowledgeBase> {
        self.validator
            .validate_knowledge_base(self.knowledge_base.clone())
    }

    /// Parse a statement source and check it against the knowledge base
    pub fn check(&self, statement_source: &str, source_id: &str) -> EntailResult<Entailment> {
        let kb = self.validated()?;
        let statement = Statement::from_source(statement_source, source_id, &self.limits)?;
        self.entail(&kb, &statement)
    }

    pub fn check_statement(&self, statement: &Statement) -> EntailResult<Entailment> {
        let kb = self.validated()?;
        self.entail(&kb, statement)
    }

    /// Classify a statement, refusing when the free symbols exceed a
    /// configured limit
    pub fn entail(
        &self,
        kb: &ValidatedKnowledgeBase,
        statement: &Statement,
    ) -> EntailResult<Entailment> {
        if let Some(max_free) = self.limits.max_free_symbols {
            self.check_free_symbols(kb, statement, max_free)?;
        }
        Ok(self.evaluator.classify(kb, statement))
    }

    fn check_free_symbols(
        &self,
        kb: &ValidatedKnowledgeBase,
        statement: &Statement,
        max_free: usize,
    ) -> EntailResult<()> {
        let free = self.evaluator.free_symbols(kb, statement).len();
        if free > max_free {
            return Err(LogicError::ResourceLimitExceeded {
                limit_name: "max_free_symbols".to_string(),
                limit_value: max_free.to_string(),
                actual_value: free.to_string(),
                suggestion: format!(
                    "{} free symbols means 2^{} assignments. Seed more symbols with unit clauses or raise the limit.",
                    free, free
                ),
            });
        }
        Ok(())
    }
}
