//! # Entail
//!
//! **Does the statement follow from what we know?**
//!
//! Entail reads a knowledge base of propositional clauses and a statement,
//! then decides whether the statement is definitely true, definitely false,
//! possibly either, or whether the knowledge base contradicts itself.
//!
//! ## Quick Start
//!
//! ```rust
//! use entail::{Engine, EntailResult, Verdict};
//!
//! fn main() -> EntailResult<()> {
//!     let mut engine = Engine::new();
//!
//!     engine.add_source(
//!         "# wet grass\n(if rain wet_grass)\nrain\n",
//!         "rules.txt",
//!     )?;
//!
//!     let entailment = engine.check("wet_grass", "statement.txt")?;
//!     assert_eq!(entailment.verdict, Verdict::EntailedTrue);
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Clauses
//! One clause per line: a bare symbol such as `rain`, or a prefix form such
//! as `(if rain wet_grass)`. Connectives are `not`, `and`, `or`, `xor`, `if`
//! and `iff`, in any letter case. Lines starting with `#` are comments.
//!
//! ### Seeds
//! A top-level clause that is a bare symbol pins it to true; `(not p)` pins
//! `p` to false. Every other symbol is free.
//!
//! ### Verdicts
//! Every assignment of the free symbols is evaluated. The statement is
//! `definitely true` when it holds in every model of the knowledge base,
//! `definitely false` when it fails in every model, `possibly true, possibly
//! false` when it goes both ways, and `both true and false` when the
//! knowledge base has no model at all.

pub mod analysis;
pub mod ast;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod knowledge;
pub mod parser;
pub mod resource_limits;
pub mod response;
pub mod semantic;
pub mod validator;

pub use analysis::{collect_symbols, SymbolSet, TruthSeed};
pub use ast::Span;
pub use engine::Engine;
pub use error::{ErrorDetails, LogicError};
pub use knowledge::{KnowledgeBase, Statement, ValidatedKnowledgeBase};
pub use parser::{parse, parse_canonical, parse_source};
pub use resource_limits::ResourceLimits;
pub use response::{Entailment, ModelCounts, Verdict};
pub use semantic::*;
pub use validator::{Validator, Violation};

/// Result type for entailment operations
pub type EntailResult<T> = Result<T, LogicError>;

#[cfg(test)]
mod tests;
