use crate::ast::Span;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Detailed error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub source_id: String,
    pub source_text: Arc<str>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        write!(f, " at {}:{}:{}", self.source_id, self.span.line, self.span.col)
    }
}

/// Error types for loading, validating and checking clauses
#[derive(Debug, Clone, Error)]
pub enum LogicError {
    /// Malformed clause text: illegal character, unexpected end of input
    #[error("Parse error: {0}")]
    Parse(Box<ErrorDetails>),

    /// Structurally invalid clause: unknown connective, wrong arity, bad symbol
    #[error("Invalid expression: {0}")]
    Invalid(Box<ErrorDetails>),

    /// A configured resource limit was exceeded
    #[error("Resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value}). {suggestion}")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    /// Input that cannot be pinned to a single location
    #[error("Input error: {0}")]
    Input(String),
}

impl LogicError {
    /// Create a parse error with source information
    pub fn parse(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: None,
        }))
    }

    /// Create a parse error with suggestion
    pub fn parse_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: Some(suggestion.into()),
        }))
    }

    /// Create a validation error with source information
    pub fn invalid(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::Invalid(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: None,
        }))
    }

    /// Create a validation error with suggestion
    pub fn invalid_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Invalid(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: Some(suggestion.into()),
        }))
    }

    /// Source details, for errors that point into a source
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            LogicError::Parse(details) | LogicError::Invalid(details) => Some(details),
            LogicError::ResourceLimitExceeded { .. } | LogicError::Input(_) => None,
        }
    }
}
