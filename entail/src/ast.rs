//! AST infrastructure types
//!
//! This module contains metadata types used throughout the parser and validator:
//! - `Span` for tracking source code locations
//! - `DepthGuard` for bounding nesting depth while parsing

/// Span representing a location in source code
///
/// `start` and `end` are byte offsets into the whole source text, `line` and
/// `col` are 1-based and point at `start`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub col: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, col: usize) -> Self {
        Self {
            start,
            end,
            line,
            col,
        }
    }

    /// Span covering a whole source line
    pub fn line(start: usize, len: usize, line: usize) -> Self {
        Self::new(start, start + len, line, 1)
    }
}

/// Tracks how deeply nested the form currently being parsed is
#[derive(Debug)]
pub struct DepthGuard {
    depth: usize,
    max_depth: usize,
}

impl DepthGuard {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    pub fn push_depth(&mut self) -> Result<(), usize> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.depth);
        }
        Ok(())
    }

    pub fn pop_depth(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
