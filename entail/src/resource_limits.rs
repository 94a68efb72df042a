/// Resource limits to keep loading and checking predictable
///
/// These limits protect against runaway inputs while being generous enough
/// for hand-written rule sets.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum source size in bytes
    /// Real usage: ~10KB, Limit: 5MB
    pub max_file_size_bytes: usize,

    /// Maximum nesting depth of parenthesized forms
    /// Real usage: ~4 levels, Limit: 100
    pub max_expression_depth: usize,

    /// Maximum number of free symbols a check may enumerate over
    /// Every extra free symbol doubles the number of assignments evaluated.
    /// Unbounded unless set.
    pub max_free_symbols: Option<usize>,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5 MB
            max_expression_depth: 100,
            max_free_symbols: None,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
