//! Evaluation settings.

/// The default bound on the nesting of parentheses and unary minus.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum nesting of parentheses and unary minus.
    ///
    /// Inputs exceeding it are rejected with `ParseError::NestingTooDeep`.
    /// Operator chains like `1+2+3` do not nest and are not limited.
    /// A value of zero is treated as one.
    pub fn max_depth(&mut self, max_depth: usize) -> &mut Self {
        self.max_depth = max_depth.max(1);
        self
    }
}
