//! Evaluator configuration.

/// Evaluator configuration.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Maximum number of nested term evaluations before giving up with
    /// `StackDepthExceeded`.
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: 1_000_000,
        }
    }
}

impl EvalConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum evaluation depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
