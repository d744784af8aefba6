use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Knobs for [`PredicateCompiler`](crate::compile::PredicateCompiler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CompilerSettings {
    /// Deepest allowed group nesting. The top-level list is depth 0, so a
    /// limit of 0 rejects every group node.
    pub max_depth: usize,

    /// Fall back to ASCII case-insensitive field lookup when no field has
    /// the exact name.
    pub case_insensitive_fields: bool,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            case_insensitive_fields: true,
        }
    }
}

impl CompilerSettings {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_case_insensitive_fields(mut self, enabled: bool) -> Self {
        self.case_insensitive_fields = enabled;
        self
    }
}
