/// How the pipeline reacts when no header row can be located.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// Fall back to content-pattern column scoring when no header exists.
    #[default]
    Auto,
    /// Fail the run when no header exists.
    Require,
}

/// Caller-facing options for one standardization run.
///
/// The size limits guard against pathological uploads before the engine
/// runs; they default to unbounded and are the caller's contract to set.
#[derive(Clone, Debug, Default)]
pub struct Criteria {
    /// Behavior when the grid carries no recognizable header row.
    pub header_policy: HeaderPolicy,

    /// Maximum number of input rows, None for unbounded.
    pub row_limit: Option<usize>,

    /// Maximum number of cells per input row, None for unbounded.
    pub column_limit: Option<usize>,

    /// Maximum characters per text cell, None for unbounded.
    pub cell_limit: Option<usize>,
}
