//! Error type shared by the engine, the C ABI and the CLI driver.

use thiserror::Error;

/// Failures at the engine's input boundaries.
///
/// Stepping and rendering are total once an engine exists, so every variant
/// here comes from construction, from decoding a rule selector, or from
/// sizing a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A row needs at least one cell to hold the seed.
    #[error("automaton width must be at least 1")]
    ZeroWidth,

    /// Numeric rule selector outside the known set.
    #[error("unknown rule code {0}")]
    UnknownRule(u8),

    /// Textual rule selector outside the known set.
    #[error("unknown rule name '{0}'")]
    UnknownRuleName(String),

    /// A batch history of this size would not fit in memory.
    #[error("history of {generations} generations over {width} cells is too large")]
    HistoryTooLarge { width: usize, generations: u64 },

    /// The batch runner could not start any worker thread.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}
