//! Error taxonomy for feature-matrix construction.

/// Errors surfaced while turning a window batch into a labeled feature matrix.
///
/// Each variant is raised at the boundary of the step that first observes the
/// violated precondition, before any downstream step runs. None of them are
/// recoverable mid-pipeline: the caller gets either a fully consistent
/// `(keys, matrix)` pair or an error, never a partially built or silently
/// misaligned matrix.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// The window batch's series count is not a whole number of samples.
    ///
    /// Detected before the extraction engine is invoked.
    #[error("batch has {n_series} series, not a multiple of {vars_per_sample} variables per sample")]
    ShapeMismatch {
        n_series: usize,
        vars_per_sample: usize,
    },

    /// The engine's output disagrees with the configured shape.
    #[error("engine output mismatch: expected {expected} {what}, got {actual}")]
    EngineOutputMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The feature table's row count is not a whole number of samples,
    /// so at least one sample is missing variable rows.
    #[error("feature table has {n_rows} rows, not a multiple of {vars_per_sample} variables per sample")]
    IncompleteGroup {
        n_rows: usize,
        vars_per_sample: usize,
    },

    /// The variable-name list does not cover every variable slot.
    #[error("got {actual} variable names, expected {expected}")]
    VariableCountMismatch { expected: usize, actual: usize },

    /// The extraction engine itself failed.
    ///
    /// The engine call is all-or-nothing; any internal failure surfaces here
    /// as a single error with the engine's own error as the source.
    #[error("extraction engine failed: {0}")]
    Engine(#[from] Box<dyn std::error::Error + Send + Sync>),
}
