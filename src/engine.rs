//! The extraction engine boundary.
//!
//! The statistical engine is an external collaborator: given a long-format
//! batch, it computes one scalar per statistic per group id. This module pins
//! that boundary down as a typed interface. The engine hands back group rows
//! positionally (row `i` = group id `i`) together with the shared statistic
//! vocabulary, so no decoding of stringly-encoded column names is needed to
//! recover which row belongs to which series.

use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::error::FeatureError;
use crate::long_format::LongTable;
use crate::utils::Parallelism;

// =============================================================================
// GroupFeatureTable
// =============================================================================

/// Per-group feature rows plus the shared statistic vocabulary.
///
/// Row `i` holds the statistics for group id `i`. Every row has one column
/// per vocabulary entry, in vocabulary order; the vocabulary is identical and
/// identically ordered for every group.
#[derive(Debug, Clone)]
pub struct GroupFeatureTable {
    vocabulary: Vec<String>,
    rows: Array2<f32>,
}

impl GroupFeatureTable {
    /// Create a table from a vocabulary and `[n_groups, vocab_size]` rows.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `rows` has one column per vocabulary entry.
    pub fn new(vocabulary: Vec<String>, rows: Array2<f32>) -> Self {
        debug_assert_eq!(
            vocabulary.len(),
            rows.ncols(),
            "one row column per statistic name"
        );
        Self { vocabulary, rows }
    }

    /// Number of group rows.
    pub fn n_groups(&self) -> usize {
        self.rows.nrows()
    }

    /// Number of statistics per group.
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Statistic names, in column order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// All group rows, `[n_groups, vocab_size]`.
    pub fn rows(&self) -> ArrayView2<f32> {
        self.rows.view()
    }

    /// The feature row of one group.
    ///
    /// # Panics
    ///
    /// Panics if `group_id >= n_groups`.
    pub fn row(&self, group_id: usize) -> ArrayView1<f32> {
        self.rows.row(group_id)
    }
}

// =============================================================================
// ExtractionEngine
// =============================================================================

/// A statistical feature-extraction engine.
///
/// Given a long-format batch, the engine computes one scalar per vocabulary
/// entry for every group id in the table. The call is synchronous and
/// all-or-nothing: it blocks until every group is done, and any internal
/// failure surfaces as a single error. No partial results are delivered.
///
/// `parallelism` is a hint: when it allows, the engine may fan the per-group
/// work out across the current rayon pool.
pub trait ExtractionEngine {
    fn extract(
        &self,
        table: &LongTable,
        parallelism: Parallelism,
    ) -> Result<GroupFeatureTable, FeatureError>;
}

/// Plain functions and closures act as engines, which keeps test stubs cheap.
impl<F> ExtractionEngine for F
where
    F: Fn(&LongTable, Parallelism) -> Result<GroupFeatureTable, FeatureError>,
{
    fn extract(
        &self,
        table: &LongTable,
        parallelism: Parallelism,
    ) -> Result<GroupFeatureTable, FeatureError> {
        self(table, parallelism)
    }
}
