//! The feature-extraction pipeline.
//!
//! [`FeatureExtractor`] ties the stages together: reshape the window batch
//! into long format, run the engine once over the whole batch, validate its
//! output shape, regroup per-variable rows into per-sample vectors, and
//! expand the vocabulary into column keys. The keys and the matrix are built
//! from the same ordering and returned together as a [`FeatureSet`].

use log::{debug, info};
use ndarray::{Array2, ArrayView2};

use crate::config::ExtractorConfig;
use crate::engine::ExtractionEngine;
use crate::error::FeatureError;
use crate::group::group_by_sample;
use crate::label::feature_keys;
use crate::long_format::LongTable;
use crate::utils::run_with_threads;

// =============================================================================
// FeatureSet
// =============================================================================

/// A labeled feature matrix.
///
/// `keys()[c]` names column `c` of `matrix()` for every column, so a
/// downstream model's per-column importances can be attributed back to the
/// originating variable and statistic.
#[derive(Debug, Clone)]
pub struct FeatureSet {
    keys: Vec<String>,
    matrix: Array2<f32>,
}

impl FeatureSet {
    /// Column names, one per matrix column.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Feature matrix, `[n_samples, vars_per_sample * vocab_size]`.
    pub fn matrix(&self) -> ArrayView2<f32> {
        self.matrix.view()
    }

    /// Consume the set, yielding the aligned `(keys, matrix)` pair.
    pub fn into_parts(self) -> (Vec<String>, Array2<f32>) {
        (self.keys, self.matrix)
    }
}

// =============================================================================
// FeatureExtractor
// =============================================================================

/// Builds labeled feature matrices from batches of windowed series.
///
/// The extractor is stateless across calls: every [`transform`] invocation is
/// independent, and nothing is learned at runtime. The only configuration is
/// the fixed [`ExtractorConfig`] and the engine given at construction.
///
/// [`transform`]: FeatureExtractor::transform
#[derive(Debug)]
pub struct FeatureExtractor<E> {
    config: ExtractorConfig,
    engine: E,
}

impl<E> FeatureExtractor<E> {
    /// Create an extractor from a validated config and an engine.
    pub fn new(config: ExtractorConfig, engine: E) -> Self {
        Self { config, engine }
    }

    /// The configuration this extractor was built with.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }
}

impl<E: ExtractionEngine + Sync> FeatureExtractor<E> {
    /// Turn a window batch into a labeled per-sample feature matrix.
    ///
    /// `windows` has shape `[n_samples * V, series_len]` where `V` is
    /// `config.vars_per_sample`, ordered sample-major: rows `s*V .. s*V + V`
    /// are sample `s`'s variables, in the order of `variable_names`.
    ///
    /// The engine is invoked once over the whole batch, inside a thread pool
    /// sized by `config.n_threads`, and blocks until every group is done.
    ///
    /// # Errors
    ///
    /// - [`FeatureError::VariableCountMismatch`] if `variable_names` does not
    ///   have `V` entries.
    /// - [`FeatureError::ShapeMismatch`] if the batch row count is not a
    ///   multiple of `V`. Both checks run before the engine is invoked.
    /// - [`FeatureError::Engine`] if the engine itself fails.
    /// - [`FeatureError::EngineOutputMismatch`] if the engine returns a
    ///   vocabulary of the wrong size or the wrong number of group rows.
    /// - [`FeatureError::IncompleteGroup`] if the engine's row count is not a
    ///   multiple of `V`.
    pub fn transform(
        &self,
        windows: ArrayView2<f32>,
        variable_names: &[&str],
    ) -> Result<FeatureSet, FeatureError> {
        let vars_per_sample = self.config.vars_per_sample;

        if variable_names.len() != vars_per_sample {
            return Err(FeatureError::VariableCountMismatch {
                expected: vars_per_sample,
                actual: variable_names.len(),
            });
        }

        let n_series = windows.nrows();
        if n_series % vars_per_sample != 0 {
            return Err(FeatureError::ShapeMismatch {
                n_series,
                vars_per_sample,
            });
        }

        let table = LongTable::from_windows(windows);
        debug!(
            "extracting features for {} series ({} samples x {} variables, series length {})",
            n_series,
            n_series / vars_per_sample,
            vars_per_sample,
            table.series_len()
        );

        let features = run_with_threads(self.config.n_threads, |parallelism| {
            self.engine.extract(&table, parallelism)
        })?;

        if features.vocab_size() != self.config.vocab_size {
            return Err(FeatureError::EngineOutputMismatch {
                what: "statistics per group",
                expected: self.config.vocab_size,
                actual: features.vocab_size(),
            });
        }
        if features.n_groups() != n_series {
            return Err(FeatureError::EngineOutputMismatch {
                what: "group rows",
                expected: n_series,
                actual: features.n_groups(),
            });
        }

        let matrix = group_by_sample(&features, vars_per_sample)?;
        let keys = feature_keys(variable_names, features.vocabulary(), vars_per_sample)?;
        debug_assert_eq!(keys.len(), matrix.ncols());

        info!(
            "built feature matrix [{} x {}]",
            matrix.nrows(),
            matrix.ncols()
        );
        Ok(FeatureSet { keys, matrix })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GroupFeatureTable;
    use crate::testing::StubEngine;
    use crate::utils::Parallelism;
    use ndarray::array;

    fn config(vars: usize, vocab: usize) -> ExtractorConfig {
        ExtractorConfig::builder()
            .vars_per_sample(vars)
            .vocab_size(vocab)
            .n_threads(1)
            .build()
            .unwrap()
    }

    #[test]
    fn keys_and_matrix_stay_aligned() {
        let extractor = FeatureExtractor::new(config(2, 2), StubEngine);
        let windows = array![
            [1.0, 3.0], // sample 0, var a: mean 2, max 3
            [5.0, 7.0], // sample 0, var b: mean 6, max 7
            [0.0, 4.0], // sample 1, var a: mean 2, max 4
            [8.0, 8.0], // sample 1, var b: mean 8, max 8
        ];

        let set = extractor.transform(windows.view(), &["a", "b"]).unwrap();
        assert_eq!(set.keys(), &["a_mean", "a_max", "b_mean", "b_max"]);
        assert_eq!(set.matrix().nrows(), 2);
        assert_eq!(set.keys().len(), set.matrix().ncols());
        assert_eq!(set.matrix().row(0), array![2.0, 3.0, 6.0, 7.0]);
        assert_eq!(set.matrix().row(1), array![2.0, 4.0, 8.0, 8.0]);
    }

    #[test]
    fn wrong_vocab_size_is_engine_output_mismatch() {
        // StubEngine computes 2 statistics, config expects the full 794
        let extractor = FeatureExtractor::new(
            ExtractorConfig::builder()
                .vars_per_sample(1)
                .n_threads(1)
                .build()
                .unwrap(),
            StubEngine,
        );
        let windows = array![[1.0, 2.0]];

        let err = extractor.transform(windows.view(), &["x"]).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::EngineOutputMismatch {
                what: "statistics per group",
                expected: 794,
                actual: 2
            }
        ));
    }

    #[test]
    fn wrong_group_count_is_engine_output_mismatch() {
        fn drops_a_group(
            table: &LongTable,
            _: Parallelism,
        ) -> Result<GroupFeatureTable, FeatureError> {
            Ok(GroupFeatureTable::new(
                vec!["mean".to_string()],
                Array2::zeros((table.n_groups() - 1, 1)),
            ))
        }

        let extractor = FeatureExtractor::new(config(1, 1), drops_a_group);
        let windows = array![[1.0], [2.0]];

        let err = extractor.transform(windows.view(), &["x"]).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::EngineOutputMismatch {
                what: "group rows",
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn engine_failure_propagates() {
        fn failing(_: &LongTable, _: Parallelism) -> Result<GroupFeatureTable, FeatureError> {
            Err(FeatureError::Engine("statistic overflow".into()))
        }

        let extractor = FeatureExtractor::new(config(1, 2), failing);
        let windows = array![[1.0, 2.0]];

        let err = extractor.transform(windows.view(), &["x"]).unwrap_err();
        assert!(matches!(err, FeatureError::Engine(_)));
    }

    #[test]
    fn into_parts_returns_the_pair() {
        let extractor = FeatureExtractor::new(config(1, 2), StubEngine);
        let windows = array![[2.0, 4.0]];

        let (keys, matrix) = extractor
            .transform(windows.view(), &["x"])
            .unwrap()
            .into_parts();
        assert_eq!(keys, vec!["x_mean", "x_max"]);
        assert_eq!(matrix, array![[3.0, 4.0]]);
    }
}
