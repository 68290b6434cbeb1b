//! Deterministic stub engines for tests, doctests, and benches.

use ndarray::Array2;

use crate::engine::{ExtractionEngine, GroupFeatureTable};
use crate::error::FeatureError;
use crate::long_format::LongTable;
use crate::utils::Parallelism;

/// Engine stub computing `mean` and `max` per group.
///
/// Two statistics keep expected values easy to write by hand while still
/// exercising vocabulary ordering and per-group row recovery. The stub is
/// fully deterministic, so repeated extraction over the same batch yields
/// identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubEngine;

impl StubEngine {
    /// Statistic names, in column order.
    pub const VOCABULARY: [&'static str; 2] = ["mean", "max"];
}

impl ExtractionEngine for StubEngine {
    fn extract(
        &self,
        table: &LongTable,
        parallelism: Parallelism,
    ) -> Result<GroupFeatureTable, FeatureError> {
        let stats = parallelism.maybe_par_map(0..table.n_groups(), |id| {
            let values = table.group_values(id);
            let mean = values.iter().sum::<f32>() / values.len().max(1) as f32;
            let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            [mean, max]
        });

        let mut rows = Array2::zeros((table.n_groups(), Self::VOCABULARY.len()));
        for (id, stat) in stats.iter().enumerate() {
            rows[[id, 0]] = stat[0];
            rows[[id, 1]] = stat[1];
        }

        Ok(GroupFeatureTable::new(
            Self::VOCABULARY.iter().map(|s| s.to_string()).collect(),
            rows,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn computes_mean_and_max_per_group() {
        let windows = array![[1.0, 2.0, 3.0], [10.0, -5.0, 4.0]];
        let table = LongTable::from_windows(windows.view());

        let out = StubEngine.extract(&table, Parallelism::Sequential).unwrap();
        assert_eq!(out.vocabulary(), &["mean".to_string(), "max".to_string()]);
        assert_abs_diff_eq!(out.row(0)[0], 2.0);
        assert_abs_diff_eq!(out.row(0)[1], 3.0);
        assert_abs_diff_eq!(out.row(1)[0], 3.0);
        assert_abs_diff_eq!(out.row(1)[1], 10.0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let windows = ndarray::Array2::from_shape_fn((12, 8), |(i, t)| (i * 8 + t) as f32);
        let table = LongTable::from_windows(windows.view());

        let seq = StubEngine.extract(&table, Parallelism::Sequential).unwrap();
        let par = StubEngine.extract(&table, Parallelism::Parallel).unwrap();
        assert_eq!(seq.rows(), par.rows());
    }
}
