//! Regrouping per-variable feature rows into per-sample vectors.

use ndarray::{s, Array2};

use crate::engine::GroupFeatureTable;
use crate::error::FeatureError;

/// Concatenate each sample's per-variable feature rows into one vector.
///
/// Group ids are sample-major, variable-minor: rows `s*V .. s*V + V` belong
/// to sample `s`, one per variable slot in fixed order. The output has shape
/// `[n_samples, V * vocab_size]`, with variable `v`'s statistics occupying
/// columns `v*vocab_size .. (v+1)*vocab_size` - the same ordering
/// [`feature_keys`](crate::label::feature_keys) enumerates.
///
/// Contiguity of a sample's variables is a structural property of the batch
/// layout and cannot be checked here; only row-count divisibility can.
///
/// # Errors
///
/// Returns [`FeatureError::IncompleteGroup`] if the table's row count is not
/// an exact multiple of `vars_per_sample`. Trailing (or leading) partial
/// samples are rejected rather than silently dropped.
pub fn group_by_sample(
    table: &GroupFeatureTable,
    vars_per_sample: usize,
) -> Result<Array2<f32>, FeatureError> {
    let n_rows = table.n_groups();
    if vars_per_sample == 0 || n_rows % vars_per_sample != 0 {
        return Err(FeatureError::IncompleteGroup {
            n_rows,
            vars_per_sample,
        });
    }

    let vocab_size = table.vocab_size();
    let n_samples = n_rows / vars_per_sample;
    let rows = table.rows();

    let mut grouped = Array2::zeros((n_samples, vars_per_sample * vocab_size));
    for (sample, mut out) in grouped.outer_iter_mut().enumerate() {
        for v in 0..vars_per_sample {
            let src = rows.row(sample * vars_per_sample + v);
            out.slice_mut(s![v * vocab_size..(v + 1) * vocab_size])
                .assign(&src);
        }
    }

    Ok(grouped)
}
