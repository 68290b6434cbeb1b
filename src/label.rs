//! Feature-name expansion.

use crate::error::FeatureError;

/// Expand the statistic vocabulary into one key per feature column.
///
/// The key at flattened offset `k` is
/// `variable_names[k / vocab_size] + "_" + vocabulary[k % vocab_size]`:
/// variable-major, statistic-minor, mirroring the column order
/// [`group_by_sample`](crate::group::group_by_sample) produces. The two are
/// consumed as a matched pair, so the enumeration order here must never
/// diverge from the grouper's concatenation order.
///
/// # Errors
///
/// Returns [`FeatureError::VariableCountMismatch`] if the name list does not
/// have exactly `vars_per_sample` entries.
pub fn feature_keys(
    variable_names: &[&str],
    vocabulary: &[String],
    vars_per_sample: usize,
) -> Result<Vec<String>, FeatureError> {
    if variable_names.len() != vars_per_sample {
        return Err(FeatureError::VariableCountMismatch {
            expected: vars_per_sample,
            actual: variable_names.len(),
        });
    }

    let vocab_size = vocabulary.len();
    let mut keys = Vec::with_capacity(vars_per_sample * vocab_size);
    for k in 0..vars_per_sample * vocab_size {
        let quotient = k / vocab_size;
        let remainder = k % vocab_size;
        keys.push(format!("{}_{}", variable_names[quotient], vocabulary[remainder]));
    }

    Ok(keys)
}
