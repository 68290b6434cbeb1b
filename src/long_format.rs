//! Long-format table construction.
//!
//! Extraction engines are built around grouped time series: every observation
//! is a `(group id, time offset, value)` triple, and all triples sharing a
//! group id form one series. [`LongTable`] flattens a batch of fixed-length
//! windows into that representation so the whole batch can be handed to the
//! engine in a single call, letting the engine parallelize across group ids.

use ndarray::ArrayView2;

/// A batch of series in long format: three parallel columns of
/// `(group id, time offset, value)` triples.
///
/// Group ids are synthetic: series `i` of the source batch becomes group `i`,
/// and its triples are emitted contiguously with time offsets
/// `0..series_len`. No other meaning is attached to a group id; the caller
/// is responsible for remembering what series `i` was.
#[derive(Debug, Clone)]
pub struct LongTable {
    group_ids: Vec<usize>,
    times: Vec<usize>,
    values: Vec<f32>,
    n_groups: usize,
    series_len: usize,
}

impl LongTable {
    /// Build the long-format table for a batch of windows.
    ///
    /// `windows` is `[n_series, series_len]`, one fixed-length series per row.
    pub fn from_windows(windows: ArrayView2<f32>) -> Self {
        let n_groups = windows.nrows();
        let series_len = windows.ncols();
        let n_rows = n_groups * series_len;

        let mut group_ids = Vec::with_capacity(n_rows);
        let mut times = Vec::with_capacity(n_rows);
        let mut values = Vec::with_capacity(n_rows);
        for (id, series) in windows.outer_iter().enumerate() {
            for (t, &value) in series.iter().enumerate() {
                group_ids.push(id);
                times.push(t);
                values.push(value);
            }
        }

        Self {
            group_ids,
            times,
            values,
            n_groups,
            series_len,
        }
    }

    /// Total number of `(group id, time, value)` triples.
    pub fn n_rows(&self) -> usize {
        self.values.len()
    }

    /// Number of distinct group ids (`0..n_groups`).
    pub fn n_groups(&self) -> usize {
        self.n_groups
    }

    /// Length of every series in the batch.
    pub fn series_len(&self) -> usize {
        self.series_len
    }

    /// Group-id column.
    pub fn group_ids(&self) -> &[usize] {
        &self.group_ids
    }

    /// Time-offset column.
    pub fn times(&self) -> &[usize] {
        &self.times
    }

    /// Value column.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Values of one group, in time order.
    ///
    /// Triples are emitted contiguously per group, so this is a plain slice
    /// of the value column.
    ///
    /// # Panics
    ///
    /// Panics if `group_id >= n_groups`.
    pub fn group_values(&self, group_id: usize) -> &[f32] {
        let start = group_id * self.series_len;
        &self.values[start..start + self.series_len]
    }
}
