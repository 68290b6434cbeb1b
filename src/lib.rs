//! featurize: labeled feature matrices from windowed time series.
//!
//! Converts batches of fixed-length multivariate windows into a flat numeric
//! feature matrix plus feature-name keys aligned 1:1 with its columns, so a
//! downstream classifier's per-column importances can be traced back to the
//! originating variable and statistic.
//!
//! # Key Types
//!
//! - [`FeatureExtractor`] - the pipeline: reshape, extract, regroup, label
//! - [`ExtractorConfig`] - configuration builder
//! - [`ExtractionEngine`] - the statistic-engine boundary
//! - [`FeatureSet`] - the aligned `(keys, matrix)` output
//!
//! # Pipeline
//!
//! A batch of `n_samples * V` series (each sample contributes `V` variables,
//! contiguously and in fixed order) is flattened into a [`LongTable`] and
//! handed to the engine in a single call. The engine returns one statistic
//! row per series; rows are regrouped into one vector per sample and the
//! statistic vocabulary is expanded into matching per-variable column keys.
//!
//! # Example
//!
//! ```
//! use featurize::{ExtractorConfig, FeatureExtractor};
//! use featurize::testing::StubEngine;
//! use ndarray::Array2;
//!
//! // 2 samples x 3 variables, windows of length 4
//! let windows = Array2::from_shape_fn((6, 4), |(i, t)| (i * 4 + t) as f32);
//!
//! let config = ExtractorConfig::builder()
//!     .vars_per_sample(3)
//!     .vocab_size(2) // StubEngine computes mean and max
//!     .build()
//!     .unwrap();
//! let extractor = FeatureExtractor::new(config, StubEngine);
//!
//! let set = extractor
//!     .transform(windows.view(), &["price", "volume", "spread"])
//!     .unwrap();
//! assert_eq!(set.matrix().dim(), (2, 6));
//! assert_eq!(set.keys()[0], "price_mean");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod group;
pub mod label;
pub mod logging;
pub mod long_format;
pub mod testing;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// The pipeline and its output
pub use extract::{FeatureExtractor, FeatureSet};

// Configuration
pub use config::{ConfigError, ExtractorConfig, DEFAULT_VOCAB_SIZE};

// The engine boundary
pub use engine::{ExtractionEngine, GroupFeatureTable};

// Stage operations (usable standalone)
pub use group::group_by_sample;
pub use label::feature_keys;
pub use long_format::LongTable;

// Errors
pub use error::FeatureError;

// Shared utilities
pub use utils::{run_with_threads, Parallelism};
