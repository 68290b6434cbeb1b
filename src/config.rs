//! Extractor configuration with builder pattern.
//!
//! [`ExtractorConfig`] captures the fixed per-batch configuration: how many
//! variables make up one logical sample, how many statistics the engine is
//! expected to compute per series, and how many threads the engine call may
//! use. The builder (via `bon`) validates at build time.
//!
//! # Example
//!
//! ```
//! use featurize::ExtractorConfig;
//!
//! // Reference vocabulary (794 statistics), auto thread count
//! let config = ExtractorConfig::builder().vars_per_sample(3).build().unwrap();
//! assert_eq!(config.vocab_size, 794);
//!
//! // Small stub vocabulary, sequential
//! let config = ExtractorConfig::builder()
//!     .vars_per_sample(3)
//!     .vocab_size(2)
//!     .n_threads(1)
//!     .build()
//!     .unwrap();
//! ```

use bon::Builder;

/// Statistic count of the reference engine configuration.
pub const DEFAULT_VOCAB_SIZE: usize = 794;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Variables per sample must be at least 1.
    InvalidVarsPerSample,
    /// Vocabulary size must be at least 1.
    InvalidVocabSize,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVarsPerSample => write!(f, "vars_per_sample must be at least 1"),
            Self::InvalidVocabSize => write!(f, "vocab_size must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// ExtractorConfig
// =============================================================================

/// Configuration for [`FeatureExtractor`](crate::FeatureExtractor).
///
/// All fields are plain data; no state is learned at runtime.
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct ExtractorConfig {
    /// Number of variables tracked per logical sample.
    ///
    /// The window batch must list each sample's variables contiguously, in a
    /// fixed order, so the batch row count is always a multiple of this.
    pub vars_per_sample: usize,

    /// Number of statistics the engine computes per series.
    ///
    /// The engine's output is validated against this; a mismatch fails the
    /// whole call. Default: [`DEFAULT_VOCAB_SIZE`].
    #[builder(default = DEFAULT_VOCAB_SIZE)]
    pub vocab_size: usize,

    /// Thread count for the engine call. Default: 0.
    ///
    /// - `0` = auto (all available cores)
    /// - `1` = sequential
    /// - `n > 1` = exactly `n` threads
    #[builder(default = 0)]
    pub n_threads: usize,
}

/// Custom finishing function that validates the config.
impl<S: extractor_config_builder::IsComplete> ExtractorConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `vars_per_sample` or `vocab_size` is zero.
    pub fn build(self) -> Result<ExtractorConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl ExtractorConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.vars_per_sample == 0 {
            return Err(ConfigError::InvalidVarsPerSample);
        }
        if self.vocab_size == 0 {
            return Err(ConfigError::InvalidVocabSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ExtractorConfig::builder().vars_per_sample(3).build().unwrap();
        assert_eq!(config.vars_per_sample, 3);
        assert_eq!(config.vocab_size, DEFAULT_VOCAB_SIZE);
        assert_eq!(config.n_threads, 0);
    }

    #[test]
    fn zero_vars_per_sample_rejected() {
        let result = ExtractorConfig::builder().vars_per_sample(0).build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidVarsPerSample);
    }

    #[test]
    fn zero_vocab_size_rejected() {
        let result = ExtractorConfig::builder()
            .vars_per_sample(3)
            .vocab_size(0)
            .build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidVocabSize);
    }

    #[test]
    fn explicit_values_kept() {
        let config = ExtractorConfig::builder()
            .vars_per_sample(5)
            .vocab_size(2)
            .n_threads(4)
            .build()
            .unwrap();
        assert_eq!(config.vars_per_sample, 5);
        assert_eq!(config.vocab_size, 2);
        assert_eq!(config.n_threads, 4);
    }
}
