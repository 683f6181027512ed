//! Configuration for the text collaborators.
//!
//! Loaded from YAML; every field has a default so an empty document is a
//! valid configuration.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TweetaConfig {
    pub normalizer: NormalizerConfig,
    pub language: LanguageConfig,
}

/// Text normalization settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Apply Unicode NFC composition
    pub unicode_normalize: bool,
    /// Decode `&amp;`, `&lt;`, `&gt;`, `&quot;` and `&#39;`
    pub unescape_html: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            unicode_normalize: true,
            unescape_html: true,
        }
    }
}

/// Fallback language detection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LanguageConfig {
    /// Texts shorter than this (in chars) are not detected
    pub min_text_length: usize,
    /// Minimum confidence (0.0 to 1.0) for a guess to count
    pub confidence_threshold: f64,
}

impl TweetaConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Example
    /// ```ignore
    /// use tweeta::TweetaConfig;
    ///
    /// let config = TweetaConfig::load_from_file("tweeta.yaml")?;
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_yaml_str(&contents)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document, but an empty config file means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.language.confidence_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Invalid(format!(
                "language.confidence_threshold must be between 0.0 and 1.0, got {}",
                threshold
            )));
        }
        Ok(())
    }
}
