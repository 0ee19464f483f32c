//! Annotation settings loaded from TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extrema::{DegreeScanner, Order};
use crate::signals::ConflictPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("strength_sigma must be > 0, got {0}")]
    InvalidSigma(f64),
}

/// Knobs for degree labeling, optimal signals and strength smoothing.
///
/// Every field has a default, so an empty TOML document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Extremum order the optimal signal table is built from.
    pub signal_order: Order,
    pub conflict: ConflictPolicy,
    /// Overrides the scanner's length-derived order ceiling.
    pub max_order: Option<Order>,
    /// Gaussian sigma for `pt` strength smoothing.
    pub strength_sigma: f64,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            signal_order: Order::SIGNAL_DEFAULT,
            conflict: ConflictPolicy::default(),
            max_order: None,
            strength_sigma: 1.0,
        }
    }
}

impl AnnotationConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strength_sigma.is_nan() || self.strength_sigma <= 0.0 {
            return Err(ConfigError::InvalidSigma(self.strength_sigma));
        }
        Ok(())
    }

    /// Scanner honoring `max_order`.
    pub fn scanner(&self) -> DegreeScanner {
        match self.max_order {
            Some(cap) => DegreeScanner::new().with_max_order(cap),
            None => DegreeScanner::new(),
        }
    }
}
