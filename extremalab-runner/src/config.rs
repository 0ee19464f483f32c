//! Serializable batch labeling configuration.

use std::fs;
use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use extremalab_core::config::{AnnotationConfig, ConfigError as AnnotationConfigError};
use extremalab_core::data::VolumeClip;

/// Unique identifier for a labeling run (content-addressable hash).
pub type RunId = String;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse run config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("annotation config: {0}")]
    Annotation(#[from] AnnotationConfigError),

    #[error("resample period must be at least one minute")]
    ZeroPeriod,

    #[error("volume clip quantiles must satisfy 0 <= lower <= upper <= 1, got [{0}, {1}]")]
    InvalidClip(f64, f64),
}

/// Configuration for labeling a batch of series.
///
/// Two runs with identical configs over identical inputs produce identical
/// output, so [`RunConfig::run_id`] identifies the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub annotation: AnnotationConfig,

    /// Resample bars before labeling. `None` labels the bars as given.
    pub resample: Option<ResampleConfig>,

    /// Label symbols on the rayon pool.
    pub parallel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResampleConfig {
    pub period_minutes: u32,
    #[serde(default)]
    pub volume_clip: VolumeClip,
}

impl ResampleConfig {
    pub fn period(&self) -> Duration {
        Duration::minutes(i64::from(self.period_minutes))
    }
}

impl RunConfig {
    /// Computes a deterministic hash ID for this configuration.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("RunConfig serialization failed");
        let hash = blake3::hash(json.as_bytes());
        format!("{}", hash.to_hex())
    }

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
        self.annotation.validate()?;
        if let Some(resample) = &self.resample {
            if resample.period_minutes == 0 {
                return Err(ConfigError::ZeroPeriod);
            }
            let clip = resample.volume_clip;
            if !clip.is_valid() {
                return Err(ConfigError::InvalidClip(clip.lower_quantile, clip.upper_quantile));
            }
        }
        Ok(())
    }
}
