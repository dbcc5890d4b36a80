//! JSON configuration for the pipeline, the detector and logging.

use std::{fs, path::Path, str::FromStr};

use arm_vision_detect::DetectorParams;
use arm_vision_kinematics::JointLimits;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
    #[error("scale divisor must be finite and positive (got {0})")]
    InvalidScale(f64),
    #[error("joint limit {name} must be finite and positive (got {value})")]
    InvalidLimit { name: &'static str, value: f64 },
}

fn default_scale_divisor() -> f64 {
    500.0
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Settings for [`crate::ArmPipeline`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Every published position and vector is divided by this.
    #[serde(default = "default_scale_divisor")]
    pub scale_divisor: f64,
    #[serde(default)]
    pub limits: JointLimits,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scale_divisor: default_scale_divisor(),
            limits: JointLimits::default(),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale_divisor.is_finite() && self.scale_divisor > 0.0) {
            return Err(ConfigError::InvalidScale(self.scale_divisor));
        }
        for (name, value) in [
            ("joint1", self.limits.joint1),
            ("joint3", self.limits.joint3),
            ("joint4", self.limits.joint4),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidLimit { name, value });
            }
        }
        Ok(())
    }
}

/// Top-level configuration file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmVisionConfig {
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub detector: DetectorParams,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ArmVisionConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            detector: DetectorParams::default(),
            log_level: default_log_level(),
        }
    }
}

impl ArmVisionConfig {
    /// Load and validate a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let cfg: Self = serde_json::from_str(&raw)?;
        cfg.pipeline.validate()?;
        Ok(cfg)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let cfg: ArmVisionConfig = serde_json::from_str("{}").expect("json");
        assert_eq!(cfg.pipeline.scale_divisor, 500.0);
        assert_eq!(cfg.pipeline.limits, JointLimits::default());
        assert_eq!(cfg.level_filter().expect("level"), LevelFilter::Info);
    }

    #[test]
    fn rejects_non_positive_scale() {
        let cfg = PipelineConfig {
            scale_divisor: 0.0,
            ..PipelineConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidScale(_))));
    }

    #[test]
    fn rejects_bad_limit() {
        let mut cfg = PipelineConfig::default();
        cfg.limits.joint3 = f64::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidLimit { name: "joint3", .. })
        ));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let cfg = ArmVisionConfig {
            log_level: "loud".into(),
            ..ArmVisionConfig::default()
        };
        assert!(matches!(
            cfg.level_filter(),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cfg.json");
        let mut cfg = ArmVisionConfig::default();
        cfg.pipeline.scale_divisor = 250.0;
        cfg.write_json(&path).expect("write");
        let back = ArmVisionConfig::load_json(&path).expect("load");
        assert_eq!(back, cfg);
    }
}
