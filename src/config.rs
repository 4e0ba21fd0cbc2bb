use crate::types::{
    Config, CongestionConfig, DetectionConfig, FeedConfig, IncidentConfig, LoggingConfig,
};
use anyhow::{bail, Result};
use std::fs;

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range configuration before it reaches the analysis
    /// pipeline. The pipeline itself assumes validated values.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.detection.confidence_threshold) {
            bail!(
                "confidence_threshold must be in [0, 1], got {}",
                self.detection.confidence_threshold
            );
        }
        if self.detection.frame_skip == 0 {
            bail!("frame_skip must be at least 1");
        }
        if self.detection.nominal_fps <= 0.0 {
            bail!("nominal_fps must be positive, got {}", self.detection.nominal_fps);
        }
        if self.congestion.medium_threshold > self.congestion.high_threshold {
            bail!(
                "congestion thresholds out of order: medium={} > high={}",
                self.congestion.medium_threshold,
                self.congestion.high_threshold
            );
        }
        if self.incident.window_size == 0 {
            bail!("incident window_size must be at least 1");
        }
        if self.incident.deviation_threshold < 0.0 {
            bail!(
                "incident deviation_threshold must be non-negative, got {}",
                self.incident.deviation_threshold
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detection: DetectionConfig {
                confidence_threshold: 0.5,
                frame_skip: 3,
                nominal_fps: 30.0,
            },
            congestion: CongestionConfig {
                medium_threshold: 6,
                high_threshold: 10,
            },
            incident: IncidentConfig {
                window_size: 5,
                deviation_threshold: 4.0,
            },
            feed: FeedConfig {
                input_dir: "detections".to_string(),
                output_dir: "output".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}
