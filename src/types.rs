use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub detection: DetectionConfig,
    pub congestion: CongestionConfig,
    pub incident: IncidentConfig,
    pub feed: FeedConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    pub confidence_threshold: f32,
    pub frame_skip: u32,
    pub nominal_fps: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CongestionConfig {
    pub medium_threshold: u32,
    pub high_threshold: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentConfig {
    pub window_size: usize,
    pub deviation_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub input_dir: String,
    pub output_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// One object instance reported by the external detector in one frame.
/// Already resolved by the time it reaches us; running the model is not
/// this system's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bbox: [f32; 4], // [x, y, width, height] as reported by the detector
    pub confidence: f32,
    pub class_name: String,
}

/// Per-category counts for one sampled frame: the grand total plus a
/// breakdown by concrete class name ("car" and "truck" stay separate even
/// though both are vehicles).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectCount {
    pub total: u32,
    pub types: HashMap<String, u32>,
}

impl ObjectCount {
    pub fn empty() -> Self {
        Self {
            total: 0,
            types: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CongestionLevel {
    Low,
    Medium,
    High,
}

impl CongestionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CongestionLevel::Low => "Low",
            CongestionLevel::Medium => "Medium",
            CongestionLevel::High => "High",
        }
    }
}

/// One sampled frame's aggregated result. Immutable once appended to the
/// run log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub frame_index: u64,
    /// Wall-clock capture time, milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Elapsed source time in seconds, non-decreasing across the log.
    pub relative_time: f64,
    pub vehicles: ObjectCount,
    pub humans: ObjectCount,
    pub animals: ObjectCount,
    pub congestion: CongestionLevel,
    pub incident: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub average_vehicle_count: f64,
    pub average_human_count: f64,
    pub average_animal_count: f64,
    pub total_incidents: u32,
    pub final_congestion_level: CongestionLevel,
}

/// One row of a distribution table, e.g. ("car", 42) or ("Vehicles", 120).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub name: String,
    pub value: u64,
}

/// Headline numbers for the most recent frame, for live display and
/// progress logging.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot {
    pub frame_index: u64,
    pub vehicle_count: u32,
    pub human_count: u32,
    pub animal_count: u32,
    pub congestion: CongestionLevel,
    pub incident: bool,
}
