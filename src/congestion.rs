// src/congestion.rs

use crate::types::{CongestionConfig, CongestionLevel};

/// Three-tier congestion rating from a per-frame vehicle count.
///
/// Comparisons are strictly greater-than: a count exactly equal to a
/// threshold falls in the lower tier.
pub struct CongestionClassifier {
    medium_threshold: u32,
    high_threshold: u32,
}

impl CongestionClassifier {
    pub fn new(config: &CongestionConfig) -> Self {
        Self {
            medium_threshold: config.medium_threshold,
            high_threshold: config.high_threshold,
        }
    }

    pub fn classify(&self, vehicle_count: u32) -> CongestionLevel {
        if vehicle_count > self.high_threshold {
            CongestionLevel::High
        } else if vehicle_count > self.medium_threshold {
            CongestionLevel::Medium
        } else {
            CongestionLevel::Low
        }
    }
}
