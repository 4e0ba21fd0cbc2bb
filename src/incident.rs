// src/incident.rs

use crate::types::IncidentConfig;
use std::collections::VecDeque;
use tracing::debug;

/// Flags sudden jumps or drops in vehicle density relative to very recent
/// history, using a bounded sliding window of observed counts.
///
/// The newest count is compared against the mean of the older window entries
/// only, so a spike cannot dilute its own baseline.
pub struct IncidentDetector {
    window: VecDeque<u32>,
    window_size: usize,
    deviation_threshold: f64,
}

impl IncidentDetector {
    pub fn new(config: &IncidentConfig) -> Self {
        Self {
            window: VecDeque::with_capacity(config.window_size),
            window_size: config.window_size,
            deviation_threshold: config.deviation_threshold,
        }
    }

    /// Record one vehicle count and report whether it deviates far enough
    /// from the trailing window average to count as an incident.
    ///
    /// The first `window_size - 1` observations are warm-up and never flag.
    pub fn observe(&mut self, vehicle_count: u32) -> bool {
        self.window.push_back(vehicle_count);

        // Maintain window size
        if self.window.len() > self.window_size {
            self.window.pop_front();
        }

        if self.window.len() < self.window_size {
            return false;
        }

        let baseline_len = self.window_size - 1;
        if baseline_len == 0 {
            // Single-slot window: the count is its own baseline.
            return false;
        }

        let baseline_sum: u64 = self
            .window
            .iter()
            .take(baseline_len)
            .map(|&count| count as u64)
            .sum();
        let window_average = baseline_sum as f64 / baseline_len as f64;
        let deviation = (vehicle_count as f64 - window_average).abs();

        if deviation >= self.deviation_threshold {
            debug!(
                "Vehicle count {} deviates {:.1} from window average {:.1}",
                vehicle_count, deviation, window_average
            );
            return true;
        }

        false
    }

    /// Drop all history, restarting the warm-up period. Called when a new
    /// run starts.
    pub fn reset(&mut self) {
        self.window.clear();
    }

    #[allow(dead_code)]
    pub fn history_len(&self) -> usize {
        self.window.len()
    }
}
