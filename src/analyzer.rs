// src/analyzer.rs
//
// Per-run pipeline state. One analyzer owns the incident window and the
// growing log for a single run; independent runs get independent analyzers
// instead of sharing ambient state.

use crate::aggregate;
use crate::congestion::CongestionClassifier;
use crate::incident::IncidentDetector;
use crate::types::{Config, Detection, FrameSnapshot, LogEntry};
use chrono::Utc;
use tracing::warn;

pub struct TrafficAnalyzer {
    confidence_threshold: f32,
    nominal_fps: f64,
    congestion: CongestionClassifier,
    incident: IncidentDetector,
    log: Vec<LogEntry>,
    frames_processed: u64,
}

impl TrafficAnalyzer {
    pub fn new(config: &Config) -> Self {
        Self {
            confidence_threshold: config.detection.confidence_threshold,
            nominal_fps: config.detection.nominal_fps,
            congestion: CongestionClassifier::new(&config.congestion),
            incident: IncidentDetector::new(&config.incident),
            log: Vec::new(),
            frames_processed: 0,
        }
    }

    /// Aggregate one sampled frame's detections into a log entry and append
    /// it to the run log. Calls must be sequential and in frame order: the
    /// incident window is order-sensitive.
    pub fn process_frame(&mut self, detections: &[Detection], elapsed_s: f64) -> &LogEntry {
        if let Some(last) = self.log.last() {
            if elapsed_s < last.relative_time {
                warn!(
                    "Frame time went backwards: {:.3}s after {:.3}s",
                    elapsed_s, last.relative_time
                );
            }
        }

        let counts = aggregate::aggregate(detections, self.confidence_threshold);
        let vehicle_count = counts.vehicles.total;

        let congestion = self.congestion.classify(vehicle_count);
        let incident = self.incident.observe(vehicle_count);

        if incident {
            warn!(
                "🚨 Incident: vehicle count {} at {:.1}s breaks from recent history",
                vehicle_count, elapsed_s
            );
        }

        // The frame index is derived from elapsed time and the nominal rate.
        // It approximates the source frame number for display and is not a
        // decoded frame number.
        let frame_index = (elapsed_s * self.nominal_fps).floor() as u64;

        let entry = LogEntry {
            frame_index,
            timestamp: Utc::now().timestamp_millis(),
            relative_time: elapsed_s,
            vehicles: counts.vehicles,
            humans: counts.humans,
            animals: counts.animals,
            congestion,
            incident,
        };

        self.frames_processed += 1;
        self.log.push(entry);
        let newest = self.log.len() - 1;
        &self.log[newest]
    }

    /// The run log so far, in frame order. Entries are never mutated after
    /// append.
    #[allow(dead_code)]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Number of sampled frames this analyzer has processed.
    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Headline numbers for the newest entry, or None before the first frame.
    pub fn snapshot(&self) -> Option<FrameSnapshot> {
        self.log.last().map(|entry| FrameSnapshot {
            frame_index: entry.frame_index,
            vehicle_count: entry.vehicles.total,
            human_count: entry.humans.total,
            animal_count: entry.animals.total,
            congestion: entry.congestion,
            incident: entry.incident,
        })
    }

    /// Clear all run state for a fresh run. The incident window restarts its
    /// warm-up period.
    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.log.clear();
        self.incident.reset();
        self.frames_processed = 0;
    }

    /// Freeze the run and hand the log off for reduction or export.
    pub fn into_log(self) -> Vec<LogEntry> {
        self.log
    }
}
