// src/summary.rs

use crate::classify::Category;
use crate::types::{CongestionLevel, DistributionEntry, LogEntry, SummaryStats};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything the end-of-run report needs: headline statistics plus the two
/// distribution tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub stats: SummaryStats,
    pub vehicle_type_distribution: Vec<DistributionEntry>,
    pub overall_distribution: Vec<DistributionEntry>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fold the complete log into summary statistics and distributions.
///
/// Pure and wholesale: nothing carries over between calls, so it is safe to
/// invoke on a growing log and again on the frozen one. An empty log is a
/// valid terminal state and yields zeroed stats.
pub fn summarize(log: &[LogEntry]) -> RunSummary {
    let mut vehicle_total: u64 = 0;
    let mut human_total: u64 = 0;
    let mut animal_total: u64 = 0;
    let mut total_incidents: u32 = 0;
    let mut vehicle_types: BTreeMap<String, u64> = BTreeMap::new();

    for entry in log {
        vehicle_total += entry.vehicles.total as u64;
        human_total += entry.humans.total as u64;
        animal_total += entry.animals.total as u64;
        if entry.incident {
            total_incidents += 1;
        }
        for (name, count) in &entry.vehicles.types {
            *vehicle_types.entry(name.clone()).or_insert(0) += *count as u64;
        }
    }

    // Sums stay exact integers; rounding happens only at the division.
    let (average_vehicle_count, average_human_count, average_animal_count) = if log.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        let entries = log.len() as f64;
        (
            round2(vehicle_total as f64 / entries),
            round2(human_total as f64 / entries),
            round2(animal_total as f64 / entries),
        )
    };

    let final_congestion_level = log
        .last()
        .map(|entry| entry.congestion)
        .unwrap_or(CongestionLevel::Low);

    let stats = SummaryStats {
        average_vehicle_count,
        average_human_count,
        average_animal_count,
        total_incidents,
        final_congestion_level,
    };

    let vehicle_type_distribution = vehicle_types
        .into_iter()
        .map(|(name, value)| DistributionEntry { name, value })
        .collect();

    // Always three rows, present even when zero.
    let overall_distribution = vec![
        DistributionEntry {
            name: Category::Vehicle.display_name().to_string(),
            value: vehicle_total,
        },
        DistributionEntry {
            name: Category::Human.display_name().to_string(),
            value: human_total,
        },
        DistributionEntry {
            name: Category::Animal.display_name().to_string(),
            value: animal_total,
        },
    ];

    RunSummary {
        stats,
        vehicle_type_distribution,
        overall_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ObjectCount;
    use std::collections::HashMap;

    fn object_count(pairs: &[(&str, u32)]) -> ObjectCount {
        let types: HashMap<String, u32> = pairs
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect();
        ObjectCount {
            total: types.values().sum(),
            types,
        }
    }

    fn entry(
        vehicles: ObjectCount,
        humans: ObjectCount,
        animals: ObjectCount,
        congestion: CongestionLevel,
        incident: bool,
    ) -> LogEntry {
        LogEntry {
            frame_index: 0,
            timestamp: 1_700_000_000_000,
            relative_time: 0.0,
            vehicles,
            humans,
            animals,
            congestion,
            incident,
        }
    }

    #[test]
    fn test_empty_log_yields_zeroed_summary() {
        let summary = summarize(&[]);

        assert_eq!(summary.stats.average_vehicle_count, 0.0);
        assert_eq!(summary.stats.average_human_count, 0.0);
        assert_eq!(summary.stats.average_animal_count, 0.0);
        assert_eq!(summary.stats.total_incidents, 0);
        assert_eq!(summary.stats.final_congestion_level, CongestionLevel::Low);
        assert!(summary.vehicle_type_distribution.is_empty());

        // The category rows are present even when everything is zero.
        assert_eq!(summary.overall_distribution.len(), 3);
        for row in &summary.overall_distribution {
            assert_eq!(row.value, 0);
        }
    }

    #[test]
    fn test_averages_rounded_at_final_division() {
        let log = vec![
            entry(
                object_count(&[("car", 1)]),
                object_count(&[]),
                object_count(&[]),
                CongestionLevel::Low,
                false,
            ),
            entry(
                object_count(&[("car", 2)]),
                object_count(&[("person", 1)]),
                object_count(&[]),
                CongestionLevel::Low,
                false,
            ),
            entry(
                object_count(&[("car", 1)]),
                object_count(&[]),
                object_count(&[]),
                CongestionLevel::Low,
                false,
            ),
        ];

        let summary = summarize(&log);
        // 4 vehicles over 3 entries = 1.333... -> 1.33
        assert_eq!(summary.stats.average_vehicle_count, 1.33);
        // 1 human over 3 entries = 0.333... -> 0.33
        assert_eq!(summary.stats.average_human_count, 0.33);
        assert_eq!(summary.stats.average_animal_count, 0.0);
    }

    #[test]
    fn test_incident_count_and_final_congestion() {
        let log = vec![
            entry(
                object_count(&[("car", 12)]),
                object_count(&[]),
                object_count(&[]),
                CongestionLevel::High,
                true,
            ),
            entry(
                object_count(&[("car", 2)]),
                object_count(&[]),
                object_count(&[]),
                CongestionLevel::Low,
                true,
            ),
            entry(
                object_count(&[("car", 7)]),
                object_count(&[]),
                object_count(&[]),
                CongestionLevel::Medium,
                false,
            ),
        ];

        let summary = summarize(&log);
        assert_eq!(summary.stats.total_incidents, 2);
        // The stored value of the last entry, not a re-derived one.
        assert_eq!(summary.stats.final_congestion_level, CongestionLevel::Medium);
    }

    #[test]
    fn test_vehicle_types_merge_across_entries() {
        let log = vec![
            entry(
                object_count(&[("car", 2), ("bus", 1)]),
                object_count(&[]),
                object_count(&[]),
                CongestionLevel::Low,
                false,
            ),
            entry(
                object_count(&[("car", 3), ("truck", 1)]),
                object_count(&[]),
                object_count(&[]),
                CongestionLevel::Low,
                false,
            ),
        ];

        let summary = summarize(&log);
        let by_name: std::collections::HashMap<&str, u64> = summary
            .vehicle_type_distribution
            .iter()
            .map(|row| (row.name.as_str(), row.value))
            .collect();

        assert_eq!(by_name["car"], 5);
        assert_eq!(by_name["bus"], 1);
        assert_eq!(by_name["truck"], 1);
    }

    #[test]
    fn test_overall_distribution_totals() {
        let log = vec![
            entry(
                object_count(&[("car", 3)]),
                object_count(&[("person", 2)]),
                object_count(&[("dog", 1)]),
                CongestionLevel::Low,
                false,
            ),
            entry(
                object_count(&[("car", 1)]),
                object_count(&[("person", 1)]),
                object_count(&[]),
                CongestionLevel::Low,
                false,
            ),
        ];

        let summary = summarize(&log);
        let by_name: std::collections::HashMap<&str, u64> = summary
            .overall_distribution
            .iter()
            .map(|row| (row.name.as_str(), row.value))
            .collect();

        assert_eq!(by_name["Vehicles"], 4);
        assert_eq!(by_name["Humans"], 3);
        assert_eq!(by_name["Animals"], 1);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let log = vec![
            entry(
                object_count(&[("car", 5), ("bus", 2)]),
                object_count(&[("person", 1)]),
                object_count(&[("cat", 1)]),
                CongestionLevel::Medium,
                true,
            ),
            entry(
                object_count(&[("truck", 4)]),
                object_count(&[]),
                object_count(&[]),
                CongestionLevel::Low,
                false,
            ),
        ];

        assert_eq!(summarize(&log), summarize(&log));
    }
}
