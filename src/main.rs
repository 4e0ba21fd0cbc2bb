// src/main.rs

mod aggregate;
mod analyzer;
mod classify;
mod config;
mod congestion;
mod export;
mod feed;
mod incident;
mod summary;
mod types;

use analyzer::TrafficAnalyzer;
use anyhow::Result;
use feed::DetectionFeed;
use std::path::Path;
use std::time::Instant;
use summary::RunSummary;
use tracing::{error, info, warn};
use types::Config;

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());
    let config = Config::load(&config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("traffic_monitor={}", config.logging.level))
        .init();

    info!("🚦 Traffic Analysis System Starting");
    info!("✓ Configuration loaded from {}", config_path);

    info!(
        "Analysis thresholds: confidence={:.2}, congestion medium/high={}/{}, incident window={} deviation={:.1}",
        config.detection.confidence_threshold,
        config.congestion.medium_threshold,
        config.congestion.high_threshold,
        config.incident.window_size,
        config.incident.deviation_threshold
    );

    let detection_feed = DetectionFeed::new(&config.feed.input_dir);
    let feed_files = detection_feed.find_feed_files()?;

    if feed_files.is_empty() {
        error!("No detection feeds found in {}", config.feed.input_dir);
        return Ok(());
    }

    info!("Found {} feed(s) to process", feed_files.len());

    for (idx, feed_path) in feed_files.iter().enumerate() {
        info!(
            "Processing feed {}/{}: {}",
            idx + 1,
            feed_files.len(),
            feed_path.display()
        );

        match process_feed(feed_path, &detection_feed, &config) {
            Ok(stats) => {
                info!("✓ Feed processed successfully!");
                info!("  Records seen: {}", stats.records_seen);
                info!("  Frames analyzed: {}", stats.frames_analyzed);
                info!(
                    "  Avg per frame: {:.2} vehicles, {:.2} pedestrians, {:.2} animals",
                    stats.summary.stats.average_vehicle_count,
                    stats.summary.stats.average_human_count,
                    stats.summary.stats.average_animal_count
                );

                if stats.summary.stats.total_incidents > 0 {
                    warn!(
                        "  🚨 Incidents flagged: {}",
                        stats.summary.stats.total_incidents
                    );
                } else {
                    info!("  Incidents flagged: 0");
                }

                info!(
                    "  Final congestion: {}",
                    stats.summary.stats.final_congestion_level.as_str()
                );
                for row in &stats.summary.overall_distribution {
                    info!("  {} detected in total: {}", row.name, row.value);
                }
                info!(
                    "  Processing rate: {:.0} records/s",
                    stats.records_seen as f64 / stats.duration_secs.max(0.001)
                );
            }
            Err(e) => {
                error!("Failed to process feed: {}", e);
            }
        }
    }

    Ok(())
}

struct RunStats {
    records_seen: u64,
    frames_analyzed: u64,
    summary: RunSummary,
    duration_secs: f64,
}

fn process_feed(
    feed_path: &Path,
    detection_feed: &DetectionFeed,
    config: &Config,
) -> Result<RunStats> {
    let start_time = Instant::now();

    let mut reader = detection_feed.open(feed_path)?;
    let mut analyzer = TrafficAnalyzer::new(config);

    std::fs::create_dir_all(&config.feed.output_dir)?;
    let feed_name = feed_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("feed");

    let jsonl_path = Path::new(&config.feed.output_dir).join(format!("{}_log.jsonl", feed_name));
    let mut stream_file = std::fs::File::create(&jsonl_path)?;
    info!("💾 Streaming log to: {}", jsonl_path.display());

    while let Some(record) = reader.next_record()? {
        // Honor the frame-skip interval: only every Nth sampled record goes
        // through the analyzer.
        if (reader.records_read - 1) % config.detection.frame_skip as u64 != 0 {
            continue;
        }

        let entry = analyzer.process_frame(&record.detections, record.time);
        export::append_entry_jsonl(entry, &mut stream_file)?;

        if analyzer.frames_processed() % 50 == 0 {
            if let Some(snapshot) = analyzer.snapshot() {
                info!(
                    "Progress: frame #{} | vehicles={} pedestrians={} animals={} | congestion={} | incident={}",
                    snapshot.frame_index,
                    snapshot.vehicle_count,
                    snapshot.human_count,
                    snapshot.animal_count,
                    snapshot.congestion.as_str(),
                    snapshot.incident
                );
            }
        }
    }

    let log = analyzer.into_log();
    let run_summary = summary::summarize(&log);

    let log_path = Path::new(&config.feed.output_dir).join(format!("{}_log.json", feed_name));
    export::write_log_json(&log, &log_path)?;

    let summary_path =
        Path::new(&config.feed.output_dir).join(format!("{}_summary.json", feed_name));
    export::write_summary_json(&run_summary, &summary_path)?;

    Ok(RunStats {
        records_seen: reader.records_read,
        frames_analyzed: log.len() as u64,
        summary: run_summary,
        duration_secs: start_time.elapsed().as_secs_f64(),
    })
}
