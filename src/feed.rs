// src/feed.rs
//
// Input boundary. The external detector's per-frame results arrive as JSONL
// feed files, one record per sampled frame, already resolved; running the
// model is not this system's job.

use crate::types::Detection;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// One sampled frame's worth of detector output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Elapsed source time in seconds at which the frame was sampled.
    pub time: f64,
    pub detections: Vec<Detection>,
}

pub struct DetectionFeed {
    input_dir: String,
}

impl DetectionFeed {
    pub fn new(input_dir: &str) -> Self {
        Self {
            input_dir: input_dir.to_string(),
        }
    }

    pub fn find_feed_files(&self) -> Result<Vec<PathBuf>> {
        let mut feeds = Vec::new();

        for entry in WalkDir::new(&self.input_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "jsonl") {
                feeds.push(path.to_path_buf());
            }
        }

        feeds.sort();
        info!("Found {} detection feed(s)", feeds.len());
        Ok(feeds)
    }

    pub fn open(&self, path: &Path) -> Result<FeedReader> {
        info!("Opening feed: {}", path.display());
        let file = File::open(path)?;
        Ok(FeedReader {
            lines: BufReader::new(file).lines(),
            records_read: 0,
        })
    }
}

pub struct FeedReader {
    lines: Lines<BufReader<File>>,
    pub records_read: u64,
}

impl FeedReader {
    /// Read the next frame record, or None at end of feed. Blank lines are
    /// skipped; anything else that fails to parse is a feed error.
    pub fn next_record(&mut self) -> Result<Option<FrameRecord>> {
        for line in self.lines.by_ref() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: FrameRecord = serde_json::from_str(&line)?;
            self.records_read += 1;
            return Ok(Some(record));
        }
        Ok(None)
    }
}
