// src/export.rs
//
// Archival sinks for the run log. Whole-log JSON for export, JSONL for
// streaming one entry per line while the run is still in progress.

use crate::summary::RunSummary;
use crate::types::LogEntry;
use anyhow::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

pub fn write_log_json(log: &[LogEntry], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, log)?;
    writer.flush()?;
    info!("💾 Log written: {} ({} entries)", path.display(), log.len());
    Ok(())
}

#[allow(dead_code)]
pub fn read_log_json(path: &Path) -> Result<Vec<LogEntry>> {
    let reader = BufReader::new(File::open(path)?);
    let log = serde_json::from_reader(reader)?;
    Ok(log)
}

/// Append one entry to an open JSONL sink. Flushed per entry so a killed run
/// still leaves a usable stream behind.
pub fn append_entry_jsonl(entry: &LogEntry, file: &mut File) -> Result<()> {
    let json_line = serde_json::to_string(entry)?;
    writeln!(file, "{}", json_line)?;
    file.flush()?;
    Ok(())
}

pub fn write_summary_json(summary: &RunSummary, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.flush()?;
    info!("💾 Summary written: {}", path.display());
    Ok(())
}
