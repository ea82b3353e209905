//! Calendar and timetable export
//!
//! `Delimited` writes one pipe-separated line per record with no header,
//! fields in declaration order. `Json` writes a pretty-printed array.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use csv::WriterBuilder;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{CalendarEvent, LectureRecord};
use crate::parser::DELIMITER;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Delimited,
    Json,
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "delimited" | "csv" => Ok(Self::Delimited),
            "json" => Ok(Self::Json),
            other => Err(Error::config(format!("unknown export format: {other}"))),
        }
    }
}

/// Write calendar events to `path`
pub fn write_calendar(path: &Path, events: &[CalendarEvent], format: ExportFormat) -> Result<()> {
    write_records(File::create(path)?, events, format)
}

/// Write lectures to `path`
pub fn write_lectures(path: &Path, lectures: &[LectureRecord], format: ExportFormat) -> Result<()> {
    write_records(File::create(path)?, lectures, format)
}

/// Serialize records into any writer
pub fn write_records<W: Write, T: Serialize>(
    writer: W,
    records: &[T],
    format: ExportFormat,
) -> Result<()> {
    match format {
        ExportFormat::Delimited => {
            let mut writer = WriterBuilder::new()
                .delimiter(DELIMITER as u8)
                .has_headers(false)
                .from_writer(writer);
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        ExportFormat::Json => {
            let mut writer = BufWriter::new(writer);
            serde_json::to_writer_pretty(&mut writer, records)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
    }
    Ok(())
}
