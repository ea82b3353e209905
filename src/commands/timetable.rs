use std::path::PathBuf;

use anyhow::{Context, Result};

use apubot::config::Config;
use apubot::crawler::AcademicCrawler;
use apubot::storage::{write_lectures, ExportFormat};

use super::print_failures;

pub async fn timetable(config: Config, output: Option<PathBuf>, format: ExportFormat) -> Result<()> {
    let crawler = AcademicCrawler::new(config).context("Failed to create crawler")?;
    let report = crawler.lectures().await;

    println!("Course Timetable");
    println!("================================");
    for lecture in &report.records {
        println!("{}", lecture.summary_line());
    }
    println!("\n{} lecture(s)", report.records.len());

    if let Some(path) = output {
        write_lectures(&path, &report.records, format)
            .with_context(|| format!("Failed to write timetable to {}", path.display()))?;
        println!("Saved to {}", path.display());
    }

    print_failures(&report);
    Ok(())
}
