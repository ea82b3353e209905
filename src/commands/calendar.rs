use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use apubot::config::Config;
use apubot::crawler::AcademicCrawler;
use apubot::storage::{write_calendar, ExportFormat};

use super::print_failures;

pub async fn calendar(
    config: Config,
    output: Option<PathBuf>,
    format: ExportFormat,
    upcoming: bool,
) -> Result<()> {
    let crawler = AcademicCrawler::new(config).context("Failed to create crawler")?;
    let mut report = crawler.calendar_events().await;

    if upcoming {
        let today = Local::now().date_naive();
        report
            .records
            .retain(|event| event.naive_date().is_some_and(|date| date >= today));
    }

    println!("Academic Calendar");
    println!("================================");
    for event in &report.records {
        println!("{event}");
    }
    println!("\n{} event(s)", report.records.len());

    if let Some(path) = output {
        write_calendar(&path, &report.records, format)
            .with_context(|| format!("Failed to write calendar to {}", path.display()))?;
        println!("Saved to {}", path.display());
    }

    print_failures(&report);
    Ok(())
}
