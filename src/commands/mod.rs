pub mod calendar;
pub mod search;
pub mod timetable;

use apubot::crawler::CrawlReport;

// Re-export command functions for convenience
pub use calendar::calendar;
pub use search::search;
pub use timetable::timetable;

/// Failures listed in full before the summary is cut short
const MAX_LISTED_FAILURES: usize = 10;

/// Print a summary of the pages and rows that could not be read
pub fn print_failures<T>(report: &CrawlReport<T>) {
    if report.is_complete() {
        return;
    }

    println!();
    println!("{} page(s) or row(s) could not be read:", report.failures.len());
    for failure in report.failures.iter().take(MAX_LISTED_FAILURES) {
        println!("  - {failure}");
    }
    if report.failures.len() > MAX_LISTED_FAILURES {
        println!(
            "  ... and {} more",
            report.failures.len() - MAX_LISTED_FAILURES
        );
    }
}
