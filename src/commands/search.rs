use std::time::Instant;

use anyhow::{Context, Result};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use apubot::config::Config;
use apubot::crawler::AcademicCrawler;
use apubot::storage::LectureStore;

use super::print_failures;

/// Input that ends the interactive prompt
const EXIT_COMMAND: &str = "exit";

pub async fn search(config: Config, query: Option<String>) -> Result<()> {
    let syllabus_url = config.site.syllabus_url.clone();
    let crawler = AcademicCrawler::new(config).context("Failed to create crawler")?;

    println!("Loading lectures...");
    let report = crawler.lectures().await;
    print_failures(&report);

    let store = LectureStore::new(report.records);
    println!("{} lecture(s) loaded", store.len());

    if let Some(query) = query {
        run_query(&store, &query, &syllabus_url);
        return Ok(());
    }

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();
    loop {
        stdout.write_all(b"\nSearch (type 'exit' to quit): ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("Failed to read query")? else {
            break;
        };
        let query = line.trim();
        if query == EXIT_COMMAND {
            break;
        }
        run_query(&store, query, &syllabus_url);
    }

    Ok(())
}

fn run_query(store: &LectureStore, query: &str, syllabus_url: &str) {
    let started = Instant::now();
    let hits = store.search(query);
    let elapsed = started.elapsed();

    if hits.is_empty() {
        println!("No results found for \"{query}\"");
        return;
    }

    println!("================================");
    for lecture in &hits {
        println!("{}", lecture.summary_line());
        println!("   Syllabus: {}", lecture.syllabus_url(syllabus_url));
    }
    println!(
        "\nFound {} result(s) in {} ms",
        hits.len(),
        elapsed.as_millis()
    );
}
