#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod fetch;
mod parse;
mod report;
mod search;

use std::io::{self, BufRead, Write};

use crate::{
    config::{Config, OutputFormat},
    fetch::HttpRetriever,
    search::{search_all_halls, SearchQuery},
};

pub use error::Result;

fn prompt(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    log::debug!("{config:?}");

    let keyword = prompt("What food are you searching for? : ")?;
    if keyword.is_empty() {
        println!("No food entered, nothing to search for.");
        return Ok(());
    }

    let halls = fetch::dining_halls(&config).await?;
    let query = SearchQuery::new(&keyword);
    let retriever = HttpRetriever::new(&config);
    let report = search_all_halls(&retriever, &halls, &query).await;
    log::info!(
        "Searched {} dining halls, {} could not be fetched",
        report.outcomes().len(),
        report.failures().count()
    );

    match config.output {
        OutputFormat::Text => print!("{}", report::TextReport(&report)),
        OutputFormat::Json => println!("{}", report::render_json(&report)?),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
    if let Err(e) = run().await {
        log::error!("{e}");
        eprintln!("{e}");
    }
}
