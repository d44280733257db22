use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process;

use log::{error, info};

use rating_scraper_lib::fetcher::{self, RatingFetcher};
use rating_scraper_lib::logger;
use rating_scraper_lib::names;
use rating_scraper_lib::report::{self, ReportStyle, DEFAULT_OUTPUT_FILE};

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    info!("Starting TennisRecord rating scraper...");

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: rating-scraper INPUT_HTML [OUTPUT_HTML]");
        process::exit(1);
    }

    let input_file = &args[1];
    let output_file = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());

    if !Path::new(input_file).exists() {
        error!("Input file '{}' not found.", input_file);
        process::exit(1);
    }

    let input_html = fs::read_to_string(input_file)?;
    let player_names = names::extract_player_names(&input_html);
    info!(
        "Found {} unique player names in '{}'",
        player_names.len(),
        input_file
    );

    let fetcher_instance = RatingFetcher::new();
    let records = fetcher::collect_records(&player_names, &fetcher_instance);

    let document = report::render_report(&records, ReportStyle::from_env());
    report::write_report(&output_file, &document)?;

    info!("Done! Wrote '{}' with {} entries.", output_file, records.len());
    Ok(())
}
