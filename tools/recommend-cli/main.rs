use clap::Parser;
use restaurant_recs::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

/// Recommend restaurants from a listing file by price tier and cuisine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Price tier to search: $, $$, $$$ or $$$$
    price: String,
    /// Cuisines to match; a restaurant qualifies if it serves any of them
    cuisines: Vec<String>,

    /// Path to the restaurant listing file
    #[arg(short, long)]
    listing: Option<PathBuf>,

    /// Optional JSON file with query settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Return no results for an unknown price tier instead of failing
    #[arg(long)]
    lenient: bool,

    /// List a restaurant once even if it matches several cuisines
    #[arg(long)]
    collapse_duplicates: bool,

    /// Highest rated first
    #[arg(short, long)]
    descending: bool,

    /// Print results as a JSON array
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = build_config(&cli);
    let recommender = Recommender::from_config(config);
    log::debug!("Using settings {:?}", recommender.config());

    let start = Instant::now();
    let result = recommender
        .recommend(&cli.price, &cli.cuisines)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    log::info!(
        "Query over '{}' finished in {:?}",
        recommender.listing_path().display(),
        start.elapsed()
    );

    if cli.json {
        let json = serde_json::to_string_pretty(&result)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode results: {}", e)));
        println!("{}", json);
        return;
    }

    if result.is_empty() {
        println!("No matching restaurants.");
    }
    for entry in &result {
        println!("{}", entry);
    }
}

/// Defaults, then the config file, then command-line flags.
fn build_config(cli: &Cli) -> RecommendConfig {
    let mut config = match &cli.config {
        Some(path) => RecommendConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&e.to_string())),
        None => RecommendConfig::default(),
    };

    if let Some(listing) = &cli.listing {
        config.listing_path = listing.clone();
    }
    if cli.lenient {
        config.strict_price = false;
    }
    if cli.collapse_duplicates {
        config.duplicates = DuplicatePolicy::Collapse;
    }
    if cli.descending {
        config.order = SortOrder::Descending;
    }
    config
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
