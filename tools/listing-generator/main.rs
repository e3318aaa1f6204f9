use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use restaurant_recs::listing::{PriceTier, Restaurant, render_listing};
use std::fs;

const CUISINES: &[&str] = &[
    "Canadian",
    "Pub Food",
    "Malaysian",
    "Thai",
    "Chinese",
    "Mexican",
    "Italian",
    "Indian",
    "Japanese",
    "Ethiopian",
    "Greek",
    "Vegetarian",
];

const ADJECTIVES: &[&str] = &[
    "Golden", "Lucky", "Hungry", "Rusty", "Little", "Royal", "Spicy", "Queen St.",
];

const NOUNS: &[&str] = &[
    "Grill", "Cafe", "Kitchen", "Bistro", "Diner", "Noodle Bar", "Taqueria", "Tavern",
];

/// A CLI tool to generate random restaurant listings
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated listing to
    #[arg(short, long, default_value = "restaurants.txt")]
    output: String,

    /// Number of restaurants to generate
    #[arg(short, long, default_value_t = 50)]
    count: usize,

    /// Maximum number of cuisine tags per restaurant
    #[arg(long, default_value_t = 3)]
    max_cuisines: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.max_cuisines == 0 {
        eprintln!("Error: --max-cuisines must be at least 1");
        std::process::exit(1);
    }

    println!("Generating {} restaurants...", cli.count);

    let records: Vec<Restaurant> = (0..cli.count)
        .map(|i| generate_restaurant(&mut rng, i, cli.max_cuisines))
        .collect();

    fs::write(&cli.output, render_listing(&records))?;

    println!(
        "Successfully generated and saved listing to '{}'",
        cli.output
    );

    Ok(())
}

/// Builds one record. `id` is appended to the name so names stay unique.
fn generate_restaurant(rng: &mut ThreadRng, id: usize, max_cuisines: usize) -> Restaurant {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Corner");
    let noun = NOUNS.choose(rng).copied().unwrap_or("Cafe");
    let tag_count = rng.random_range(1..=max_cuisines.min(CUISINES.len()));

    Restaurant {
        name: format!("{} {} #{}", adjective, noun, id + 1),
        rating: rng.random_range(0..=100),
        price: PriceTier::ALL.choose(rng).copied().unwrap_or(PriceTier::One),
        cuisines: CUISINES
            .choose_multiple(rng, tag_count)
            .map(|c| c.to_string())
            .collect(),
    }
}
