use super::price::{PriceTier, UnknownTier};
use super::record::{Rating, Restaurant};
use crate::error::LoadError;

/// Number of lines making up one record: name, rating, price, cuisines, separator.
pub const BLOCK_SIZE: usize = 5;

const NAME: usize = 0;
const RATING: usize = 1;
const PRICE: usize = 2;
const CUISINES: usize = 3;

/// Parses listing text into records, in file order.
///
/// The text is a sequence of 5-line blocks. The fifth line of each block is a
/// separator and its content is ignored, but it must be present.
///
/// # Errors
///
/// * `LoadError::TruncatedListing` if the line count is not a multiple of 5.
/// * `LoadError::InvalidRating` if a rating line is not an integer.
/// * `LoadError::UnknownPriceTier` if a price line is not `$` through `$$$$`.
pub fn parse_listing(text: &str) -> Result<Vec<Restaurant>, LoadError> {
    let lines: Vec<&str> = text.lines().collect();

    if lines.len() % BLOCK_SIZE != 0 {
        return Err(LoadError::TruncatedListing {
            line_count: lines.len(),
            block_size: BLOCK_SIZE,
            record: lines.len() / BLOCK_SIZE,
        });
    }

    lines
        .chunks_exact(BLOCK_SIZE)
        .enumerate()
        .map(|(record, block)| parse_block(record, block))
        .collect()
}

fn parse_block(record: usize, block: &[&str]) -> Result<Restaurant, LoadError> {
    let name = block[NAME].to_string();

    let rating_text = block[RATING];
    let rating: Rating = rating_text
        .trim()
        .parse()
        .map_err(|_| LoadError::InvalidRating {
            record,
            name: name.clone(),
            found: rating_text.to_string(),
        })?;

    let price: PriceTier = block[PRICE]
        .parse()
        .map_err(|UnknownTier(found)| LoadError::UnknownPriceTier {
            record,
            name: name.clone(),
            found,
        })?;

    Ok(Restaurant {
        name,
        rating,
        price,
        cuisines: split_cuisines(block[CUISINES]),
    })
}

/// Splits a cuisine line on commas. Tags are kept exactly as split, so an
/// empty line yields a single empty tag.
pub fn split_cuisines(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

/// Renders records back into the 5-line block format, each block ending with
/// an empty separator line.
pub fn render_listing<'a>(records: impl IntoIterator<Item = &'a Restaurant>) -> String {
    let mut out = String::new();
    for r in records {
        out.push_str(&r.name);
        out.push('\n');
        out.push_str(&r.rating.to_string());
        out.push('\n');
        out.push_str(r.price.symbol());
        out.push('\n');
        out.push_str(&r.cuisines.join(","));
        out.push_str("\n\n");
    }
    out
}
