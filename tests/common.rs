//! Common test fixtures for listings and indices.
use restaurant_recs::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// The five-restaurant sample listing.
#[allow(dead_code)]
pub const SAMPLE_LISTING: &str = "\
Georgie Porgie
87
$$$
Canadian,Pub Food

Queen St. Cafe
82
$
Malaysian,Thai

Dumplings R Us
71
$
Chinese

Mexican Grill
85
$$
Mexican

Deep Fried Everything
52
$
Pub Food

";

/// A listing where the same name appears twice with different ratings and tiers.
#[allow(dead_code)]
pub const DUPLICATE_NAME_LISTING: &str = "\
Noodle House
60
$
Chinese

Noodle House
90
$$
Thai,Chinese

";

/// Builds the index for `SAMPLE_LISTING`.
#[allow(dead_code)]
pub fn sample_index() -> RestaurantIndex {
    RestaurantIndex::parse(SAMPLE_LISTING).expect("sample listing should parse")
}

/// Writes `contents` to a temporary file that lives as long as the handle.
#[allow(dead_code)]
pub fn write_listing(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write listing");
    file
}

/// Shorthand for building an expected result entry.
#[allow(dead_code)]
pub fn rated(rating: Rating, name: &str) -> RatedRestaurant {
    RatedRestaurant {
        rating,
        name: name.to_string(),
    }
}
