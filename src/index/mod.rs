use crate::config::RecommendConfig;
use crate::error::{LoadError, QueryError};
use crate::listing::{PriceTier, Restaurant, UnknownTier, parse_listing};
use crate::query::{self, RatedRestaurant};
use log::{debug, warn};
use std::fs;
use std::io::Read;
use std::path::Path;

mod tables;

pub use tables::{CuisineIndex, PriceIndex, RatingIndex};

/// The three lookup tables built from a listing.
///
/// Every name stored in `prices` or `cuisines` is also a key of `ratings`,
/// since all three are filled from the same record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantIndex {
    pub ratings: RatingIndex,
    pub prices: PriceIndex,
    pub cuisines: CuisineIndex,
}

impl RestaurantIndex {
    /// Builds the tables from parsed records in a single pass.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Restaurant>) -> Self {
        let mut index = Self::default();
        let mut count = 0usize;

        for record in records {
            count += 1;
            if let Some(previous) = index.ratings.insert(record.name.as_str(), record.rating) {
                warn!(
                    "Duplicate restaurant '{}': rating {} replaces {}",
                    record.name, record.rating, previous
                );
            }
            index.prices.push(record.price, record.name.as_str());
            for tag in &record.cuisines {
                index.cuisines.push(tag, record.name.as_str());
            }
        }

        debug!(
            "Indexed {} records ({} distinct names, {} cuisine tags)",
            count,
            index.ratings.len(),
            index.cuisines.len()
        );
        index
    }

    /// Parses listing text and builds the tables.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let records = parse_listing(text)?;
        Ok(Self::from_records(&records))
    }

    /// Reads a whole listing from `reader` and builds the tables.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, LoadError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| LoadError::Io { path: None, source })?;
        Self::parse(&text)
    }

    /// Reads the listing file at `path` and builds the tables.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!("Loading listing from '{}'", path.display());
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: Some(path.to_path_buf()),
            source,
        })?;
        Self::parse(&text)
    }

    /// Splits the index into its (ratings, prices, cuisines) tables.
    pub fn into_parts(self) -> (RatingIndex, PriceIndex, CuisineIndex) {
        (self.ratings, self.prices, self.cuisines)
    }

    /// Runs filter, rank and sort over the loaded tables.
    ///
    /// `price` is a tier symbol such as `"$$"`. With `config.strict_price`
    /// an unknown symbol is an error; otherwise it matches nothing.
    pub fn recommend<S: AsRef<str>>(
        &self,
        price: &str,
        cuisines: &[S],
        config: &RecommendConfig,
    ) -> Result<Vec<RatedRestaurant>, QueryError> {
        let candidates = match price.parse::<PriceTier>() {
            Ok(tier) => self.prices.names(tier),
            Err(UnknownTier(found)) if config.strict_price => {
                return Err(QueryError::UnknownPriceTier(found));
            }
            Err(_) => {
                debug!("Unknown price tier '{}', returning no matches", price);
                return Ok(Vec::new());
            }
        };

        let matched =
            query::filter_by_cuisine_with(candidates, &self.cuisines, cuisines, config.duplicates);
        let mut rated = query::build_rating_list(&self.ratings, &matched)?;
        query::sort_by_rating(&mut rated, config.order);
        Ok(rated)
    }

    /// Checks that every name in the price and cuisine tables has a rating.
    pub fn validate(&self) -> Result<(), QueryError> {
        let price_names = self.prices.iter().flat_map(|(_, names)| names);
        let cuisine_names = self
            .cuisines
            .tags()
            .flat_map(|tag| self.cuisines.names(tag));

        match price_names
            .chain(cuisine_names)
            .find(|name| !self.ratings.contains(name))
        {
            Some(name) => Err(QueryError::Inconsistent(name.clone())),
            None => Ok(()),
        }
    }
}
