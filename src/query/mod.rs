use crate::config::RecommendConfig;
use crate::error::Error;
use crate::index::RestaurantIndex;
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};

mod filter;
mod ranker;

pub use filter::{DuplicatePolicy, filter_by_cuisine, filter_by_cuisine_with};
pub use ranker::{RatedRestaurant, SortOrder, build_rating_list, sort_by_rating};

/// Loads a listing from `source` and returns the restaurants at `price` that
/// serve any of `cuisines`, sorted by rating (ascending, stable).
///
/// Uses the default [`RecommendConfig`]: unknown price tiers are an error and
/// a restaurant matching several cuisines is listed once per match.
///
/// # Example
///
/// ```rust
/// use restaurant_recs::query::recommend;
///
/// let listing = "Queen St. Cafe\n82\n$\nMalaysian,Thai\n\nDumplings R Us\n71\n$\nChinese\n\n";
/// let result = recommend("$", &["Chinese", "Thai"], listing.as_bytes()).unwrap();
///
/// assert_eq!(result[0].name, "Dumplings R Us");
/// assert_eq!(result[1].rating, 82);
/// ```
pub fn recommend<S: AsRef<str>>(
    price: &str,
    cuisines: &[S],
    source: impl Read,
) -> Result<Vec<RatedRestaurant>, Error> {
    let index = RestaurantIndex::from_reader(source)?;
    Ok(index.recommend(price, cuisines, &RecommendConfig::default())?)
}

/// Answers queries against a listing file, re-reading it on every call.
///
/// The file read is always `config().listing_path`.
#[derive(Debug, Clone)]
pub struct Recommender {
    config: RecommendConfig,
}

/// Builder for [`Recommender`].
pub struct RecommenderBuilder {
    config: RecommendConfig,
}

impl RecommenderBuilder {
    pub fn new(listing_path: impl Into<PathBuf>) -> Self {
        Self {
            config: RecommendConfig {
                listing_path: listing_path.into(),
                ..RecommendConfig::default()
            },
        }
    }

    /// Replaces all settings with `config`. The listing path given to the
    /// builder overrides `config.listing_path`.
    pub fn with_config(mut self, config: RecommendConfig) -> Self {
        let listing_path = std::mem::take(&mut self.config.listing_path);
        self.config = RecommendConfig {
            listing_path,
            ..config
        };
        self
    }

    pub fn strict_price(mut self, strict: bool) -> Self {
        self.config.strict_price = strict;
        self
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicates = policy;
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.config.order = order;
        self
    }

    pub fn build(self) -> Recommender {
        Recommender {
            config: self.config,
        }
    }
}

impl Recommender {
    pub fn builder(listing_path: impl Into<PathBuf>) -> RecommenderBuilder {
        RecommenderBuilder::new(listing_path)
    }

    /// A recommender using the listing path and settings from `config`.
    pub fn from_config(config: RecommendConfig) -> Self {
        Self { config }
    }

    pub fn listing_path(&self) -> &Path {
        &self.config.listing_path
    }

    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    /// Loads the listing and runs the query. Nothing is cached between calls.
    pub fn recommend<S: AsRef<str>>(
        &self,
        price: &str,
        cuisines: &[S],
    ) -> Result<Vec<RatedRestaurant>, Error> {
        let index = RestaurantIndex::from_path(&self.config.listing_path)?;
        let result = index.recommend(price, cuisines, &self.config)?;
        debug!(
            "Query price='{}' cuisines={:?} matched {} entries",
            price,
            cuisines.iter().map(|c| c.as_ref()).collect::<Vec<&str>>(),
            result.len()
        );
        Ok(result)
    }
}
