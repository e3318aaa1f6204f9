//! Prelude module for convenient imports
//!
//! Re-exports the types needed to load a listing and run queries against it.
//!
//! # Example
//!
//! ```rust,no_run
//! use restaurant_recs::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = RecommendConfig::from_file("recommend.json")?;
//! let index = RestaurantIndex::from_path(&config.listing_path)?;
//! let result = index.recommend("$$", &["Mexican"], &config)?;
//!
//! println!("Recommendations: {:?}", result);
//! # Ok(())
//! # }
//! ```

// Loading
pub use crate::index::{CuisineIndex, PriceIndex, RatingIndex, RestaurantIndex};
pub use crate::listing::{PriceTier, Rating, Restaurant, parse_listing, render_listing};

// Querying
pub use crate::config::RecommendConfig;
pub use crate::query::{
    DuplicatePolicy, RatedRestaurant, Recommender, SortOrder, build_rating_list,
    filter_by_cuisine, recommend,
};

// Error types
pub use crate::error::{ConfigError, Error, LoadError, QueryError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
