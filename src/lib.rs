//! # restaurant-recs - Restaurant Recommendations from Flat-File Listings
//!
//! **restaurant-recs** reads a plain-text listing of restaurants and answers one
//! question: which restaurants at a given price tier serve any of the cuisines
//! I want, ordered by rating?
//!
//! ## Listing Format
//!
//! A listing is a sequence of 5-line blocks, one per restaurant:
//!
//! ```text
//! Georgie Porgie        <- name
//! 87                    <- rating percentage
//! $$$                   <- price tier: $, $$, $$$ or $$$$
//! Canadian,Pub Food     <- comma-separated cuisine tags
//!                       <- separator (ignored, but required)
//! ```
//!
//! ## Core Workflow
//!
//! 1.  **Load**: the listing is parsed into a [`RestaurantIndex`](index::RestaurantIndex)
//!     holding three tables: name to rating, price tier to names, cuisine to names.
//! 2.  **Filter**: the names at the requested tier are narrowed to those tagged with
//!     at least one requested cuisine ([`filter_by_cuisine`](query::filter_by_cuisine)).
//! 3.  **Rank**: each name is paired with its rating
//!     ([`build_rating_list`](query::build_rating_list)) and the list is sorted by rating.
//!
//! The listing is loaded fresh for every query; nothing is cached in between.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use restaurant_recs::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let recommender = Recommender::builder("restaurants.txt")
//!         .order(SortOrder::Descending)
//!         .build();
//!
//!     for entry in recommender.recommend("$", &["Chinese", "Thai"])? {
//!         println!("{}", entry);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod listing;
pub mod prelude;
pub mod query;
