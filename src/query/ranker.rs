use crate::error::QueryError;
use crate::index::RatingIndex;
use crate::listing::Rating;
use log::error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a recommendation: a restaurant and its rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedRestaurant {
    pub rating: Rating,
    pub name: String,
}

impl fmt::Display for RatedRestaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}%  {}", self.rating, self.name)
    }
}

/// Direction of the final sort by rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Pairs every name with its rating, keeping input order and duplicates.
///
/// Returns `QueryError::Inconsistent` for a name without a rating, which
/// can only happen if the tables were not built from the same records.
pub fn build_rating_list<N: AsRef<str>>(
    ratings: &RatingIndex,
    names: &[N],
) -> Result<Vec<RatedRestaurant>, QueryError> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            match ratings.get(name) {
                Some(rating) => Ok(RatedRestaurant {
                    rating,
                    name: name.to_string(),
                }),
                None => {
                    error!("Restaurant '{}' has no rating; index is inconsistent", name);
                    Err(QueryError::Inconsistent(name.to_string()))
                }
            }
        })
        .collect()
}

/// Stable sort by rating. Equal ratings keep their relative order.
pub fn sort_by_rating(list: &mut [RatedRestaurant], order: SortOrder) {
    match order {
        SortOrder::Ascending => list.sort_by_key(|r| r.rating),
        SortOrder::Descending => list.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }
}
