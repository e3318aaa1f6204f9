use super::price::PriceTier;
use serde::{Deserialize, Serialize};

/// A rating percentage. Nominally 0-100, but not range checked.
pub type Rating = i32;

/// A single restaurant as described by one block of a listing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub rating: Rating,
    pub price: PriceTier,
    pub cuisines: Vec<String>,
}
