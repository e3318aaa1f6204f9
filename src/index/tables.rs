use crate::listing::{PriceTier, Rating};
use ahash::AHashMap;

/// Restaurant name to rating. A later insert for the same name replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingIndex {
    ratings: AHashMap<String, Rating>,
}

impl RatingIndex {
    /// Records a rating, returning the rating it replaced, if any.
    pub fn insert(&mut self, name: impl Into<String>, rating: Rating) -> Option<Rating> {
        self.ratings.insert(name.into(), rating)
    }

    pub fn get(&self, name: &str) -> Option<Rating> {
        self.ratings.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ratings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

/// Price tier to restaurant names in listing order.
///
/// Backed by one slot per tier, so every tier is always present even when no
/// restaurant is listed under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceIndex {
    tiers: [Vec<String>; 4],
}

impl PriceIndex {
    pub fn push(&mut self, tier: PriceTier, name: impl Into<String>) {
        self.tiers[tier.slot()].push(name.into());
    }

    /// Names listed under `tier`, in listing order.
    pub fn names(&self, tier: PriceTier) -> &[String] {
        &self.tiers[tier.slot()]
    }

    /// All tiers with their names, cheapest first.
    pub fn iter(&self) -> impl Iterator<Item = (PriceTier, &[String])> {
        PriceTier::ALL
            .into_iter()
            .map(move |tier| (tier, self.names(tier)))
    }
}

/// Cuisine tag to restaurant names in listing order.
///
/// Tags are discovered from the data; looking up a tag that was never seen
/// yields an empty slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuisineIndex {
    by_tag: AHashMap<String, Vec<String>>,
    order: Vec<String>,
}

impl CuisineIndex {
    pub fn push(&mut self, tag: &str, name: impl Into<String>) {
        match self.by_tag.get_mut(tag) {
            Some(names) => names.push(name.into()),
            None => {
                self.order.push(tag.to_string());
                self.by_tag.insert(tag.to_string(), vec![name.into()]);
            }
        }
    }

    /// Names tagged with `tag`, or an empty slice for an unknown tag.
    pub fn names(&self, tag: &str) -> &[String] {
        self.by_tag.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `name` is listed under `tag`.
    pub fn is_tagged(&self, tag: &str, name: &str) -> bool {
        self.names(tag).iter().any(|n| n == name)
    }

    /// Tags in the order they were first seen.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
