use crate::index::CuisineIndex;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// What to do with a restaurant that matches more than one requested cuisine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Emit the name once per matching cuisine.
    #[default]
    Keep,
    /// Emit each name once, at its first match.
    Collapse,
}

/// Narrows `candidates` to the names tagged with any of `desired`.
///
/// Iterates candidates in order and, for each, the desired cuisines in order,
/// emitting the name for every cuisine it is tagged with. A restaurant that
/// matches two requested cuisines therefore appears twice. Cuisines missing
/// from the index match nothing.
pub fn filter_by_cuisine<'a, S: AsRef<str>>(
    candidates: &'a [String],
    cuisines: &CuisineIndex,
    desired: &[S],
) -> Vec<&'a str> {
    let mut matched = Vec::new();
    for name in candidates {
        for cuisine in desired {
            if cuisines.is_tagged(cuisine.as_ref(), name) {
                matched.push(name.as_str());
            }
        }
    }
    matched
}

/// Like [`filter_by_cuisine`], then applies `policy` to repeated names.
pub fn filter_by_cuisine_with<'a, S: AsRef<str>>(
    candidates: &'a [String],
    cuisines: &CuisineIndex,
    desired: &[S],
    policy: DuplicatePolicy,
) -> Vec<&'a str> {
    let matched = filter_by_cuisine(candidates, cuisines, desired);
    match policy {
        DuplicatePolicy::Keep => matched,
        DuplicatePolicy::Collapse => matched.into_iter().unique().collect(),
    }
}
