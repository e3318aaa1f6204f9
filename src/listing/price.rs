use serde::{Deserialize, Serialize};
use thiserror::Error;
use std::fmt;
use std::str::FromStr;

/// One of the four fixed cost categories a restaurant can be listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    One,
    #[serde(rename = "$$")]
    Two,
    #[serde(rename = "$$$")]
    Three,
    #[serde(rename = "$$$$")]
    Four,
}

impl PriceTier {
    /// Every tier, cheapest first.
    pub const ALL: [PriceTier; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// The symbol used for this tier in listing files.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::One => "$",
            Self::Two => "$$",
            Self::Three => "$$$",
            Self::Four => "$$$$",
        }
    }

    /// Position of this tier in `ALL`.
    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when a string is not one of `$`, `$$`, `$$$`, `$$$$`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a price tier, expected one of $, $$, $$$, $$$$")]
pub struct UnknownTier(pub String);

impl FromStr for PriceTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.symbol() == s)
            .ok_or_else(|| UnknownTier(s.to_string()))
    }
}
