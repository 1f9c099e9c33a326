//! Pure filtering and sorting over an ad collection. Re-run in full on every
//! filter change; no indexing is needed at marketplace-page scale.

use crate::models::{Ad, Condition};
use std::cmp::Ordering;
use std::str::FromStr;

/// User-selected predicates, AND-combined. `None` on a field disables that
/// predicate (the UI's `"all"` sentinel maps to `None` here).
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring match against title or description.
    pub search: String,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Exact location match.
    pub location: Option<String>,
    /// Exact condition match.
    pub condition: Option<Condition>,
    /// Exact category match, selected independently of the sidebar filters.
    pub category: Option<String>,
}

impl FilterSpec {
    fn matches(&self, ad: &Ad) -> bool {
        if let Some(category) = &self.category {
            if &ad.category != category {
                return false;
            }
        }

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = ad.title.to_lowercase().contains(&needle)
                || ad.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if ad.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if ad.price > max {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if &ad.location != location {
                return false;
            }
        }

        if let Some(condition) = self.condition {
            if ad.condition != condition {
                return false;
            }
        }

        true
    }
}

/// Named ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep the repository-returned order, which is newest-first.
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            other => anyhow::bail!("unknown sort key: {}", other),
        }
    }
}

fn price_of(ad: &Ad) -> f64 {
    // Treat NaN the same as a missing price.
    if ad.price.is_nan() {
        0.0
    } else {
        ad.price
    }
}

/// Apply all active predicates, then order the survivors. Stable for equal
/// sort keys, so ties keep their repository order.
pub fn filter_and_sort(ads: &[Ad], spec: &FilterSpec, sort: SortKey) -> Vec<Ad> {
    let mut result: Vec<Ad> = ads.iter().filter(|ad| spec.matches(ad)).cloned().collect();

    match sort {
        SortKey::Newest => {}
        SortKey::PriceLow => result.sort_by(|a, b| {
            price_of(a).partial_cmp(&price_of(b)).unwrap_or(Ordering::Equal)
        }),
        SortKey::PriceHigh => result.sort_by(|a, b| {
            price_of(b).partial_cmp(&price_of(a)).unwrap_or(Ordering::Equal)
        }),
    }

    result
}
