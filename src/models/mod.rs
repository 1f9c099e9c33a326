use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder image reference used when an ad is posted without photos.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=No+Image";

/// Identifier for an ad, tagged by the store that minted it.
///
/// The remote collection assigns opaque string ids; the local cache assigns
/// auto-incrementing integers. Keeping the two as distinct variants lets
/// lookups dispatch on source instead of guessing whether a raw id string
/// should be compared numerically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdId {
    Local(u64),
    Remote(String),
}

impl AdId {
    /// Whether a raw id string (as received from a caller or URL) refers to
    /// this id. Numeric-looking strings are matched against local ids,
    /// anything else against the remote id verbatim.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            AdId::Local(n) => key.parse::<u64>().map(|k| k == *n).unwrap_or(false),
            AdId::Remote(s) => s == key,
        }
    }
}

impl fmt::Display for AdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdId::Local(n) => write!(f, "{}", n),
            AdId::Remote(s) => write!(f, "{}", s),
        }
    }
}

/// Item condition as shown in the listing UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Condition {
    New,
    #[default]
    Used,
    #[serde(rename = "Like New")]
    LikeNew,
    Good,
    Fair,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Condition::New => "New",
            Condition::Used => "Used",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        };
        f.write_str(s)
    }
}

/// Seller contact details attached to an ad.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub name: String,
    /// Year the seller joined, as a display string.
    pub member_since: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// A single marketplace listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ad {
    /// The remote collection serves this field as `_id`.
    #[serde(alias = "_id")]
    pub id: AdId,
    pub title: String,
    /// Non-negative; `0` means "contact for price", not free.
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub condition: Condition,
    pub description: String,
    pub location: String,
    /// Display string for recency. Set once at creation, never recomputed.
    #[serde(default)]
    pub posted: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub seller: Seller,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Form data for a new ad, before either store has assigned an identity.
///
/// Prices arrive already coerced to a number; text validation is the form
/// layer's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdDraft {
    pub title: String,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    pub description: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
