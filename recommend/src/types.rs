use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ratings given by a single user, keyed by item identifier.
///
/// A missing key means the item is unrated, which is not the same as a rating
/// of zero.
pub type RatingVector = BTreeMap<String, f64>;

/// Every known user's ratings, keyed by user identifier.
pub type RatingTable = BTreeMap<String, RatingVector>;

/// An item together with its predicted score for a user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Identifier of the recommended item.
    pub item: String,
    /// Similarity-weighted average of the neighbors' ratings.
    pub score: f64,
}

impl Recommendation {
    pub fn new(item: impl Into<String>, score: f64) -> Self {
        Self {
            item: item.into(),
            score,
        }
    }
}
