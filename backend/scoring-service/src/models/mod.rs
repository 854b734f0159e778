use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod sparse;

pub use sparse::SparseVector;

pub type UserId = i64;
pub type ItemId = i64;

/// Precomputed tag weights for one item (non-negative, TF-IDF weighted)
pub type TagVector = SparseVector;

/// Signed per-tag preference weights for one user
pub type UserProfile = SparseVector;

/// Scores keyed by item id. Items without a defined score are absent.
pub type ItemScores = HashMap<ItemId, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub value: f64,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Rating {
    pub fn new(user_id: UserId, item_id: ItemId, value: f64) -> Self {
        Self {
            user_id,
            item_id,
            value,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
