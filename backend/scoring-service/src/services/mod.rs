pub mod content_scorer;
pub mod mean;
pub mod profile_builder;

pub use content_scorer::{cosine_similarity, ContentScorer};
pub use mean::{DampedItemMeanModelProvider, ItemMeanModel, ItemMeanModelProvider, MeanItemScorer};
pub use profile_builder::{
    profile_builder_for, ThresholdUserProfileBuilder, UserProfileBuilder,
    WeightedUserProfileBuilder,
};

use crate::error::Result;
use crate::models::{ItemId, ItemScores, UserId};
use async_trait::async_trait;

/// Scores candidate items for a user
#[async_trait]
pub trait ItemScorer: Send + Sync {
    /// Items without a computable score are left out of the result.
    async fn score(&self, user_id: UserId, items: &[ItemId]) -> Result<ItemScores>;
}
