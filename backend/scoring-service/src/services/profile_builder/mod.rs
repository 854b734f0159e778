// ============================================
// User Profile Builder (用戶畫像構建器)
// ============================================
//
// Turns one user's rating history into a sparse tag preference vector
// that the content scorer compares against item tag vectors.
//
// - WeightedUserProfileBuilder: mean-centered ratings weight each item's
//   tags, so below-average ratings push tags negative
// - ThresholdUserProfileBuilder: items rated at or above a threshold add
//   their tag vectors unweighted; everything else is ignored

mod threshold;
mod weighted;

use crate::config::{Config, ProfileStrategy};
use crate::dao::TagVectorModel;
use crate::error::Result;
use crate::models::{Rating, UserProfile};
use std::sync::Arc;

pub use threshold::ThresholdUserProfileBuilder;
pub use weighted::WeightedUserProfileBuilder;

/// Builds a user's tag profile from their ratings
pub trait UserProfileBuilder: Send + Sync {
    /// `ratings` must all belong to one user and must not be empty.
    fn make_user_profile(&self, ratings: &[Rating]) -> Result<UserProfile>;
}

/// Pick the profile builder named by the configuration
pub fn profile_builder_for(
    config: &Config,
    model: Arc<dyn TagVectorModel>,
) -> Arc<dyn UserProfileBuilder> {
    match config.profile_strategy {
        ProfileStrategy::Weighted => Arc::new(WeightedUserProfileBuilder::new(model)),
        ProfileStrategy::Threshold => Arc::new(ThresholdUserProfileBuilder::new(
            model,
            config.profile_threshold,
        )),
    }
}
