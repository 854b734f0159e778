use super::UserProfileBuilder;
use crate::dao::TagVectorModel;
use crate::error::{Result, ScoringError};
use crate::models::{Rating, UserProfile};
use std::sync::Arc;
use tracing::debug;

/// Profile made of the summed tag vectors of every item the user liked
pub struct ThresholdUserProfileBuilder {
    model: Arc<dyn TagVectorModel>,
    /// Ratings at or above this value count as liked
    threshold: f64,
}

impl ThresholdUserProfileBuilder {
    pub fn new(model: Arc<dyn TagVectorModel>, threshold: f64) -> Self {
        Self { model, threshold }
    }
}

impl UserProfileBuilder for ThresholdUserProfileBuilder {
    fn make_user_profile(&self, ratings: &[Rating]) -> Result<UserProfile> {
        if ratings.is_empty() {
            return Err(ScoringError::EmptyRatingHistory);
        }

        let mut profile = UserProfile::new();
        let mut liked = 0usize;
        for rating in ratings.iter().filter(|r| r.value >= self.threshold) {
            liked += 1;
            for (tag, weight) in self.model.item_vector(rating.item_id).iter() {
                profile.add(tag, *weight);
            }
        }

        debug!(
            rating_count = ratings.len(),
            liked_count = liked,
            threshold = self.threshold,
            tag_count = profile.len(),
            "Built threshold user profile"
        );

        Ok(profile)
    }
}
