use super::UserProfileBuilder;
use crate::dao::TagVectorModel;
use crate::error::{Result, ScoringError};
use crate::models::{Rating, UserProfile};
use std::sync::Arc;
use tracing::debug;

/// Profile weighted by how far each rating sits from the user's own mean
///
/// profile[tag] = SUM over rated items of weight(item, tag) * (rating - user_mean)
///
/// Tags on items the user rated above average gain affinity, tags on
/// items rated below average lose it. A single rating equals the mean,
/// so its profile is all zeros.
pub struct WeightedUserProfileBuilder {
    model: Arc<dyn TagVectorModel>,
}

impl WeightedUserProfileBuilder {
    pub fn new(model: Arc<dyn TagVectorModel>) -> Self {
        Self { model }
    }
}

impl UserProfileBuilder for WeightedUserProfileBuilder {
    fn make_user_profile(&self, ratings: &[Rating]) -> Result<UserProfile> {
        if ratings.is_empty() {
            return Err(ScoringError::EmptyRatingHistory);
        }

        let mean_rating = ratings.iter().map(|r| r.value).sum::<f64>() / ratings.len() as f64;

        let mut profile = UserProfile::new();
        for rating in ratings {
            let offset = rating.value - mean_rating;
            let item_vector = self.model.item_vector(rating.item_id);
            for (tag, weight) in item_vector.iter() {
                profile.add(tag, weight * offset);
            }
        }

        debug!(
            rating_count = ratings.len(),
            mean_rating,
            tag_count = profile.len(),
            "Built weighted user profile"
        );

        Ok(profile)
    }
}
