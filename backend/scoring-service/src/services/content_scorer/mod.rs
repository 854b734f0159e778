// ============================================
// Content Scorer (基於內容的打分器)
// ============================================
//
// score(user, item) = cos(user_profile, item_tag_vector)
//                   = dot(p, v) / (|p| * |v|)
//
// The profile is built once per request from the user's ratings.
// Items where either norm is zero have no defined similarity and are
// omitted from the output rather than scored 0.

use super::profile_builder::UserProfileBuilder;
use super::ItemScorer;
use crate::dao::{RatingDao, TagVectorModel};
use crate::error::Result;
use crate::models::{ItemId, ItemScores, SparseVector, UserId, UserProfile};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Cosine similarity of two sparse vectors, `None` when either has zero norm
/// or a weight is not finite
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> Option<f64> {
    cosine_with_norm(a, a.norm(), b)
}

fn cosine_with_norm(a: &SparseVector, norm_a: f64, b: &SparseVector) -> Option<f64> {
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }

    // Divide each term by the norms first so huge weights cannot overflow
    let score = a.dot_with(b, |x, y| (x / norm_a) * (y / norm_b));
    score.is_finite().then(|| score.clamp(-1.0, 1.0))
}

/// Personalized scorer comparing a user's tag profile with item tag vectors
pub struct ContentScorer {
    dao: Arc<dyn RatingDao>,
    model: Arc<dyn TagVectorModel>,
    profile_builder: Arc<dyn UserProfileBuilder>,
}

impl ContentScorer {
    pub fn new(
        dao: Arc<dyn RatingDao>,
        model: Arc<dyn TagVectorModel>,
        profile_builder: Arc<dyn UserProfileBuilder>,
    ) -> Self {
        Self {
            dao,
            model,
            profile_builder,
        }
    }

    /// Score items against an already built profile
    pub fn score_with_profile(&self, profile: &UserProfile, items: &[ItemId]) -> ItemScores {
        let profile_norm = profile.norm();

        items
            .iter()
            .filter_map(|&item_id| {
                let item_vector = self.model.item_vector(item_id);
                cosine_with_norm(profile, profile_norm, &item_vector).map(|score| (item_id, score))
            })
            .collect()
    }
}

#[async_trait]
impl ItemScorer for ContentScorer {
    async fn score(&self, user_id: UserId, items: &[ItemId]) -> Result<ItemScores> {
        let ratings = self.dao.user_ratings(user_id).await?;

        if ratings.is_empty() {
            debug!(user_id, "No ratings for user, returning empty scores");
            return Ok(ItemScores::new());
        }

        let profile = self.profile_builder.make_user_profile(&ratings)?;
        let scores = self.score_with_profile(&profile, items);

        debug!(
            user_id,
            candidate_count = items.len(),
            scored_count = scores.len(),
            "Content scoring completed"
        );

        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::{InMemoryRatingDao, InMemoryTagVectorModel, MockRatingDao};
    use crate::error::ScoringError;
    use crate::models::{Rating, TagVector};
    use crate::services::WeightedUserProfileBuilder;

    fn tags(entries: &[(&str, f64)]) -> TagVector {
        entries.iter().map(|&(t, w)| (t, w)).collect()
    }

    fn scorer_with(dao: Arc<dyn RatingDao>) -> ContentScorer {
        let model: Arc<dyn TagVectorModel> = Arc::new(
            vec![
                (1, tags(&[("x", 1.0)])),
                (2, tags(&[("y", 1.0)])),
                (3, tags(&[("z", 0.6)])),
                (4, TagVector::new()),
                (5, tags(&[("x", 0.3), ("y", 0.9)])),
            ]
            .into_iter()
            .collect::<InMemoryTagVectorModel>(),
        );
        let builder = Arc::new(WeightedUserProfileBuilder::new(Arc::clone(&model)));
        ContentScorer::new(dao, model, builder)
    }

    fn scorer() -> ContentScorer {
        scorer_with(Arc::new(InMemoryRatingDao::new(vec![
            Rating::new(1, 1, 4.0),
            Rating::new(1, 2, 2.0),
            Rating::new(2, 1, 5.0),
        ])))
    }

    #[test]
    fn test_cosine_similarity() {
        let a = tags(&[("x", 1.0), ("y", -1.0)]);

        let same = cosine_similarity(&a, &a).unwrap();
        assert!((same - 1.0).abs() < 1e-12);

        let opposite = cosine_similarity(&a, &tags(&[("x", -2.0), ("y", 2.0)])).unwrap();
        assert!((opposite + 1.0).abs() < 1e-12);

        assert_eq!(cosine_similarity(&a, &TagVector::new()), None);
    }

    #[tokio::test]
    async fn test_scores_against_centered_profile() {
        let scores = scorer().score(1, &[1, 2]).await.unwrap();

        let expected = 1.0 / 2.0_f64.sqrt();
        assert!((scores[&1] - expected).abs() < 1e-9);
        assert!((scores[&2] + expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_disjoint_tags_score_zero() {
        let scores = scorer().score(1, &[3]).await.unwrap();
        assert_eq!(scores.get(&3), Some(&0.0));
    }

    #[tokio::test]
    async fn test_empty_item_vector_is_omitted() {
        let scores = scorer().score(1, &[4, 99, 1]).await.unwrap();

        assert!(!scores.contains_key(&4));
        assert!(!scores.contains_key(&99));
        assert!(scores.contains_key(&1));
    }

    #[tokio::test]
    async fn test_zero_profile_omits_everything() {
        // One rating centers to an all-zero profile
        let scores = scorer().score(2, &[1, 2, 3, 5]).await.unwrap();
        assert!(scores.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_gets_no_scores() {
        let scores = scorer().score(404, &[1, 2, 3]).await.unwrap();
        assert!(scores.is_empty());
    }

    #[tokio::test]
    async fn test_scores_are_bounded() {
        let scores = scorer().score(1, &[1, 2, 3, 4, 5]).await.unwrap();

        assert_eq!(scores.len(), 4);
        for score in scores.values() {
            assert!((-1.0..=1.0).contains(score));
        }
    }

    #[tokio::test]
    async fn test_huge_weights_stay_bounded() {
        let model: Arc<dyn TagVectorModel> = Arc::new(
            vec![(1, tags(&[("x", 1e160)])), (2, tags(&[("y", 1.0)]))]
                .into_iter()
                .collect::<InMemoryTagVectorModel>(),
        );
        let dao = Arc::new(InMemoryRatingDao::new(vec![
            Rating::new(1, 1, 5.0),
            Rating::new(1, 2, 1.0),
        ]));
        let builder = Arc::new(WeightedUserProfileBuilder::new(Arc::clone(&model)));
        let scorer = ContentScorer::new(dao, model, builder);

        // profile = {x: 2e160, y: -2}
        let scores = scorer.score(1, &[1, 2]).await.unwrap();

        assert_eq!(scores.len(), 2);
        assert!((scores[&1] - 1.0).abs() < 1e-9);
        assert!(scores[&2].abs() < 1e-9);
        for score in scores.values() {
            assert!((-1.0..=1.0).contains(score));
        }
    }

    #[test]
    fn test_non_finite_weights_are_omitted() {
        let a = tags(&[("x", f64::INFINITY)]);
        let b = tags(&[("x", 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), None);
    }

    #[tokio::test]
    async fn test_dao_error_propagates() {
        let mut dao = MockRatingDao::new();
        dao.expect_user_ratings()
            .times(1)
            .returning(|_| Err(ScoringError::DataAccess("ratings table unavailable".into())));

        let result = scorer_with(Arc::new(dao)).score(1, &[1]).await;

        match result {
            Err(ScoringError::DataAccess(msg)) => assert_eq!(msg, "ratings table unavailable"),
            other => panic!("expected data access error, got {:?}", other),
        }
    }
}
