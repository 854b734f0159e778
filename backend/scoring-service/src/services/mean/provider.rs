use super::{ItemMeanModel, RatingAccumulator};
use crate::dao::RatingDao;
use crate::error::Result;
use std::sync::Arc;
use tracing::info;

/// Builds the plain item mean model from every rating in the store
pub struct ItemMeanModelProvider {
    dao: Arc<dyn RatingDao>,
}

impl ItemMeanModelProvider {
    /// The provider only reads from `dao` while building; the model it
    /// returns holds no reference to the store.
    pub fn new(dao: Arc<dyn RatingDao>) -> Self {
        Self { dao }
    }

    pub async fn build(&self) -> Result<ItemMeanModel> {
        let acc = RatingAccumulator::from_stream(self.dao.as_ref()).await?;

        let means = acc
            .items
            .iter()
            .filter_map(|(&item_id, totals)| totals.mean().map(|mean| (item_id, mean)))
            .collect();
        let model = ItemMeanModel::new(means, acc.global.mean());

        info!(
            item_count = model.len(),
            rating_count = acc.global.count,
            "Computed mean ratings"
        );

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::{InMemoryRatingDao, MockRatingDao};
    use crate::error::ScoringError;
    use crate::models::Rating;
    use futures::stream::{self, StreamExt};

    #[tokio::test]
    async fn test_plain_mean() {
        let dao = InMemoryRatingDao::new(vec![
            Rating::new(1, 5, 3.0),
            Rating::new(2, 5, 5.0),
            Rating::new(2, 8, 2.0),
        ]);

        let model = ItemMeanModelProvider::new(Arc::new(dao)).build().await.unwrap();

        assert_eq!(model.mean_rating(5), Some(4.0));
        assert_eq!(model.mean_rating(8), Some(2.0));
        assert_eq!(model.mean_rating(9), None);
        assert_eq!(model.global_mean(), Some(10.0 / 3.0));
    }

    #[tokio::test]
    async fn test_no_ratings_gives_empty_model() {
        let model = ItemMeanModelProvider::new(Arc::new(InMemoryRatingDao::default()))
            .build()
            .await
            .unwrap();

        assert!(model.is_empty());
        assert_eq!(model.global_mean(), None);
    }

    #[tokio::test]
    async fn test_stream_opened_once() {
        let mut dao = MockRatingDao::new();
        dao.expect_stream_ratings().times(1).returning(|| {
            Ok(stream::iter(vec![Ok(Rating::new(1, 1, 4.0))]).boxed())
        });

        let model = ItemMeanModelProvider::new(Arc::new(dao)).build().await.unwrap();
        assert_eq!(model.mean_rating(1), Some(4.0));
    }

    #[tokio::test]
    async fn test_stream_error_fails_build() {
        let mut dao = MockRatingDao::new();
        dao.expect_stream_ratings().returning(|| {
            Ok(stream::iter(vec![
                Ok(Rating::new(1, 1, 4.0)),
                Err(ScoringError::DataAccess("cursor reset".into())),
            ])
            .boxed())
        });

        let result = ItemMeanModelProvider::new(Arc::new(dao)).build().await;
        assert!(matches!(result, Err(ScoringError::DataAccess(_))));
    }
}
