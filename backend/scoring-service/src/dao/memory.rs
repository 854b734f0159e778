use super::{RatingDao, RatingStream, TagVectorModel};
use crate::error::Result;
use crate::models::{ItemId, Rating, TagVector, UserId};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// Rating store backed by an in-memory snapshot
#[derive(Debug, Clone)]
pub struct InMemoryRatingDao {
    ratings: Arc<[Rating]>,
    by_user: Arc<HashMap<UserId, Vec<usize>>>,
}

impl InMemoryRatingDao {
    pub fn new(ratings: Vec<Rating>) -> Self {
        let mut by_user: HashMap<UserId, Vec<usize>> = HashMap::new();
        for (idx, rating) in ratings.iter().enumerate() {
            by_user.entry(rating.user_id).or_default().push(idx);
        }

        Self {
            ratings: ratings.into(),
            by_user: Arc::new(by_user),
        }
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

impl Default for InMemoryRatingDao {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl RatingDao for InMemoryRatingDao {
    async fn user_ratings(&self, user_id: UserId) -> Result<Vec<Rating>> {
        let ratings = self
            .by_user
            .get(&user_id)
            .map(|indices| indices.iter().map(|&i| self.ratings[i].clone()).collect())
            .unwrap_or_default();

        Ok(ratings)
    }

    async fn stream_ratings(&self) -> Result<RatingStream> {
        let ratings = Arc::clone(&self.ratings);
        let stream =
            stream::iter(0..ratings.len()).map(move |i| -> Result<Rating> { Ok(ratings[i].clone()) });

        Ok(stream.boxed())
    }
}

/// Tag vectors held in memory, keyed by item
#[derive(Debug, Clone, Default)]
pub struct InMemoryTagVectorModel {
    vectors: HashMap<ItemId, TagVector>,
}

impl InMemoryTagVectorModel {
    pub fn new(vectors: HashMap<ItemId, TagVector>) -> Self {
        Self { vectors }
    }

    pub fn item_count(&self) -> usize {
        self.vectors.len()
    }
}

impl FromIterator<(ItemId, TagVector)> for InMemoryTagVectorModel {
    fn from_iter<I: IntoIterator<Item = (ItemId, TagVector)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl TagVectorModel for InMemoryTagVectorModel {
    fn item_vector(&self, item_id: ItemId) -> Cow<'_, TagVector> {
        match self.vectors.get(&item_id) {
            Some(vector) => Cow::Borrowed(vector),
            None => Cow::Owned(TagVector::new()),
        }
    }
}
