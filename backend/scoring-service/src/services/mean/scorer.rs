use super::ItemMeanModel;
use crate::error::Result;
use crate::models::{ItemId, ItemScores, UserId};
use crate::services::ItemScorer;
use async_trait::async_trait;
use std::sync::Arc;

/// Scores every user's candidates with the item's mean rating
#[derive(Debug, Clone)]
pub struct MeanItemScorer {
    model: Arc<ItemMeanModel>,
}

impl MeanItemScorer {
    pub fn new(model: Arc<ItemMeanModel>) -> Self {
        Self { model }
    }

    pub fn mean_score(&self, item_id: ItemId) -> Option<f64> {
        self.model.mean_rating(item_id)
    }
}

#[async_trait]
impl ItemScorer for MeanItemScorer {
    async fn score(&self, _user_id: UserId, items: &[ItemId]) -> Result<ItemScores> {
        Ok(items
            .iter()
            .filter_map(|&item_id| self.mean_score(item_id).map(|mean| (item_id, mean)))
            .collect())
    }
}
