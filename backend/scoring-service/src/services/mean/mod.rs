// ============================================
// Item Mean Models (非個性化基線)
// ============================================
//
// Non-personalized baseline: every item is scored by its mean rating.
// The providers read the full rating stream once and produce an
// immutable ItemMeanModel that callers share behind an Arc.
//
// - ItemMeanModelProvider: mean = sum / count
// - DampedItemMeanModelProvider: mean = (sum + k * mu) / (count + k),
//   where mu is the global mean and k the damping

mod damped;
mod provider;
mod scorer;

use crate::dao::RatingDao;
use crate::error::Result;
use crate::models::{ItemId, Rating};
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use damped::DampedItemMeanModelProvider;
pub use provider::ItemMeanModelProvider;
pub use scorer::MeanItemScorer;

/// Per-item mean ratings. Items that were never rated are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMeanModel {
    means: HashMap<ItemId, f64>,
    global_mean: Option<f64>,
}

impl ItemMeanModel {
    pub fn new(means: HashMap<ItemId, f64>, global_mean: Option<f64>) -> Self {
        Self { means, global_mean }
    }

    pub fn mean_rating(&self, item_id: ItemId) -> Option<f64> {
        self.means.get(&item_id).copied()
    }

    pub fn has_item(&self, item_id: ItemId) -> bool {
        self.means.contains_key(&item_id)
    }

    pub fn known_items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.means.keys().copied()
    }

    /// Mean over every rating the model was built from
    pub fn global_mean(&self) -> Option<f64> {
        self.global_mean
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct RatingTotals {
    sum: f64,
    count: u64,
}

impl RatingTotals {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Running sums collected in one pass over the rating stream
#[derive(Debug, Default)]
struct RatingAccumulator {
    items: HashMap<ItemId, RatingTotals>,
    global: RatingTotals,
}

impl RatingAccumulator {
    fn push(&mut self, rating: &Rating) {
        self.items.entry(rating.item_id).or_default().push(rating.value);
        self.global.push(rating.value);
    }

    /// Read the whole stream once. The stream is dropped before returning,
    /// on success and on error alike.
    async fn from_stream(dao: &dyn RatingDao) -> Result<Self> {
        let mut ratings = dao.stream_ratings().await?;
        let mut acc = Self::default();

        while let Some(rating) = ratings.try_next().await? {
            acc.push(&rating);
        }

        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_queries() {
        let model = ItemMeanModel::new(HashMap::from([(5, 4.0), (6, 2.5)]), Some(3.5));

        assert_eq!(model.mean_rating(5), Some(4.0));
        assert_eq!(model.mean_rating(7), None);
        assert!(model.has_item(6));
        assert!(!model.has_item(7));
        assert_eq!(model.len(), 2);
        assert_eq!(model.global_mean(), Some(3.5));

        let mut items: Vec<ItemId> = model.known_items().collect();
        items.sort();
        assert_eq!(items, vec![5, 6]);
    }

    #[test]
    fn test_accumulator_tracks_items_and_global() {
        let mut acc = RatingAccumulator::default();
        acc.push(&Rating::new(1, 5, 3.0));
        acc.push(&Rating::new(2, 5, 5.0));
        acc.push(&Rating::new(2, 6, 1.0));

        assert_eq!(acc.items[&5].count, 2);
        assert_eq!(acc.items[&5].mean(), Some(4.0));
        assert_eq!(acc.global.count, 3);
        assert_eq!(acc.global.mean(), Some(3.0));
        assert_eq!(RatingTotals::default().mean(), None);
    }
}
