use super::{ItemMeanModel, RatingAccumulator};
use crate::config::Config;
use crate::dao::RatingDao;
use crate::error::{Result, ScoringError};
use std::sync::Arc;
use tracing::info;

/// Builds item means shrunk toward the global mean
///
/// damped_mean = (item_sum + k * mu) / (item_count + k)
///
/// `k` acts as a number of fake ratings at the global mean `mu`, so items
/// with few ratings sit close to `mu` and well-rated items keep their own
/// mean. With `k = 0` this is the plain mean. With no ratings at all, `mu`
/// is taken as 0.
pub struct DampedItemMeanModelProvider {
    dao: Arc<dyn RatingDao>,
    damping: f64,
}

impl DampedItemMeanModelProvider {
    pub fn new(dao: Arc<dyn RatingDao>, damping: f64) -> Result<Self> {
        if !damping.is_finite() || damping < 0.0 {
            return Err(ScoringError::InvalidDamping(damping));
        }

        Ok(Self { dao, damping })
    }

    pub fn from_config(dao: Arc<dyn RatingDao>, config: &Config) -> Result<Self> {
        Self::new(dao, config.damping)
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub async fn build(&self) -> Result<ItemMeanModel> {
        let acc = RatingAccumulator::from_stream(self.dao.as_ref()).await?;

        let mu = acc.global.mean().unwrap_or(0.0);
        let k = self.damping;

        let means = acc
            .items
            .iter()
            .map(|(&item_id, totals)| {
                let damped = (totals.sum + k * mu) / (totals.count as f64 + k);
                (item_id, damped)
            })
            .collect();
        let model = ItemMeanModel::new(means, acc.global.mean());

        info!(
            item_count = model.len(),
            rating_count = acc.global.count,
            global_mean = mu,
            damping = k,
            "Computed damped mean ratings"
        );

        Ok(model)
    }
}
