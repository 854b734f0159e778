// ============================================
// Data access seams
// ============================================
//
// Rating storage and tag-vector precomputation live outside this crate.
// Scorers and model providers only see these traits, so any backing store
// (Postgres, ClickHouse, a file snapshot) can be plugged in by the caller.

mod memory;

use crate::error::Result;
use crate::models::{ItemId, Rating, TagVector, UserId};
use async_trait::async_trait;
use futures::stream::BoxStream;
use std::borrow::Cow;

pub use memory::{InMemoryRatingDao, InMemoryTagVectorModel};

/// Single-pass stream over every rating in the store.
///
/// Dropping the stream releases whatever the store holds open for it.
pub type RatingStream = BoxStream<'static, Result<Rating>>;

/// Rating store operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingDao: Send + Sync {
    /// Ratings of one user, in store order. Unknown users yield an empty list.
    async fn user_ratings(&self, user_id: UserId) -> Result<Vec<Rating>>;

    /// Open a stream over all ratings
    async fn stream_ratings(&self) -> Result<RatingStream>;
}

/// Precomputed item tag vectors
pub trait TagVectorModel: Send + Sync {
    /// Tag vector for an item. Untagged or unknown items get an empty vector.
    fn item_vector(&self, item_id: ItemId) -> Cow<'_, TagVector>;
}
