//! Item scoring for recommendations.
//!
//! Two strategies:
//! - **Content-based**: a user's tag profile, built from their mean-centered
//!   ratings, is compared to each item's tag vector by cosine similarity
//!   ([`ContentScorer`]).
//! - **Non-personalized baseline**: items are scored by their mean rating,
//!   optionally damped toward the global mean ([`ItemMeanModelProvider`],
//!   [`DampedItemMeanModelProvider`], [`MeanItemScorer`]).
//!
//! Rating storage and tag-vector precomputation are supplied by the caller
//! through [`RatingDao`] and [`TagVectorModel`].

pub mod config;
pub mod dao;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use dao::{InMemoryRatingDao, InMemoryTagVectorModel, RatingDao, RatingStream, TagVectorModel};
pub use error::{Result, ScoringError};
pub use models::{ItemId, ItemScores, Rating, SparseVector, TagVector, UserId, UserProfile};
pub use services::{
    ContentScorer, DampedItemMeanModelProvider, ItemMeanModel, ItemMeanModelProvider, ItemScorer,
    MeanItemScorer, ThresholdUserProfileBuilder, UserProfileBuilder, WeightedUserProfileBuilder,
};
