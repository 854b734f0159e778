use crate::error::{Result, ScoringError};
use serde::Deserialize;

/// Environment prefix for every setting, e.g. `SCORING_DAMPING=5`.
pub const ENV_PREFIX: &str = "SCORING_";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Number of fictitious global-mean ratings blended into each item mean
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Minimum rating for the threshold profile builder to count an item as liked
    #[serde(default = "default_profile_threshold")]
    pub profile_threshold: f64,
    #[serde(default)]
    pub profile_strategy: ProfileStrategy,
}

/// Which user profile builder the content scorer runs with
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStrategy {
    /// Mean-centered ratings weight every tag vector
    #[default]
    Weighted,
    /// Only ratings at or above the threshold contribute, unweighted
    Threshold,
}

fn default_damping() -> f64 {
    5.0
}

fn default_profile_threshold() -> f64 {
    3.5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            profile_threshold: default_profile_threshold(),
            profile_strategy: ProfileStrategy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config: Config = envy::prefixed(ENV_PREFIX).from_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(ScoringError::InvalidDamping(self.damping));
        }

        if !self.profile_threshold.is_finite() {
            return Err(ScoringError::Configuration(format!(
                "Profile threshold must be finite, got {}",
                self.profile_threshold
            )));
        }

        Ok(())
    }
}
