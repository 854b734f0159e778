use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoringError>;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// Failure reported by the rating store. Passed through untouched.
    #[error("Data access error: {0}")]
    DataAccess(String),

    #[error("Cannot build a user profile from an empty rating history")]
    EmptyRatingHistory,

    #[error("Damping must be a non-negative finite number, got {0}")]
    InvalidDamping(f64),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<envy::Error> for ScoringError {
    fn from(err: envy::Error) -> Self {
        ScoringError::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ScoringError::DataAccess("connection refused".to_string());
        assert_eq!(err.to_string(), "Data access error: connection refused");

        let err = ScoringError::InvalidDamping(-1.0);
        assert_eq!(
            err.to_string(),
            "Damping must be a non-negative finite number, got -1"
        );
    }
}
