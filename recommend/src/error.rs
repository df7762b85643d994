use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecommendError {
    #[error("unknown user: {0}")]
    UnknownUser(String),
    #[error("invalid rating {value} for item {item} by user {user}")]
    InvalidRating {
        user: String,
        item: String,
        value: f64,
    },
}

impl RecommendError {
    /// Whether the error was caused by a target user missing from the table.
    pub fn is_unknown_user(&self) -> bool {
        matches!(self, RecommendError::UnknownUser(_))
    }
}
