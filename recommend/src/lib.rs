//! User-based collaborative filtering.
//!
//! The crate scores items a user has not rated yet by weighting the ratings of
//! every other user with how similar that user is to the target. Similarity is
//! measured by a [`SimilarityEngine`], cosine similarity over sparse rating
//! vectors by default, and the [`Recommender`] aggregates and ranks the scores.
//!
//! ```
//! use recommend::{sample::sample_ratings, Recommender};
//!
//! let ratings = sample_ratings();
//! let recs = Recommender::new().recommend(&ratings, "alice", 5).unwrap();
//! assert!(recs.iter().any(|r| r.item == "pharmacy-management"));
//! ```

pub mod error;
pub mod recommender;
pub mod sample;
pub mod similarity;
pub mod types;

pub use error::RecommendError;
pub use recommender::Recommender;
pub use similarity::{cosine_similarity, CosineSimilarity, SimilarityEngine};
pub use types::{RatingTable, RatingVector, Recommendation};
