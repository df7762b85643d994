//! Neighbor-weighted scoring and ranking of candidate items.

use crate::error::RecommendError;
use crate::similarity::{CosineSimilarity, SimilarityEngine};
use crate::types::{RatingTable, RatingVector, Recommendation};
use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Recommends unrated items to a user from the ratings of similar users.
#[derive(Clone, Debug, Default)]
pub struct Recommender<S: SimilarityEngine = CosineSimilarity> {
    engine: S,
}

impl Recommender<CosineSimilarity> {
    /// Create a recommender using cosine similarity.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SimilarityEngine> Recommender<S> {
    /// Create a recommender using a custom similarity measure.
    pub fn with_engine(engine: S) -> Self {
        Self { engine }
    }

    /// Rank up to `top_n` items `target_user` has not rated.
    ///
    /// A negative `top_n` yields an empty list. Fails with
    /// [`RecommendError::UnknownUser`] when the user is missing from `ratings`
    /// and with [`RecommendError::InvalidRating`] when any rating is not finite.
    pub fn recommend(
        &self,
        ratings: &RatingTable,
        target_user: &str,
        top_n: i64,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let target = target_vector(ratings, target_user)?;
        validate(ratings)?;

        let sims = self.similarities_to(ratings, target_user, target);
        let candidates = unrated_by(ratings, target_user, target);
        debug!(
            "scoring {} candidates for {} against {} neighbors",
            candidates.len(),
            target_user,
            sims.len()
        );

        let scores: Vec<Recommendation> = candidates
            .into_iter()
            .map(|item| {
                let score = predict_score(ratings, target_user, &item, &sims);
                trace!("{item}: {score}");
                Recommendation::new(item, score)
            })
            .collect();
        Ok(rank(scores, top_n))
    }

    /// Similarity between `target_user` and every other user in the table.
    pub fn neighbor_similarities(
        &self,
        ratings: &RatingTable,
        target_user: &str,
    ) -> Result<BTreeMap<String, f64>, RecommendError> {
        let target = target_vector(ratings, target_user)?;
        Ok(self.similarities_to(ratings, target_user, target))
    }

    fn similarities_to(
        &self,
        ratings: &RatingTable,
        target_user: &str,
        target: &RatingVector,
    ) -> BTreeMap<String, f64> {
        #[cfg(feature = "parallel")]
        let sims = ratings
            .par_iter()
            .filter(|(user, _)| user.as_str() != target_user)
            .map(|(user, vector)| (user.clone(), self.engine.similarity(target, vector)))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let sims = neighbors(ratings, target_user)
            .map(|(user, vector)| (user.clone(), self.engine.similarity(target, vector)))
            .collect();

        sims
    }
}

fn target_vector<'a>(
    ratings: &'a RatingTable,
    target_user: &str,
) -> Result<&'a RatingVector, RecommendError> {
    ratings
        .get(target_user)
        .ok_or_else(|| RecommendError::UnknownUser(target_user.to_string()))
}

fn neighbors<'a>(
    ratings: &'a RatingTable,
    target_user: &'a str,
) -> impl Iterator<Item = (&'a String, &'a RatingVector)> + 'a {
    ratings
        .iter()
        .filter(move |(user, _)| user.as_str() != target_user)
}

fn validate(ratings: &RatingTable) -> Result<(), RecommendError> {
    for (user, vector) in ratings {
        if let Some((item, value)) = vector.iter().find(|(_, r)| !r.is_finite()) {
            return Err(RecommendError::InvalidRating {
                user: user.clone(),
                item: item.clone(),
                value: *value,
            });
        }
    }
    Ok(())
}

/// Items rated by at least one other user but not by `target_user`.
///
/// Candidacy does not depend on similarity: an item rated only by a
/// dissimilar neighbor is still a candidate.
pub fn candidate_items(
    ratings: &RatingTable,
    target_user: &str,
) -> Result<BTreeSet<String>, RecommendError> {
    let target = target_vector(ratings, target_user)?;
    Ok(unrated_by(ratings, target_user, target))
}

fn unrated_by(
    ratings: &RatingTable,
    target_user: &str,
    target: &RatingVector,
) -> BTreeSet<String> {
    neighbors(ratings, target_user)
        .flat_map(|(_, vector)| vector.keys())
        .filter(|item| !target.contains_key(*item))
        .cloned()
        .collect()
}

/// Similarity-weighted average of the neighbors' ratings for `item`.
///
/// Neighbors missing from `sims` count as similarity `0.0`. When every
/// contributing neighbor has zero similarity the score is `0.0`.
pub fn predict_score(
    ratings: &RatingTable,
    target_user: &str,
    item: &str,
    sims: &BTreeMap<String, f64>,
) -> f64 {
    let (numerator, denominator) = neighbors(ratings, target_user)
        .filter_map(|(user, vector)| vector.get(item).map(|rating| (user, rating)))
        .fold((0.0, 0.0), |(num, den), (user, rating)| {
            let sim = sims.get(user).copied().unwrap_or(0.0);
            (num + sim * rating, den + sim.abs())
        });
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Sort by score descending, then item ascending, and keep the first `top_n`.
pub fn rank(mut scores: Vec<Recommendation>, top_n: i64) -> Vec<Recommendation> {
    scores.sort_by(|a, b| match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.item.cmp(&b.item),
        other => other,
    });
    scores.truncate(usize::try_from(top_n.max(0)).unwrap_or(usize::MAX));
    scores
}
