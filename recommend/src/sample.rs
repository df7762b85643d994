//! Small in-memory rating table used by the demo binary and tests.

use crate::types::{RatingTable, RatingVector};

fn vector(entries: &[(&str, f64)]) -> RatingVector {
    entries
        .iter()
        .map(|(item, rating)| (item.to_string(), *rating))
        .collect()
}

/// Ratings for four users over a handful of apps.
pub fn sample_ratings() -> RatingTable {
    let mut ratings = RatingTable::new();
    ratings.insert(
        "alice".into(),
        vector(&[
            ("maths-puzzle-app", 5.0),
            ("secure-file-storage", 3.0),
            ("e-learning-app", 4.0),
        ]),
    );
    ratings.insert(
        "bob".into(),
        vector(&[
            ("maths-puzzle-app", 4.0),
            ("pharmacy-management", 5.0),
            ("secure-file-storage", 2.5),
        ]),
    );
    ratings.insert(
        "carol".into(),
        vector(&[
            ("secure-file-storage", 4.5),
            ("e-learning-app", 4.0),
            ("pharmacy-management", 3.0),
        ]),
    );
    ratings.insert(
        "dave".into(),
        vector(&[
            ("maths-puzzle-app", 2.0),
            ("e-learning-app", 3.5),
            ("new-item-x", 5.0),
        ]),
    );
    ratings
}
