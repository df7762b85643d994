use crate::types::RatingVector;

/// Measures how alike two users' rating vectors are.
pub trait SimilarityEngine: Send + Sync {
    /// Return the similarity between `a` and `b`. Either vector may be empty.
    fn similarity(&self, a: &RatingVector, b: &RatingVector) -> f64;
}

/// Cosine of the angle between two sparse rating vectors.
#[derive(Clone, Copy, Debug, Default)]
pub struct CosineSimilarity;

impl SimilarityEngine for CosineSimilarity {
    fn similarity(&self, a: &RatingVector, b: &RatingVector) -> f64 {
        cosine_similarity(a, b)
    }
}

/// Largest absolute rating in `v`; zero only when every entry is zero.
fn max_abs(v: &RatingVector) -> f64 {
    v.values().fold(0.0_f64, |m, r| m.max(r.abs()))
}

/// L2 norm of `v` after dividing every entry by `scale`.
fn scaled_norm(v: &RatingVector, scale: f64) -> f64 {
    v.values()
        .map(|r| {
            let x = r / scale;
            x * x
        })
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity of two sparse rating vectors.
///
/// The dot product only covers items rated in both vectors while each norm
/// covers every entry of its own vector. Returns `0.0` when either vector is
/// empty or has a zero norm.
///
/// Each vector is divided by its largest absolute rating before squaring, so
/// very large or very small finite ratings neither overflow nor underflow.
pub fn cosine_similarity(a: &RatingVector, b: &RatingVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let scale_a = max_abs(a);
    let scale_b = max_abs(b);
    if scale_a == 0.0 || scale_b == 0.0 {
        return 0.0;
    }
    let norm_a = scaled_norm(a, scale_a);
    let norm_b = scaled_norm(b, scale_b);
    // Both maps iterate in key order, so the shared items are summed in the
    // same order whichever vector comes first.
    let (small, small_scale, large, large_scale) = if a.len() <= b.len() {
        (a, scale_a, b, scale_b)
    } else {
        (b, scale_b, a, scale_a)
    };
    let dot: f64 = small
        .iter()
        .filter_map(|(item, rs)| {
            large
                .get(item)
                .map(|rl| (rs / small_scale) * (rl / large_scale))
        })
        .sum();
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(entries: &[(&str, f64)]) -> RatingVector {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn empty_vectors_have_no_similarity() {
        let a = vector(&[("x", 1.0)]);
        assert_eq!(cosine_similarity(&a, &RatingVector::new()), 0.0);
        assert_eq!(cosine_similarity(&RatingVector::new(), &a), 0.0);
        assert_eq!(cosine_similarity(&RatingVector::new(), &RatingVector::new()), 0.0);
    }

    #[test]
    fn zero_norm_has_no_similarity() {
        let zeros = vector(&[("x", 0.0), ("y", 0.0)]);
        let a = vector(&[("x", 3.0), ("y", 4.0)]);
        assert_eq!(cosine_similarity(&zeros, &a), 0.0);
        assert_eq!(cosine_similarity(&a, &zeros), 0.0);
    }

    #[test]
    fn disjoint_vectors_are_orthogonal() {
        let a = vector(&[("x", 3.0)]);
        let b = vector(&[("y", 4.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn norms_cover_whole_vectors() {
        // dot = 3*4 = 12; |a| = 5, |b| = 4
        let a = vector(&[("x", 3.0), ("y", 4.0)]);
        let b = vector(&[("x", 4.0)]);
        assert!((cosine_similarity(&a, &b) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn opposite_ratings_are_negative() {
        let a = vector(&[("x", 1.0), ("y", 2.0)]);
        let b = vector(&[("x", -1.0), ("y", -2.0)]);
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn huge_ratings_are_self_similar() {
        let a = vector(&[("x", 1e200)]);
        assert_eq!(cosine_similarity(&a, &a), 1.0);
        let b = vector(&[("x", 1e200), ("y", 3e200)]);
        assert!((cosine_similarity(&b, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tiny_ratings_are_self_similar() {
        let a = vector(&[("x", 1e-200)]);
        assert_eq!(cosine_similarity(&a, &a), 1.0);
        let b = vector(&[("x", 1e-200), ("y", 4e-200)]);
        assert!((cosine_similarity(&b, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn scale_does_not_change_similarity() {
        // same direction as norms_cover_whole_vectors, multiplied by 1e300
        let a = vector(&[("x", 3e300), ("y", 4e300)]);
        let b = vector(&[("x", 4e-300)]);
        assert!((cosine_similarity(&a, &b) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn engine_delegates_to_cosine() {
        let a = vector(&[("x", 1.0), ("y", 2.0)]);
        let b = vector(&[("x", 2.0), ("z", 2.0)]);
        assert_eq!(
            CosineSimilarity.similarity(&a, &b),
            cosine_similarity(&a, &b)
        );
    }
}
