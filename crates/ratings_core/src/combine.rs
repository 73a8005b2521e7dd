//! Aggregation law for combat ratings.
//!
//! Two forces fighting together are worth more than the sum of their
//! separate ratings:
//!
//! ```text
//! combine(a, b) = a + b + 2·√(a·b) = (√a + √b)²
//! ```
//!
//! Folding any sequence therefore yields `(Σ √rᵢ)²`, independent of order
//! and grouping. The empty fold is 0.

/// Combine two non-negative ratings.
///
/// `combine(a, 0) == a` exactly.
#[must_use]
pub fn combine(a: f64, b: f64) -> f64 {
    debug_assert!(a >= 0.0 && b >= 0.0, "ratings must be non-negative");
    a + b + 2.0 * (a * b).sqrt()
}

/// Fold ratings pairwise, left to right.
#[must_use]
pub fn combine_all<I>(ratings: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    ratings.into_iter().reduce(combine).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        let scale = a.abs().max(b.abs()).max(1.0);
        assert!((a - b).abs() <= 1e-9 * scale, "{a} != {b}");
    }

    #[test]
    fn test_combine_equal_ratings_quadruples() {
        assert_eq!(combine(25.0, 25.0), 100.0);
    }

    #[test]
    fn test_combine_with_zero_is_identity() {
        assert_eq!(combine(60.0, 0.0), 60.0);
        assert_eq!(combine(0.0, 60.0), 60.0);
    }

    #[test]
    fn test_empty_fold_is_zero() {
        assert_eq!(combine_all(Vec::new()), 0.0);
    }

    #[test]
    fn test_single_fold_is_unchanged() {
        assert_eq!(combine_all([42.5]), 42.5);
    }

    #[test]
    fn test_fold_is_square_of_root_sum() {
        let ratings = [4.0, 9.0, 16.0, 60.0];
        let expected = ratings.iter().map(|r: &f64| r.sqrt()).sum::<f64>().powi(2);
        assert_close(combine_all(ratings), expected);
    }

    #[test]
    fn test_fold_exceeds_linear_sum() {
        let ratings = [10.0, 20.0, 30.0];
        assert!(combine_all(ratings) > ratings.iter().sum::<f64>());
    }
}
