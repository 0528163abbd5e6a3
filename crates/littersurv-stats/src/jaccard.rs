//! Jaccard similarity for paired binary indicator observations.

/// Computes the Jaccard similarity of two paired binary vectors.
///
/// Counts rows where both indicators are present divided by rows where at
/// least one is present. Defined as 0.0 when no row has either indicator
/// set, so sparse partitions never divide by zero.
///
/// Observations are paired positionally; callers drop rows with missing
/// values before calling. Extra trailing elements on the longer side are
/// ignored.
///
/// # Examples
///
/// ```
/// use littersurv_stats::jaccard::jaccard_similarity;
///
/// let a = [true, true, false, false];
/// let b = [true, false, false, true];
/// assert!((jaccard_similarity(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
///
/// // Empty union is 0, not a divide-by-zero.
/// assert_eq!(jaccard_similarity(&[false, false], &[false, false]), 0.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn jaccard_similarity(a: &[bool], b: &[bool]) -> f64 {
    let mut both = 0_u64;
    let mut either = 0_u64;
    for (&x, &y) in a.iter().zip(b) {
        if x && y {
            both += 1;
        }
        if x || y {
            either += 1;
        }
    }
    if either == 0 {
        return 0.0;
    }
    both as f64 / either as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors() {
        let a = [true, false, true, true];
        assert_eq!(jaccard_similarity(&a, &a), 1.0);
    }

    #[test]
    fn test_disjoint_vectors() {
        let a = [true, true, false, false];
        let b = [false, false, true, true];
        assert_eq!(jaccard_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_worked_example() {
        // A = [1,1,0,0], B = [1,0,0,1]: both at row 1, either at rows 1,2,4.
        let a = [true, true, false, false];
        let b = [true, false, false, true];
        assert!((jaccard_similarity(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_union() {
        assert_eq!(jaccard_similarity(&[false; 5], &[false; 5]), 0.0);
        assert_eq!(jaccard_similarity(&[], &[]), 0.0);
    }
}
