//! Mann-Whitney U rank-sum test for two independent samples.

use crate::rank;
use crate::special;

/// Result of a two-sided Mann-Whitney U test.
#[derive(Debug, Clone, Copy)]
pub struct MannWhitneyTest {
    /// The U statistic for the first sample.
    pub u_statistic: f64,
    /// Two-sided p-value from the tie-corrected normal approximation.
    pub p_value: f64,
}

/// Runs a two-sided Mann-Whitney U test comparing the distributions of two
/// independent samples.
///
/// Uses the normal approximation with midranks, tie correction, and a 0.5
/// continuity correction. The two-sided p-value is computed from the larger
/// of U₁ and U₂ and is therefore invariant to which sample is passed first;
/// the reported `u_statistic` is always U for the first sample.
///
/// Returns `None` when either sample is empty or when every observation is
/// tied (the approximation's variance collapses to zero and the statistic is
/// undefined).
///
/// # Examples
///
/// ```
/// use littersurv_stats::mann_whitney::mann_whitney_u;
///
/// let a = [3.0, 4.0, 2.0, 6.0, 2.0, 5.0];
/// let b = [9.0, 7.0, 5.0, 10.0, 6.0, 8.0];
/// let test = mann_whitney_u(&a, &b).unwrap();
/// assert!(test.p_value < 0.05);
///
/// // All observations identical: undefined, not a crash.
/// assert!(mann_whitney_u(&[1.0, 1.0], &[1.0, 1.0]).is_none());
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mann_whitney_u(first: &[f64], second: &[f64]) -> Option<MannWhitneyTest> {
    let n1 = first.len();
    let n2 = second.len();
    if n1 == 0 || n2 == 0 {
        return None;
    }

    let mut combined = Vec::with_capacity(n1 + n2);
    combined.extend_from_slice(first);
    combined.extend_from_slice(second);
    let ranks = rank::average_ranks(&combined);

    let rank_sum_first = ranks[..n1].iter().sum::<f64>();
    let n1f = n1 as f64;
    let n2f = n2 as f64;
    let u1 = rank_sum_first - n1f * (n1f + 1.0) / 2.0;
    let u2 = n1f * n2f - u1;

    let n = n1f + n2f;
    let tie_term = rank::tie_correction(&combined) / (n * (n - 1.0));
    let variance = n1f * n2f / 12.0 * ((n + 1.0) - tie_term);
    if variance <= 0.0 {
        return None;
    }

    let mean = n1f * n2f / 2.0;
    let z = (u1.max(u2) - mean - 0.5) / variance.sqrt();
    let p_value = (2.0 * special::normal_sf(z)).clamp(0.0, 1.0);

    Some(MannWhitneyTest {
        u_statistic: u1,
        p_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sided_symmetry() {
        let a = [1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
        let b = [0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
        let ab = mann_whitney_u(&a, &b).unwrap();
        let ba = mann_whitney_u(&b, &a).unwrap();
        assert!((ab.p_value - ba.p_value).abs() < 1e-12);
        // U1 + U2 = n1 * n2
        assert!((ab.u_statistic + ba.u_statistic - 36.0).abs() < 1e-12);
    }

    #[test]
    fn test_separated_samples() {
        let low = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let high = [11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0];
        let test = mann_whitney_u(&low, &high).unwrap();
        // Complete separation: U for the low sample is zero.
        assert_eq!(test.u_statistic, 0.0);
        assert!(test.p_value < 0.001);
    }

    #[test]
    fn test_identical_samples_not_significant() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let test = mann_whitney_u(&a, &a).unwrap();
        assert!(test.p_value > 0.5);
    }

    #[test]
    fn test_all_tied_is_none() {
        assert!(mann_whitney_u(&[2.0; 4], &[2.0; 3]).is_none());
    }

    #[test]
    fn test_empty_group_is_none() {
        assert!(mann_whitney_u(&[], &[1.0, 2.0]).is_none());
    }

    #[test]
    fn test_against_scipy_reference() {
        // scipy.stats.mannwhitneyu([1,2,3,4], [5,6,7,8],
        //     alternative='two-sided', method='asymptotic')
        // => U = 0.0, p ≈ 0.030392
        let test = mann_whitney_u(&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0]).unwrap();
        assert_eq!(test.u_statistic, 0.0);
        assert!((test.p_value - 0.030_392).abs() < 2e-4);
    }
}
