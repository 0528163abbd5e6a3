//! Midrank assignment for rank-based tests.
//!
//! Both the Mann-Whitney U test and Spearman correlation operate on ranks
//! with ties resolved by averaging (midranks), matching the conventional
//! `scipy.stats.rankdata(method="average")` semantics.

/// Assigns 1-based average ranks to `values`, ties averaged.
///
/// # Examples
///
/// ```
/// use littersurv_stats::rank::average_ranks;
///
/// let ranks = average_ranks(&[10.0, 20.0, 20.0, 30.0]);
/// assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order = (0..values.len()).collect::<Vec<_>>();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        // Tied block [i, j]: all members get the midrank.
        let midrank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = midrank;
        }
        i = j + 1;
    }
    ranks
}

/// Tie-correction term Σ(t³ − t) over all tied groups in `values`.
///
/// Used in the variance of the Mann-Whitney U statistic under the normal
/// approximation. Zero when there are no ties.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tie_correction(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut correction = 0.0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i;
        while j + 1 < sorted.len() && sorted[j + 1] == sorted[i] {
            j += 1;
        }
        let t = (j - i + 1) as f64;
        correction += t * t * t - t;
        i = j + 1;
    }
    correction
}
