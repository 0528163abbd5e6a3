//! Contingency tables, chi-square independence testing, and the Phi
//! coefficient for binary indicator pairs.
//!
//! A [`Crosstab`] is built from paired integer-coded observations, with
//! levels discovered from the data and sorted ascending (so a well-formed
//! binary pair produces the conventional 2×2 layout with the `(0, 0)` cell
//! first). The chi-square test applies the Yates continuity correction on
//! 2×2 tables, matching `scipy.stats.chi2_contingency` defaults.

use crate::outcome::StatOutcome;
use crate::special;

/// A two-dimensional frequency table over observed category levels.
#[derive(Debug, Clone)]
pub struct Crosstab {
    row_levels: Vec<i64>,
    col_levels: Vec<i64>,
    /// Row-major counts, `row_levels.len() * col_levels.len()`.
    counts: Vec<u64>,
}

/// Result of a chi-square test of independence.
#[derive(Debug, Clone, Copy)]
pub struct ChiSquareTest {
    /// The chi-square statistic (Yates-corrected for 2×2 tables).
    pub statistic: f64,
    /// Upper-tail probability at `df` degrees of freedom.
    pub p_value: f64,
    /// Degrees of freedom, (rows − 1)(cols − 1).
    pub df: u64,
}

/// Phi coefficient together with its chi-square p-value.
#[derive(Debug, Clone, Copy)]
pub struct PhiTest {
    /// Signed phi for 2×2 tables; unsigned magnitude √(χ²/n) otherwise.
    pub phi: StatOutcome,
    /// Chi-square independence p-value for the same table.
    pub p_value: StatOutcome,
}

impl Crosstab {
    /// Builds a crosstab from paired category codes.
    ///
    /// # Examples
    ///
    /// ```
    /// use littersurv_stats::contingency::Crosstab;
    ///
    /// let pairs = [(0, 0), (0, 1), (1, 0), (1, 1), (1, 1)];
    /// let tab = Crosstab::from_pairs(pairs);
    /// assert!(tab.is_two_by_two());
    /// assert_eq!(tab.total(), 5);
    /// ```
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let pairs = pairs.into_iter().collect::<Vec<_>>();

        let mut row_levels = pairs.iter().map(|&(r, _)| r).collect::<Vec<_>>();
        row_levels.sort_unstable();
        row_levels.dedup();
        let mut col_levels = pairs.iter().map(|&(_, c)| c).collect::<Vec<_>>();
        col_levels.sort_unstable();
        col_levels.dedup();

        let mut counts = vec![0_u64; row_levels.len() * col_levels.len()];
        for (r, c) in pairs {
            let ri = row_levels.binary_search(&r).unwrap_or_else(|_| unreachable!());
            let ci = col_levels.binary_search(&c).unwrap_or_else(|_| unreachable!());
            counts[ri * col_levels.len() + ci] += 1;
        }

        Self {
            row_levels,
            col_levels,
            counts,
        }
    }

    /// Count in the cell at (row index, column index).
    #[must_use]
    pub fn count(&self, row: usize, col: usize) -> u64 {
        self.counts[row * self.col_levels.len() + col]
    }

    /// Total number of observations.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `true` when exactly two levels were observed in each dimension.
    #[must_use]
    pub fn is_two_by_two(&self) -> bool {
        self.row_levels.len() == 2 && self.col_levels.len() == 2
    }

    /// `true` when either dimension collapsed to fewer than two levels,
    /// leaving the independence test with zero degrees of freedom.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.row_levels.len() < 2 || self.col_levels.len() < 2
    }

    fn row_marginals(&self) -> Vec<u64> {
        (0..self.row_levels.len())
            .map(|r| (0..self.col_levels.len()).map(|c| self.count(r, c)).sum())
            .collect()
    }

    fn col_marginals(&self) -> Vec<u64> {
        (0..self.col_levels.len())
            .map(|c| (0..self.row_levels.len()).map(|r| self.count(r, c)).sum())
            .collect()
    }

    /// Chi-square test of independence over this table.
    ///
    /// Returns `None` for degenerate tables (a dimension with fewer than two
    /// observed levels) rather than producing a zero-degrees-of-freedom
    /// statistic. Yates continuity correction is applied to 2×2 tables.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn chi_square(&self) -> Option<ChiSquareTest> {
        if self.is_degenerate() {
            return None;
        }

        let n = self.total() as f64;
        let rows = self.row_marginals();
        let cols = self.col_marginals();
        let yates = self.is_two_by_two();

        let mut statistic = 0.0;
        for (r, &row_total) in rows.iter().enumerate() {
            for (c, &col_total) in cols.iter().enumerate() {
                let expected = row_total as f64 * col_total as f64 / n;
                let observed = self.count(r, c) as f64;
                let mut diff = (observed - expected).abs();
                if yates {
                    diff = (diff - 0.5).max(0.0);
                }
                statistic += diff * diff / expected;
            }
        }

        let df = (rows.len() as u64 - 1) * (cols.len() as u64 - 1);
        let p_value = special::chi_square_sf(statistic, df as f64);
        Some(ChiSquareTest {
            statistic,
            p_value,
            df,
        })
    }
}

/// Phi coefficient of association for a crosstab.
///
/// For a 2×2 table the signed formula is used:
/// (a·d − b·c) / √((a+b)(c+d)(a+c)(b+d)), so positive values indicate
/// co-occurrence and negative values inverse association. Tables that are
/// not 2×2 (an indicator held a value outside {0, 1}) fall back to the
/// unsigned magnitude √(χ²/n). Degenerate tables yield
/// [`StatOutcome::Undefined`] for both fields.
///
/// # Examples
///
/// ```
/// use littersurv_stats::contingency::{Crosstab, phi_coefficient};
///
/// // Perfect positive association.
/// let tab = Crosstab::from_pairs([(0, 0), (0, 0), (1, 1), (1, 1)]);
/// let test = phi_coefficient(&tab);
/// assert_eq!(test.phi.computed(), Some(1.0));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn phi_coefficient(tab: &Crosstab) -> PhiTest {
    let Some(chi) = tab.chi_square() else {
        return PhiTest {
            phi: StatOutcome::Undefined,
            p_value: StatOutcome::Undefined,
        };
    };

    let phi = if tab.is_two_by_two() {
        let a = tab.count(0, 0) as f64;
        let b = tab.count(0, 1) as f64;
        let c = tab.count(1, 0) as f64;
        let d = tab.count(1, 1) as f64;
        let denom = ((a + b) * (c + d) * (a + c) * (b + d)).sqrt();
        if denom == 0.0 {
            StatOutcome::Undefined
        } else {
            StatOutcome::Computed((a * d - b * c) / denom)
        }
    } else {
        StatOutcome::Computed((chi.statistic / tab.total() as f64).sqrt())
    };

    PhiTest {
        phi,
        p_value: StatOutcome::Computed(chi.p_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_pairs(a: &[i64], b: &[i64]) -> Vec<(i64, i64)> {
        a.iter().copied().zip(b.iter().copied()).collect()
    }

    #[test]
    fn test_crosstab_counts() {
        let tab = Crosstab::from_pairs([(0, 0), (0, 1), (1, 0), (1, 1), (1, 1)]);
        assert_eq!(tab.count(0, 0), 1);
        assert_eq!(tab.count(0, 1), 1);
        assert_eq!(tab.count(1, 0), 1);
        assert_eq!(tab.count(1, 1), 2);
        assert_eq!(tab.total(), 5);
    }

    #[test]
    fn test_phi_sign_matches_determinant() {
        // a·d > b·c: positive association.
        let pos = Crosstab::from_pairs(binary_pairs(
            &[0, 0, 0, 1, 1, 1, 0, 1],
            &[0, 0, 0, 1, 1, 1, 1, 0],
        ));
        let phi = phi_coefficient(&pos).phi.computed().unwrap();
        assert!(phi > 0.0);

        // Inverted second column: same magnitude, opposite sign.
        let neg = Crosstab::from_pairs(binary_pairs(
            &[0, 0, 0, 1, 1, 1, 0, 1],
            &[1, 1, 1, 0, 0, 0, 0, 1],
        ));
        let phi_neg = phi_coefficient(&neg).phi.computed().unwrap();
        assert!(phi_neg < 0.0);
        assert!((phi + phi_neg).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_association() {
        let tab = Crosstab::from_pairs(binary_pairs(&[0, 0, 1, 1], &[0, 0, 1, 1]));
        let test = phi_coefficient(&tab);
        assert_eq!(test.phi.computed(), Some(1.0));
    }

    #[test]
    fn test_degenerate_table_is_undefined() {
        // Second indicator never set: 2×1 table, dof would be zero.
        let tab = Crosstab::from_pairs(binary_pairs(&[0, 1, 0, 1], &[0, 0, 0, 0]));
        assert!(tab.is_degenerate());
        assert!(tab.chi_square().is_none());
        let test = phi_coefficient(&tab);
        assert_eq!(test.phi, StatOutcome::Undefined);
        assert_eq!(test.p_value, StatOutcome::Undefined);
    }

    #[test]
    fn test_non_two_by_two_fallback_is_unsigned() {
        // A stray value of 2 widens the table to 3×2.
        let tab = Crosstab::from_pairs(binary_pairs(&[0, 1, 2, 0, 1, 2], &[0, 1, 1, 0, 1, 1]));
        assert!(!tab.is_two_by_two());
        let test = phi_coefficient(&tab);
        let phi = test.phi.computed().unwrap();
        assert!(phi >= 0.0);
    }

    #[test]
    fn test_chi_square_yates_correction() {
        // 2×2 with strong association; the corrected statistic must be
        // strictly smaller than the uncorrected Σ(o−e)²/e.
        let tab = Crosstab::from_pairs(binary_pairs(
            &[0, 0, 0, 0, 1, 1, 1, 1],
            &[0, 0, 0, 1, 1, 1, 1, 0],
        ));
        let chi = tab.chi_square().unwrap();
        assert_eq!(chi.df, 1);

        let n = 8.0;
        let mut uncorrected = 0.0;
        for r in 0..2 {
            for c in 0..2 {
                let expected = 4.0 * 4.0 / n;
                let observed = tab.count(r, c) as f64;
                uncorrected += (observed - expected).powi(2) / expected;
            }
        }
        assert!(chi.statistic < uncorrected);
        assert!(chi.p_value > 0.0 && chi.p_value < 1.0);
    }
}
