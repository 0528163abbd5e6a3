//! Spearman rank correlation with a two-sided significance test.

use crate::rank;
use crate::special;

/// Result of a Spearman rank correlation test.
#[derive(Debug, Clone, Copy)]
pub struct SpearmanTest {
    /// The correlation coefficient, in [-1, 1].
    pub rho: f64,
    /// Two-sided p-value from the Student-t approximation with n − 2
    /// degrees of freedom.
    pub p_value: f64,
    /// Number of paired observations used.
    pub n: usize,
}

/// Computes the Spearman rank correlation of two paired samples.
///
/// Rho is the Pearson correlation of midranks (ties averaged), matching
/// `scipy.stats.spearmanr`. Significance uses the Student-t approximation
/// t = rho·√((n − 2) / (1 − rho²)); perfectly monotone inputs report a
/// p-value of 0.
///
/// Returns `None` when fewer than 3 pairs are supplied, when the lengths
/// differ, or when either side has zero rank variance (a constant column
/// has no defined correlation).
///
/// # Examples
///
/// ```
/// use littersurv_stats::spearman::spearman;
///
/// // Monotone but non-linear: rho is exactly 1.
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [1.0, 4.0, 9.0, 16.0, 25.0];
/// let test = spearman(&x, &y).unwrap();
/// assert!((test.rho - 1.0).abs() < 1e-12);
///
/// // A constant column is undefined.
/// assert!(spearman(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_none());
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn spearman(x: &[f64], y: &[f64]) -> Option<SpearmanTest> {
    let n = x.len();
    if n != y.len() || n < 3 {
        return None;
    }

    let rx = rank::average_ranks(x);
    let ry = rank::average_ranks(y);

    let nf = n as f64;
    let mean_rx = rx.iter().sum::<f64>() / nf;
    let mean_ry = ry.iter().sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in rx.iter().zip(&ry) {
        let dx = a - mean_rx;
        let dy = b - mean_ry;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    let rho = (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0);

    let p_value = if (rho.abs() - 1.0).abs() < f64::EPSILON {
        0.0
    } else {
        let t = rho * ((nf - 2.0) / (1.0 - rho * rho)).sqrt();
        special::student_t_two_sided(t, nf - 2.0)
    };

    Some(SpearmanTest { rho, p_value, n })
}
