//! Categorical interpretation of p-values.

use std::fmt;

/// Significance label for a p-value, on the conventional reporting ladder.
///
/// Thresholds are strict upper bounds: a p-value equal to a boundary falls
/// into the next, less significant bucket (p = 0.05 is marginal, not
/// significant).
///
/// # Examples
///
/// ```
/// use littersurv_stats::significance::Significance;
///
/// assert_eq!(Significance::from_p_value(0.0005), Significance::ExtremelySignificant);
/// assert_eq!(Significance::from_p_value(0.049), Significance::Significant);
/// assert_eq!(Significance::from_p_value(0.05), Significance::MarginallySignificant);
/// assert_eq!(Significance::from_p_value(0.2), Significance::NotSignificant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Significance {
    /// p < 0.001
    ExtremelySignificant,
    /// p < 0.01
    HighlySignificant,
    /// p < 0.05
    Significant,
    /// p < 0.10
    MarginallySignificant,
    /// p ≥ 0.10
    NotSignificant,
}

impl Significance {
    /// Maps a p-value to its label.
    #[must_use]
    pub fn from_p_value(p: f64) -> Self {
        if p < 0.001 {
            Significance::ExtremelySignificant
        } else if p < 0.01 {
            Significance::HighlySignificant
        } else if p < 0.05 {
            Significance::Significant
        } else if p < 0.10 {
            Significance::MarginallySignificant
        } else {
            Significance::NotSignificant
        }
    }

    /// The human-readable label used in reports and CSV artifacts.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Significance::ExtremelySignificant => "Extremely significant",
            Significance::HighlySignificant => "Highly significant",
            Significance::Significant => "Significant",
            Significance::MarginallySignificant => "Marginally significant",
            Significance::NotSignificant => "Not significant",
        }
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_exclusivity() {
        // Equality at a boundary takes the less significant bucket.
        assert_eq!(
            Significance::from_p_value(0.001),
            Significance::HighlySignificant
        );
        assert_eq!(Significance::from_p_value(0.01), Significance::Significant);
        assert_eq!(
            Significance::from_p_value(0.05),
            Significance::MarginallySignificant
        );
        assert_eq!(
            Significance::from_p_value(0.10),
            Significance::NotSignificant
        );
    }

    #[test]
    fn test_interior_values() {
        assert_eq!(
            Significance::from_p_value(0.0001),
            Significance::ExtremelySignificant
        );
        assert_eq!(
            Significance::from_p_value(0.005),
            Significance::HighlySignificant
        );
        assert_eq!(Significance::from_p_value(0.049), Significance::Significant);
        assert_eq!(
            Significance::from_p_value(0.07),
            Significance::MarginallySignificant
        );
        assert_eq!(Significance::from_p_value(0.5), Significance::NotSignificant);
    }
}
