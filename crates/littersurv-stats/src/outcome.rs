use std::fmt;

/// The outcome of a single statistic computation.
///
/// Statistics over survey data can fail in ways that must not abort a batch:
/// a group may be too small to test, or the input may be degenerate (zero
/// variance, an empty contingency marginal). Those cases are explicit
/// variants here rather than NaN sentinels, so downstream table and plot
/// rendering never needs ad hoc NaN checks.
///
/// # Examples
///
/// ```
/// use littersurv_stats::outcome::StatOutcome;
///
/// let ok = StatOutcome::Computed(0.42);
/// assert_eq!(ok.computed(), Some(0.42));
/// assert_eq!(StatOutcome::Undefined.computed(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatOutcome {
    /// The statistic was computed successfully.
    Computed(f64),
    /// Too few observations to run the test.
    InsufficientData,
    /// The statistic is mathematically undefined for this input.
    Undefined,
}

impl StatOutcome {
    /// Returns the computed value, or `None` for the failure variants.
    #[must_use]
    pub fn computed(self) -> Option<f64> {
        match self {
            StatOutcome::Computed(value) => Some(value),
            StatOutcome::InsufficientData | StatOutcome::Undefined => None,
        }
    }

    /// Returns `true` if the statistic was computed.
    #[must_use]
    pub fn is_computed(self) -> bool {
        matches!(self, StatOutcome::Computed(_))
    }
}

impl fmt::Display for StatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StatOutcome::Computed(value) => {
                if let Some(precision) = f.precision() {
                    format!("{value:.precision$}")
                } else {
                    value.to_string()
                }
            }
            StatOutcome::InsufficientData => "insufficient".to_owned(),
            StatOutcome::Undefined => "n/a".to_owned(),
        };
        // Width applies to the whole rendered token; precision must not
        // truncate the failure markers, so padding is done by hand.
        let width = f.width().unwrap_or(0);
        match f.align() {
            Some(fmt::Alignment::Left) => write!(f, "{text:<width$}"),
            Some(fmt::Alignment::Center) => write!(f, "{text:^width$}"),
            _ => write!(f, "{text:>width$}"),
        }
    }
}
