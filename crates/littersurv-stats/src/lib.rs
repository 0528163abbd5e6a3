//! Statistical routines for the littersurv survey-analysis toolkit.
//!
//! This crate provides the closed-form statistics used by the analysis
//! pipeline, with no external dependencies:
//!
//! - **Jaccard similarity**: Intersection-over-union for binary indicators
//! - **Contingency analysis**: Crosstabs, chi-square independence tests, and
//!   the signed Phi coefficient
//! - **Mann-Whitney U**: Non-parametric two-sample rank-sum test
//! - **Spearman correlation**: Rank correlation with a two-sided p-value
//! - **Significance labels**: Categorical interpretation of p-values
//! - **Descriptive statistics**: Medians and related summaries
//!
//! # Modules
//!
//! - [`jaccard`]: Jaccard similarity for paired binary observations
//! - [`contingency`]: Crosstabs, chi-square tests, and the Phi coefficient
//! - [`mann_whitney`]: Two-sample rank-sum testing
//! - [`spearman`]: Rank correlation
//! - [`significance`]: p-value interpretation thresholds
//! - [`descriptive`]: Central-tendency summaries
//! - [`rank`]: Midrank assignment with tie handling
//! - [`outcome`]: The tagged [`StatOutcome`](outcome::StatOutcome) result type
//! - [`special`]: Special functions backing the distribution tails
//!
//! # Examples
//!
//! ## Jaccard similarity
//!
//! ```
//! use littersurv_stats::jaccard::jaccard_similarity;
//!
//! let a = [true, true, false, false];
//! let b = [true, false, false, true];
//! // Both present in one row, either present in three.
//! assert!((jaccard_similarity(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
//! ```
//!
//! ## Mann-Whitney U test
//!
//! ```
//! use littersurv_stats::mann_whitney::mann_whitney_u;
//!
//! let with_dumping = [1.0, 1.0, 1.0, 0.0];
//! let without = [0.0, 0.0, 1.0, 0.0];
//! let test = mann_whitney_u(&with_dumping, &without).unwrap();
//! assert!(test.p_value > 0.0 && test.p_value <= 1.0);
//! ```
//!
//! ## Interpreting a p-value
//!
//! ```
//! use littersurv_stats::significance::Significance;
//!
//! assert_eq!(Significance::from_p_value(0.049), Significance::Significant);
//! assert_eq!(Significance::from_p_value(0.05), Significance::MarginallySignificant);
//! ```

pub mod contingency;
pub mod descriptive;
pub mod jaccard;
pub mod mann_whitney;
pub mod outcome;
pub mod rank;
pub mod significance;
pub mod spearman;
pub mod special;
