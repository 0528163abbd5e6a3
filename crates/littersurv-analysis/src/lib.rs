//! Dataset handling and the three transect-survey analyzers.
//!
//! This crate sits between the pure statistics in `littersurv-stats` and the
//! CLI: it loads the survey table, partitions it by the grouping column, and
//! runs each analysis mode over the partitions, producing result structures
//! ready for table printing, CSV export, and plotting.
//!
//! # Overview
//!
//! 1. **Load** ([`dataset::Dataset`]): read the transect CSV into a
//!    column-major table of `Option<f64>` cells plus the raw grouping
//!    column.
//! 2. **Partition** ([`partition::partition_by`]): split rows by grouping
//!    value, preserving first-appearance order.
//! 3. **Analyze**, one module per mode:
//!    - [`similarity`]: Jaccard / Phi / p-value matrices over binary
//!      indicator columns
//!    - [`group_compare`]: Mann-Whitney U comparisons of outcome columns
//!      between two groups formed by a binary split column
//!    - [`correlation`]: Spearman inquiries accumulated into a long-format
//!      table, plus a bulk correlation matrix
//!
//! Per-test failures (missing column, too few observations, degenerate
//! input) surface as explicit variants in the result structures; only an
//! unreadable input file or an absent grouping column is fatal.

pub mod correlation;
pub mod dataset;
pub mod group_compare;
pub mod matrix;
pub mod partition;
pub mod similarity;
