//! Spearman correlation inquiries and the bulk correlation matrix.
//!
//! An inquiry names a predictor column, a set of outcome columns, and a
//! human-readable label (e.g. "Bin Density → Waste Volume"). Each
//! (partition, inquiry, outcome) combination yields one long-format record;
//! records accumulate across partitions into a single result table because
//! test dimensions vary inquiry to inquiry and do not form a matrix.

use serde::{Deserialize, Serialize};

use littersurv_stats::{outcome::StatOutcome, spearman::spearman};

use crate::{matrix::ResultMatrix, partition::Partition};

/// A named predictor → outcomes correlation inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    /// Report label, e.g. "Bin Density → Waste Volume".
    pub label: String,
    /// Predictor column name.
    pub predictor: String,
    /// Outcome column names, each tested independently.
    pub outcomes: Vec<String>,
}

/// Outcome of one (predictor, outcome) correlation test.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrelationOutcome {
    /// Rho and its two-sided p-value over `n` complete pairs.
    Computed { rho: f64, p_value: f64, n: usize },
    /// Fewer than 3 complete pairs.
    InsufficientData { n: usize },
    /// Zero rank variance on either side.
    Undefined,
    /// Predictor or outcome column absent from the dataset.
    ColumnNotFound,
}

/// One row of the long-format correlation result table.
#[derive(Debug, Clone)]
pub struct CorrelationRecord {
    /// Partition label (commune).
    pub group: String,
    /// Inquiry label.
    pub inquiry: String,
    /// Predictor column.
    pub predictor: String,
    /// Outcome column.
    pub outcome_column: String,
    pub outcome: CorrelationOutcome,
}

/// Runs every inquiry against one partition, appending one record per
/// (inquiry, outcome column) in caller order.
///
/// Rows with a missing value on either side of a pair are dropped before
/// correlating. Column or data problems are per-record, never fatal.
#[must_use]
pub fn run_inquiries(partition: &Partition<'_>, inquiries: &[Inquiry]) -> Vec<CorrelationRecord> {
    let mut records = Vec::new();
    for inquiry in inquiries {
        for outcome_column in &inquiry.outcomes {
            let outcome = correlate(partition, &inquiry.predictor, outcome_column);
            records.push(CorrelationRecord {
                group: partition.label().to_owned(),
                inquiry: inquiry.label.clone(),
                predictor: inquiry.predictor.clone(),
                outcome_column: outcome_column.clone(),
                outcome,
            });
        }
    }
    records
}

fn correlate(partition: &Partition<'_>, predictor: &str, outcome: &str) -> CorrelationOutcome {
    let Ok(pairs) = partition.paired_columns(predictor, outcome) else {
        return CorrelationOutcome::ColumnNotFound;
    };
    if pairs.len() < 3 {
        return CorrelationOutcome::InsufficientData { n: pairs.len() };
    }
    let xs: Vec<f64> = pairs.iter().map(|&(x, _)| x).collect();
    let ys: Vec<f64> = pairs.iter().map(|&(_, y)| y).collect();
    match spearman(&xs, &ys) {
        Some(test) => CorrelationOutcome::Computed {
            rho: test.rho,
            p_value: test.p_value,
            n: test.n,
        },
        None => CorrelationOutcome::Undefined,
    }
}

/// Pairwise Spearman correlation matrix over `columns` for one partition.
///
/// Column order is preserved; the diagonal is 1.0 by self-correlation.
/// Missing columns mark their rows/columns `InsufficientData`; degenerate
/// pairs are `Undefined`. Missing values are dropped pairwise, so each cell
/// may use a different subset of transects.
#[must_use]
pub fn correlation_matrix(partition: &Partition<'_>, columns: &[String]) -> ResultMatrix {
    let mut matrix = ResultMatrix::new(columns.to_vec());
    for (i, first) in columns.iter().enumerate() {
        for (j, second) in columns.iter().enumerate() {
            if !partition.has_column(first) || !partition.has_column(second) {
                matrix.set(i, j, StatOutcome::InsufficientData);
                continue;
            }
            if i == j {
                matrix.set(i, j, StatOutcome::Computed(1.0));
                continue;
            }
            let cell = match correlate(partition, first, second) {
                CorrelationOutcome::Computed { rho, .. } => StatOutcome::Computed(rho),
                CorrelationOutcome::InsufficientData { .. }
                | CorrelationOutcome::ColumnNotFound => StatOutcome::InsufficientData,
                CorrelationOutcome::Undefined => StatOutcome::Undefined,
            };
            matrix.set(i, j, cell);
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dataset::Dataset, partition::partition_by};

    fn load(data: &str) -> Dataset {
        Dataset::from_reader(data.as_bytes()).unwrap()
    }

    fn single_inquiry(predictor: &str, outcomes: &[&str]) -> Vec<Inquiry> {
        vec![Inquiry {
            label: format!("{predictor} → outcomes"),
            predictor: predictor.to_owned(),
            outcomes: outcomes.iter().map(|&o| o.to_owned()).collect(),
        }]
    }

    #[test]
    fn test_monotone_inquiry() {
        let dataset = load(
            "Commune,Bins,Volume\n\
             A,1,9\nA,2,7\nA,3,5\nA,4,3\nA,5,1\n",
        );
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let records = run_inquiries(&partitions[0], &single_inquiry("Bins", &["Volume"]));

        assert_eq!(records.len(), 1);
        let CorrelationOutcome::Computed { rho, p_value, n } = records[0].outcome else {
            panic!("expected a computed correlation");
        };
        assert!((rho + 1.0).abs() < 1e-12);
        assert_eq!(p_value, 0.0);
        assert_eq!(n, 5);
    }

    #[test]
    fn test_records_accumulate_across_outcomes() {
        let dataset = load(
            "Commune,Density,Volume,Diversity\n\
             A,1,2,1\nA,2,3,2\nA,3,5,2\nA,4,4,3\n",
        );
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let records = run_inquiries(
            &partitions[0],
            &single_inquiry("Density", &["Volume", "Diversity", "Disposition"]),
        );
        assert_eq!(records.len(), 3);
        assert!(matches!(
            records[0].outcome,
            CorrelationOutcome::Computed { .. }
        ));
        assert_eq!(records[2].outcome, CorrelationOutcome::ColumnNotFound);
    }

    #[test]
    fn test_insufficient_pairs() {
        // Only two complete pairs once missing rows are dropped.
        let dataset = load(
            "Commune,X,Y\n\
             A,1,2\nA,2,\nA,3,4\nA,,5\n",
        );
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let records = run_inquiries(&partitions[0], &single_inquiry("X", &["Y"]));
        assert_eq!(
            records[0].outcome,
            CorrelationOutcome::InsufficientData { n: 2 }
        );
    }

    #[test]
    fn test_matrix_diagonal_and_symmetry() {
        let dataset = load(
            "Commune,X,Y,Z\n\
             A,1,4,1\nA,2,3,1\nA,3,2,1\nA,4,1,1\n",
        );
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let columns = vec!["X".to_owned(), "Y".to_owned(), "Z".to_owned()];
        let matrix = correlation_matrix(&partitions[0], &columns);

        assert_eq!(matrix.get(0, 0), StatOutcome::Computed(1.0));
        assert_eq!(matrix.get(2, 2), StatOutcome::Computed(1.0));
        // X and Y are perfectly inversely related.
        assert_eq!(matrix.get(0, 1).computed(), Some(-1.0));
        assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
        // Z is constant: correlation with it is undefined.
        assert_eq!(matrix.get(0, 2), StatOutcome::Undefined);
    }
}
