//! Two-group Mann-Whitney comparisons of outcome columns.
//!
//! A binary split column (e.g. `Open Dumping`) divides a partition into the
//! transects with and without the condition; each outcome column is then
//! tested independently with a two-sided Mann-Whitney U test. Per-column
//! problems are recorded, never fatal: the batch always processes every
//! remaining outcome column.

use littersurv_stats::{descriptive, mann_whitney::mann_whitney_u, significance::Significance};

use crate::{
    dataset::DatasetError,
    partition::Partition,
};

/// Outcome of testing a single column between the two groups.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonOutcome {
    /// The test ran; medians are per group.
    Tested {
        u_statistic: f64,
        p_value: f64,
        median_with: f64,
        median_without: f64,
        significance: Significance,
    },
    /// A group had fewer than 2 non-missing observations.
    InsufficientData,
    /// The rank test was degenerate (every observation tied).
    Undefined,
    /// The outcome column is absent from the dataset.
    ColumnNotFound,
}

/// One row of the comparison report.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRecord {
    /// The outcome column tested.
    pub column: String,
    pub outcome: ComparisonOutcome,
}

/// Results of one split-column analysis over one partition.
#[derive(Debug, Clone)]
pub struct GroupComparisonReport {
    /// Partition label (commune).
    pub group: String,
    /// The binary column that formed the two groups.
    pub split_column: String,
    /// Transects with the condition (split value 1).
    pub with_count: usize,
    /// Transects without the condition (split value 0).
    pub without_count: usize,
    /// One record per tested outcome column, in caller order.
    pub records: Vec<ComparisonRecord>,
}

/// Runs Mann-Whitney comparisons of every outcome column between the two
/// groups formed by `split_column` (1 vs 0) within one partition.
///
/// Outcome columns identical to the split column are skipped entirely: a
/// column cannot be tested against its own grouping. Rows whose split value
/// is missing or not 0/1 belong to neither group. An absent split column is
/// an error (the whole analysis for this partition is impossible); absent
/// outcome columns produce per-record [`ComparisonOutcome::ColumnNotFound`].
///
/// Each group must contribute at least 2 non-missing observations per
/// outcome column, otherwise that column records
/// [`ComparisonOutcome::InsufficientData`] and processing continues.
pub fn compare_groups(
    partition: &Partition<'_>,
    split_column: &str,
    outcome_columns: &[String],
) -> Result<GroupComparisonReport, DatasetError> {
    let split = partition.numeric_column(split_column)?;
    let with_rows: Vec<usize> = split
        .iter()
        .enumerate()
        .filter(|(_, v)| **v == Some(1.0))
        .map(|(i, _)| i)
        .collect();
    let without_rows: Vec<usize> = split
        .iter()
        .enumerate()
        .filter(|(_, v)| **v == Some(0.0))
        .map(|(i, _)| i)
        .collect();

    let mut records = Vec::new();
    for column in outcome_columns {
        if column.trim() == split_column.trim() {
            continue;
        }

        let Ok(values) = partition.numeric_column(column) else {
            records.push(ComparisonRecord {
                column: column.clone(),
                outcome: ComparisonOutcome::ColumnNotFound,
            });
            continue;
        };

        let with_group: Vec<f64> = with_rows.iter().filter_map(|&i| values[i]).collect();
        let without_group: Vec<f64> = without_rows.iter().filter_map(|&i| values[i]).collect();

        if with_group.len() < 2 || without_group.len() < 2 {
            records.push(ComparisonRecord {
                column: column.clone(),
                outcome: ComparisonOutcome::InsufficientData,
            });
            continue;
        }

        let outcome = match mann_whitney_u(&with_group, &without_group) {
            Some(test) => ComparisonOutcome::Tested {
                u_statistic: test.u_statistic,
                p_value: test.p_value,
                // Groups are non-empty here, medians exist.
                median_with: descriptive::median(with_group.iter().copied()).unwrap_or(f64::NAN),
                median_without: descriptive::median(without_group.iter().copied())
                    .unwrap_or(f64::NAN),
                significance: Significance::from_p_value(test.p_value),
            },
            None => ComparisonOutcome::Undefined,
        };
        records.push(ComparisonRecord {
            column: column.clone(),
            outcome,
        });
    }

    Ok(GroupComparisonReport {
        group: partition.label().to_owned(),
        split_column: split_column.to_owned(),
        with_count: with_rows.len(),
        without_count: without_rows.len(),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dataset::Dataset, partition::partition_by};

    fn outcomes(names: &[&str]) -> Vec<String> {
        names.iter().map(|&n| n.to_owned()).collect()
    }

    fn load(data: &str) -> Dataset {
        Dataset::from_reader(data.as_bytes()).unwrap()
    }

    #[test]
    fn test_basic_comparison() {
        let dataset = load(
            "Commune,Open Dumping,Plastic\n\
             A,1,1\nA,1,1\nA,1,0\nA,0,0\nA,0,0\nA,0,1\n",
        );
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let report = compare_groups(&partitions[0], "Open Dumping", &outcomes(&["Plastic"]))
            .unwrap();

        assert_eq!(report.with_count, 3);
        assert_eq!(report.without_count, 3);
        assert_eq!(report.records.len(), 1);
        let ComparisonOutcome::Tested {
            median_with,
            median_without,
            p_value,
            ..
        } = &report.records[0].outcome
        else {
            panic!("expected a tested outcome");
        };
        assert_eq!(*median_with, 1.0);
        assert_eq!(*median_without, 0.0);
        assert!(*p_value > 0.0 && *p_value <= 1.0);
    }

    #[test]
    fn test_split_column_excluded_from_outcomes() {
        let dataset = load(
            "Commune,Burning Evidence,Plastic\n\
             A,1,1\nA,1,0\nA,0,1\nA,0,0\n",
        );
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let report = compare_groups(
            &partitions[0],
            "Burning Evidence",
            &outcomes(&["Plastic", "Burning Evidence"]),
        )
        .unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].column, "Plastic");
    }

    #[test]
    fn test_insufficient_data_skip_continues() {
        // Waste Volume has one valid value per group; Plastic is complete.
        let dataset = load(
            "Commune,Open Dumping,Waste Volume,Plastic\n\
             A,1,2.0,1\nA,1,,1\nA,1,,0\nA,0,1.0,0\nA,0,,1\nA,0,,0\n",
        );
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let report = compare_groups(
            &partitions[0],
            "Open Dumping",
            &outcomes(&["Waste Volume", "Plastic"]),
        )
        .unwrap();

        assert_eq!(
            report.records[0].outcome,
            ComparisonOutcome::InsufficientData
        );
        assert!(matches!(
            report.records[1].outcome,
            ComparisonOutcome::Tested { .. }
        ));
    }

    #[test]
    fn test_missing_outcome_column_recorded() {
        let dataset = load(
            "Commune,Open Dumping,Plastic\n\
             A,1,1\nA,1,0\nA,0,1\nA,0,0\n",
        );
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let report = compare_groups(
            &partitions[0],
            "Open Dumping",
            &outcomes(&["Hazardous", "Plastic"]),
        )
        .unwrap();
        assert_eq!(report.records[0].outcome, ComparisonOutcome::ColumnNotFound);
        assert_eq!(report.records[1].column, "Plastic");
    }

    #[test]
    fn test_missing_split_column_is_error() {
        let dataset = load("Commune,Plastic\nA,1\nA,0\n");
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let err =
            compare_groups(&partitions[0], "Open Dumping", &outcomes(&["Plastic"])).unwrap_err();
        assert!(matches!(err, DatasetError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_all_tied_outcome_is_undefined() {
        let dataset = load(
            "Commune,Open Dumping,Paper\n\
             A,1,0\nA,1,0\nA,0,0\nA,0,0\n",
        );
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let report =
            compare_groups(&partitions[0], "Open Dumping", &outcomes(&["Paper"])).unwrap();
        assert_eq!(report.records[0].outcome, ComparisonOutcome::Undefined);
    }
}
