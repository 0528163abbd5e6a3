//! CSV artifact writing.
//!
//! One file per (partition, statistic) with deterministic names, so reruns
//! overwrite instead of accumulating.

use std::{fs, path::{Path, PathBuf}};

use anyhow::Context;

use littersurv_analysis::{
    correlation::{CorrelationOutcome, CorrelationRecord},
    group_compare::{ComparisonOutcome, GroupComparisonReport},
    matrix::ResultMatrix,
};
use littersurv_stats::outcome::StatOutcome;

/// Turns a partition label or column name into a filename fragment.
pub(crate) fn slug(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Creates the output directory and returns `dir/name`.
pub(crate) fn artifact_path(dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    Ok(dir.join(name))
}

fn outcome_field(outcome: StatOutcome) -> String {
    match outcome {
        StatOutcome::Computed(value) => format!("{value}"),
        StatOutcome::InsufficientData => "insufficient".to_owned(),
        StatOutcome::Undefined => "n/a".to_owned(),
    }
}

/// Writes a labeled square matrix, row labels in the first column.
pub(crate) fn write_matrix_csv(path: &Path, matrix: &ResultMatrix) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut header = vec![String::new()];
    header.extend(matrix.labels().iter().cloned());
    writer.write_record(&header)?;

    for (label, cells) in matrix.rows() {
        let mut row = vec![label.to_owned()];
        row.extend(cells.iter().map(|&cell| outcome_field(cell)));
        writer.write_record(&row)?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Writes the Mann-Whitney comparison table for one partition/split.
pub(crate) fn write_comparison_csv(
    path: &Path,
    report: &GroupComparisonReport,
) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record([
        "outcome",
        "u_statistic",
        "p_value",
        "median_with",
        "median_without",
        "interpretation",
    ])?;

    for record in &report.records {
        let row: [String; 6] = match &record.outcome {
            ComparisonOutcome::Tested {
                u_statistic,
                p_value,
                median_with,
                median_without,
                significance,
            } => [
                record.column.clone(),
                format!("{u_statistic}"),
                format!("{p_value}"),
                format!("{median_with}"),
                format!("{median_without}"),
                significance.label().to_owned(),
            ],
            ComparisonOutcome::InsufficientData => {
                [record.column.clone(), String::new(), String::new(), String::new(), String::new(), "Insufficient data".to_owned()]
            }
            ComparisonOutcome::Undefined => {
                [record.column.clone(), String::new(), String::new(), String::new(), String::new(), "Undefined".to_owned()]
            }
            ComparisonOutcome::ColumnNotFound => {
                [record.column.clone(), String::new(), String::new(), String::new(), String::new(), "Column not found".to_owned()]
            }
        };
        writer.write_record(&row)?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Writes the accumulated long-format correlation table.
pub(crate) fn write_correlation_csv(
    path: &Path,
    records: &[CorrelationRecord],
) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record([
        "group",
        "inquiry",
        "predictor",
        "outcome",
        "spearman_rho",
        "p_value",
        "n",
        "status",
    ])?;

    for record in records {
        let (rho, p_value, n, status) = match &record.outcome {
            CorrelationOutcome::Computed { rho, p_value, n } => {
                (format!("{rho}"), format!("{p_value}"), n.to_string(), "ok")
            }
            CorrelationOutcome::InsufficientData { n } => {
                (String::new(), String::new(), n.to_string(), "insufficient data")
            }
            CorrelationOutcome::Undefined => {
                (String::new(), String::new(), String::new(), "undefined")
            }
            CorrelationOutcome::ColumnNotFound => {
                (String::new(), String::new(), String::new(), "column not found")
            }
        };
        writer.write_record([
            record.group.as_str(),
            record.inquiry.as_str(),
            record.predictor.as_str(),
            record.outcome_column.as_str(),
            &rho,
            &p_value,
            &n,
            status,
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_replaces_separators() {
        assert_eq!(slug("Hang Kia"), "Hang_Kia");
        assert_eq!(slug("Glass/Metal"), "Glass_Metal");
        assert_eq!(slug("Organic "), "Organic");
    }
}
