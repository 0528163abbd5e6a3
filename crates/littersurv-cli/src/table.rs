//! Fixed-width stdout tables for the analysis reports.

use littersurv_analysis::{
    correlation::{CorrelationOutcome, CorrelationRecord},
    group_compare::{ComparisonOutcome, GroupComparisonReport},
    matrix::ResultMatrix,
};

/// Prints a section banner for one partition or analysis phase.
pub(crate) fn print_banner(title: &str) {
    println!("\n{}", "=".repeat(72));
    println!("{title}");
    println!("{}\n", "=".repeat(72));
}

/// Prints a labeled square matrix with the given value precision.
pub(crate) fn print_matrix(title: &str, matrix: &ResultMatrix, precision: usize) {
    println!("{title}");

    let label_width = matrix
        .labels()
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(8);
    let cell_width = (precision + 4).max(12);

    print!("  {:<label_width$}", "");
    for label in matrix.labels() {
        print!(" {label:>cell_width$}");
    }
    println!();

    for (label, cells) in matrix.rows() {
        print!("  {label:<label_width$}");
        for cell in cells {
            print!(" {cell:>cell_width$.precision$}");
        }
        println!();
    }
    println!();
}

/// Prints the Mann-Whitney comparison table for one partition.
pub(crate) fn print_comparison_report(report: &GroupComparisonReport) {
    println!(
        "Transects WITH {}: {}",
        report.split_column, report.with_count
    );
    println!(
        "Transects WITHOUT {}: {}\n",
        report.split_column, report.without_count
    );

    println!(
        "  {:<20} {:>10} {:>10} {:>12} {:>14}  {}",
        "Outcome", "U Stat", "p-value", "Median(With)", "Median(W/out)", "Interpretation",
    );
    println!("  {}", "-".repeat(94));

    for record in &report.records {
        match &record.outcome {
            ComparisonOutcome::Tested {
                u_statistic,
                p_value,
                median_with,
                median_without,
                significance,
            } => {
                println!(
                    "  {:<20} {:>10.1} {:>10.4} {:>12.2} {:>14.2}  {}",
                    record.column, u_statistic, p_value, median_with, median_without, significance,
                );
            }
            ComparisonOutcome::InsufficientData => {
                println!("  {:<20} {:>10} {:>10} {:>12} {:>14}  -", record.column, "-", "-", "-", "-");
                println!("  {:<20} insufficient data, skipped", "");
            }
            ComparisonOutcome::Undefined => {
                println!("  {:<20} statistic undefined (all values tied)", record.column);
            }
            ComparisonOutcome::ColumnNotFound => {
                println!("  {:<20} column not found, skipped", record.column);
            }
        }
    }
    println!();
}

/// Prints the long-format correlation records for one partition.
pub(crate) fn print_correlation_records(records: &[CorrelationRecord]) {
    println!(
        "  {:<36} {:<24} {:<24} {:>8} {:>10} {:>5}",
        "Inquiry", "Predictor", "Outcome", "rho", "p-value", "n",
    );
    println!("  {}", "-".repeat(112));

    for record in records {
        match &record.outcome {
            CorrelationOutcome::Computed { rho, p_value, n } => {
                println!(
                    "  {:<36} {:<24} {:<24} {:>8.3} {:>10.4} {:>5}",
                    record.inquiry, record.predictor, record.outcome_column, rho, p_value, n,
                );
            }
            CorrelationOutcome::InsufficientData { n } => {
                println!(
                    "  {:<36} {:<24} {:<24} insufficient data ({n} pairs)",
                    record.inquiry, record.predictor, record.outcome_column,
                );
            }
            CorrelationOutcome::Undefined => {
                println!(
                    "  {:<36} {:<24} {:<24} undefined (constant column)",
                    record.inquiry, record.predictor, record.outcome_column,
                );
            }
            CorrelationOutcome::ColumnNotFound => {
                println!(
                    "  {:<36} {:<24} {:<24} column not found, skipped",
                    record.inquiry, record.predictor, record.outcome_column,
                );
            }
        }
    }
    println!();
}
