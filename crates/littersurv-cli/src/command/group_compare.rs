use std::path::PathBuf;

use anyhow::Context;

use littersurv_analysis::{
    dataset::Dataset,
    group_compare::compare_groups,
    partition::partition_by,
};

use crate::{
    report::{artifact_path, slug, write_comparison_csv},
    table::{print_banner, print_comparison_report},
};

use super::DEFAULT_INDICATORS;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GroupCompareArg {
    /// Survey CSV file
    data: PathBuf,
    /// Column whose values partition the transects
    #[arg(long, default_value = "Commune")]
    group_column: String,
    /// Comma-separated partition values to analyze (default: all, in
    /// first-appearance order)
    #[arg(long, value_delimiter = ',')]
    groups: Option<Vec<String>>,
    /// Binary columns splitting each partition into with/without groups
    #[arg(long, value_delimiter = ',', default_values = ["Open Dumping", "Burning Evidence"])]
    split_columns: Vec<String>,
    /// Numeric outcome columns compared between the two groups
    #[arg(long, value_delimiter = ',', default_values = DEFAULT_INDICATORS)]
    outcomes: Vec<String>,
    /// Directory for CSV artifacts
    #[arg(long, default_value = "results")]
    output_dir: PathBuf,
}

pub(crate) fn run(arg: &GroupCompareArg) -> anyhow::Result<()> {
    let GroupCompareArg {
        data,
        group_column,
        groups,
        split_columns,
        outcomes,
        output_dir,
    } = arg;

    let dataset = Dataset::from_csv_path(data)
        .with_context(|| format!("failed to load survey data from {}", data.display()))?;
    let partitions = partition_by(&dataset, group_column, groups.as_deref())?;

    for split_column in split_columns {
        for partition in &partitions {
            print_banner(&format!(
                "{}: outcomes split by {} ({} transects)",
                partition.label(),
                split_column,
                partition.len(),
            ));

            let report = match compare_groups(partition, split_column, outcomes) {
                Ok(report) => report,
                Err(err) => {
                    // A missing split column skips this section but must
                    // not abort the remaining splits.
                    println!("  warning: {err}, section skipped\n");
                    continue;
                }
            };

            print_comparison_report(&report);

            let path = artifact_path(
                output_dir,
                &format!("{}_{}_mann_whitney.csv", slug(partition.label()), slug(split_column)),
            )?;
            write_comparison_csv(&path, &report)?;
            println!("  comparison table saved to {}\n", path.display());
        }
    }

    Ok(())
}
