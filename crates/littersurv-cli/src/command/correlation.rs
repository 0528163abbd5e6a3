use std::path::PathBuf;

use anyhow::Context;

use littersurv_analysis::{
    correlation::{CorrelationOutcome, correlation_matrix, run_inquiries},
    dataset::Dataset,
    partition::partition_by,
};

use crate::{
    plot::{ColorRamp, render_heatmap, render_scatter},
    report::{artifact_path, slug, write_correlation_csv},
    schema::InquiryConfig,
    table::{print_banner, print_correlation_records},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CorrelationArg {
    /// Survey CSV file
    data: PathBuf,
    /// Column whose values partition the transects
    #[arg(long, default_value = "Commune")]
    group_column: String,
    /// Comma-separated partition values to analyze (default: all, in
    /// first-appearance order)
    #[arg(long, value_delimiter = ',')]
    groups: Option<Vec<String>>,
    /// JSON inquiry configuration (default: the built-in survey inquiries)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory for CSV and PNG artifacts
    #[arg(long, default_value = "results")]
    output_dir: PathBuf,
}

pub(crate) fn run(arg: &CorrelationArg) -> anyhow::Result<()> {
    let CorrelationArg {
        data,
        group_column,
        groups,
        config,
        output_dir,
    } = arg;

    let config = match config {
        Some(path) => InquiryConfig::load(path)?,
        None => InquiryConfig::survey_default(),
    };

    let dataset = Dataset::from_csv_path(data)
        .with_context(|| format!("failed to load survey data from {}", data.display()))?;
    let partitions = partition_by(&dataset, group_column, groups.as_deref())?;

    let mut all_records = Vec::new();
    for partition in &partitions {
        print_banner(&format!(
            "{}: Spearman correlation inquiries ({} transects)",
            partition.label(),
            partition.len(),
        ));

        let records = run_inquiries(partition, &config.inquiries);
        print_correlation_records(&records);

        let prefix = slug(partition.label());
        for record in &records {
            let CorrelationOutcome::Computed { .. } = record.outcome else {
                continue;
            };
            let points = partition.paired_columns(&record.predictor, &record.outcome_column)?;
            let path = artifact_path(
                output_dir,
                &format!(
                    "{prefix}_scatter_{}_vs_{}.png",
                    slug(&record.predictor),
                    slug(&record.outcome_column),
                ),
            )?;
            render_scatter(
                &path,
                &format!(
                    "{} vs {} - {}",
                    record.predictor,
                    record.outcome_column,
                    partition.label(),
                ),
                &record.predictor,
                &record.outcome_column,
                &points,
            )?;
            println!("  scatter saved to {}", path.display());
        }

        let matrix = correlation_matrix(partition, &config.heatmap_columns);
        let heatmap_path = artifact_path(output_dir, &format!("{prefix}_correlation_heatmap.png"))?;
        render_heatmap(
            &heatmap_path,
            &format!("Spearman Correlation - {}", partition.label()),
            &matrix,
            ColorRamp::Diverging,
        )?;
        println!("  correlation heatmap saved to {}", heatmap_path.display());

        all_records.extend(records);
    }

    let csv_path = artifact_path(output_dir, "spearman_results_all_groups.csv")?;
    write_correlation_csv(&csv_path, &all_records)?;
    println!("\nAll correlation results saved to {}", csv_path.display());

    Ok(())
}
