use std::path::PathBuf;

use anyhow::Context;

use littersurv_analysis::{
    dataset::Dataset,
    partition::partition_by,
    similarity::similarity_matrices,
};

use crate::{
    plot::{ColorRamp, render_heatmap},
    report::{artifact_path, slug, write_matrix_csv},
    table::{print_banner, print_matrix},
};

use super::DEFAULT_INDICATORS;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimilarityArg {
    /// Survey CSV file
    data: PathBuf,
    /// Column whose values partition the transects
    #[arg(long, default_value = "Commune")]
    group_column: String,
    /// Comma-separated partition values to analyze (default: all, in
    /// first-appearance order)
    #[arg(long, value_delimiter = ',')]
    groups: Option<Vec<String>>,
    /// Comma-separated binary indicator columns
    #[arg(long, value_delimiter = ',', default_values = DEFAULT_INDICATORS)]
    indicators: Vec<String>,
    /// Directory for CSV and PNG artifacts
    #[arg(long, default_value = "results")]
    output_dir: PathBuf,
}

pub(crate) fn run(arg: &SimilarityArg) -> anyhow::Result<()> {
    let SimilarityArg {
        data,
        group_column,
        groups,
        indicators,
        output_dir,
    } = arg;

    let dataset = Dataset::from_csv_path(data)
        .with_context(|| format!("failed to load survey data from {}", data.display()))?;
    let partitions = partition_by(&dataset, group_column, groups.as_deref())?;

    for partition in &partitions {
        print_banner(&format!(
            "{}: co-occurrence of waste indicators ({} transects)",
            partition.label(),
            partition.len(),
        ));

        let result = similarity_matrices(partition, indicators);
        for missing in &result.missing_columns {
            println!("  warning: column {missing:?} not found, cells marked insufficient");
        }
        if !result.missing_columns.is_empty() {
            println!();
        }

        print_matrix("Jaccard similarity", &result.jaccard, 3);
        print_matrix("Phi coefficient (signed)", &result.phi, 3);
        print_matrix("Chi-square p-values", &result.p_values, 4);

        let prefix = slug(partition.label());
        for (name, matrix) in [
            ("jaccard", &result.jaccard),
            ("phi", &result.phi),
            ("p_values", &result.p_values),
        ] {
            let path = artifact_path(output_dir, &format!("{prefix}_{name}.csv"))?;
            write_matrix_csv(&path, matrix)?;
            println!("  {name} matrix saved to {}", path.display());
        }

        let jaccard_png = artifact_path(output_dir, &format!("{prefix}_jaccard_similarity.png"))?;
        render_heatmap(
            &jaccard_png,
            &format!("Jaccard Similarity - {}", partition.label()),
            &result.jaccard,
            ColorRamp::Sequential,
        )?;
        println!("  jaccard heatmap saved to {}", jaccard_png.display());

        let phi_png = artifact_path(output_dir, &format!("{prefix}_phi_coefficient.png"))?;
        render_heatmap(
            &phi_png,
            &format!("Phi Coefficient - {}", partition.label()),
            &result.phi,
            ColorRamp::Diverging,
        )?;
        println!("  phi heatmap saved to {}", phi_png.display());
    }

    Ok(())
}
