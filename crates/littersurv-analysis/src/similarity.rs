//! Similarity/association matrices over binary waste indicators.
//!
//! For one partition and an ordered list of binary indicator columns this
//! builds three matching matrices: Jaccard similarity, signed Phi
//! coefficient, and the chi-square p-values backing the Phi cells. The
//! diagonal uses the self-comparison conventions (Jaccard 1.0, Phi 1.0,
//! p 0.0) without invoking the formulas, since a chi-square test of a
//! column against itself is degenerate.

use littersurv_stats::{
    contingency::{Crosstab, phi_coefficient},
    jaccard::jaccard_similarity,
    outcome::StatOutcome,
};

use crate::{matrix::ResultMatrix, partition::Partition};

/// The three matrices produced by one similarity analysis.
#[derive(Debug, Clone)]
pub struct SimilarityMatrices {
    /// Jaccard similarity per indicator pair.
    pub jaccard: ResultMatrix,
    /// Signed Phi coefficient per indicator pair.
    pub phi: ResultMatrix,
    /// Chi-square p-value per indicator pair.
    pub p_values: ResultMatrix,
    /// Requested indicator columns absent from the dataset; their matrix
    /// rows and columns are marked [`StatOutcome::InsufficientData`].
    pub missing_columns: Vec<String>,
}

/// Builds Jaccard, Phi, and p-value matrices for the given indicator
/// columns over one partition.
///
/// Column order is preserved in all three matrices. A missing column does
/// not abort the analysis: it is reported in `missing_columns` and every
/// cell involving it carries `InsufficientData`. Rows where either
/// indicator of a pair is missing are dropped from that pair's computation.
#[must_use]
pub fn similarity_matrices(partition: &Partition<'_>, indicators: &[String]) -> SimilarityMatrices {
    let labels = indicators.to_vec();
    let mut jaccard = ResultMatrix::new(labels.clone());
    let mut phi = ResultMatrix::new(labels.clone());
    let mut p_values = ResultMatrix::new(labels);

    let columns: Vec<Option<Vec<Option<f64>>>> = indicators
        .iter()
        .map(|name| partition.numeric_column(name).ok())
        .collect();
    let missing_columns = indicators
        .iter()
        .zip(&columns)
        .filter(|(_, column)| column.is_none())
        .map(|(name, _)| name.clone())
        .collect();

    for (i, first) in columns.iter().enumerate() {
        for (j, second) in columns.iter().enumerate() {
            let (Some(first), Some(second)) = (first, second) else {
                jaccard.set(i, j, StatOutcome::InsufficientData);
                phi.set(i, j, StatOutcome::InsufficientData);
                p_values.set(i, j, StatOutcome::InsufficientData);
                continue;
            };

            if i == j {
                jaccard.set(i, j, StatOutcome::Computed(1.0));
                phi.set(i, j, StatOutcome::Computed(1.0));
                p_values.set(i, j, StatOutcome::Computed(0.0));
                continue;
            }

            let pairs: Vec<(f64, f64)> = first
                .iter()
                .zip(second)
                .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
                .collect();

            let a_present: Vec<bool> = pairs.iter().map(|&(a, _)| a == 1.0).collect();
            let b_present: Vec<bool> = pairs.iter().map(|&(_, b)| b == 1.0).collect();
            jaccard.set(
                i,
                j,
                StatOutcome::Computed(jaccard_similarity(&a_present, &b_present)),
            );

            #[allow(clippy::cast_possible_truncation)]
            let tab = Crosstab::from_pairs(
                pairs
                    .iter()
                    .map(|&(a, b)| (a.round() as i64, b.round() as i64)),
            );
            let test = phi_coefficient(&tab);
            phi.set(i, j, test.phi);
            p_values.set(i, j, test.p_value);
        }
    }

    SimilarityMatrices {
        jaccard,
        phi,
        p_values,
        missing_columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dataset::Dataset, partition::partition_by};

    fn indicators(names: &[&str]) -> Vec<String> {
        names.iter().map(|&n| n.to_owned()).collect()
    }

    fn load(data: &str) -> Dataset {
        Dataset::from_reader(data.as_bytes()).unwrap()
    }

    #[test]
    fn test_diagonal_conventions() {
        let dataset = load(
            "Commune,Plastic,Paper\n\
             A,1,0\nA,0,1\nA,1,1\nA,0,0\n",
        );
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let result = similarity_matrices(&partitions[0], &indicators(&["Plastic", "Paper"]));

        assert_eq!(result.jaccard.get(0, 0), StatOutcome::Computed(1.0));
        assert_eq!(result.phi.get(1, 1), StatOutcome::Computed(1.0));
        assert_eq!(result.p_values.get(0, 0), StatOutcome::Computed(0.0));
    }

    #[test]
    fn test_jaccard_worked_example() {
        // A = [1,1,0,0], B = [1,0,0,1] => Jaccard 1/3.
        let dataset = load(
            "Commune,A,B\n\
             X,1,1\nX,1,0\nX,0,0\nX,0,1\n",
        );
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let result = similarity_matrices(&partitions[0], &indicators(&["A", "B"]));
        let value = result.jaccard.get(0, 1).computed().unwrap();
        assert!((value - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_indicator_is_undefined_not_crash() {
        // Paper never observed: Phi and p undefined, Jaccard still defined.
        let dataset = load(
            "Commune,Plastic,Paper\n\
             A,1,0\nA,0,0\nA,1,0\nA,0,0\n",
        );
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let result = similarity_matrices(&partitions[0], &indicators(&["Plastic", "Paper"]));

        assert_eq!(result.phi.get(0, 1), StatOutcome::Undefined);
        assert_eq!(result.p_values.get(0, 1), StatOutcome::Undefined);
        assert_eq!(result.jaccard.get(0, 1), StatOutcome::Computed(0.0));
    }

    #[test]
    fn test_missing_column_marks_cells() {
        let dataset = load("Commune,Plastic\nA,1\nA,0\n");
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let result = similarity_matrices(&partitions[0], &indicators(&["Plastic", "Hazardous"]));

        assert_eq!(result.missing_columns, vec!["Hazardous".to_owned()]);
        assert_eq!(result.jaccard.get(0, 1), StatOutcome::InsufficientData);
        assert_eq!(result.phi.get(1, 1), StatOutcome::InsufficientData);
        // The present column is unaffected.
        assert_eq!(result.jaccard.get(0, 0), StatOutcome::Computed(1.0));
    }

    #[test]
    fn test_missing_rows_dropped_pairwise() {
        let dataset = load(
            "Commune,A,B\n\
             X,1,1\nX,,0\nX,1,1\nX,0,0\n",
        );
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let result = similarity_matrices(&partitions[0], &indicators(&["A", "B"]));
        // Three complete pairs: (1,1), (1,1), (0,0) => Jaccard 1.0.
        assert_eq!(result.jaccard.get(0, 1), StatOutcome::Computed(1.0));
    }
}
