//! Partitioning the dataset by the grouping column.

use crate::dataset::{Dataset, DatasetError};

/// The rows of one grouping value (one commune), borrowed from the dataset.
///
/// Created fresh per analysis run; all column accessors are restricted to
/// the partition's rows.
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    label: String,
    dataset: &'a Dataset,
    rows: Vec<usize>,
}

impl Partition<'_> {
    /// The grouping value this partition was formed from.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of transects in this partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the partition holds no transects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the underlying dataset has a column with this name.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.dataset.has_column(name)
    }

    /// Numeric view of a column restricted to this partition's rows.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>, DatasetError> {
        let full = self.dataset.numeric_column(name)?;
        Ok(self.rows.iter().map(|&row| full[row]).collect())
    }

    /// Complete-case pairs of two numeric columns: rows where either value
    /// is missing are dropped.
    pub fn paired_columns(&self, x: &str, y: &str) -> Result<Vec<(f64, f64)>, DatasetError> {
        let xs = self.numeric_column(x)?;
        let ys = self.numeric_column(y)?;
        Ok(xs
            .into_iter()
            .zip(ys)
            .filter_map(|(a, b)| Some((a?, b?)))
            .collect())
    }
}

/// Splits the dataset into partitions by the values of `group_column`.
///
/// With `groups = None`, one partition is formed per distinct grouping value
/// in first-appearance order. An explicit `groups` list selects and orders
/// the partitions instead; a requested group with no matching rows yields an
/// empty partition rather than an error, so a typo surfaces as a visible
/// zero-transect section in the report.
///
/// An absent grouping column is fatal: no partition can be formed.
pub fn partition_by<'a>(
    dataset: &'a Dataset,
    group_column: &str,
    groups: Option<&[String]>,
) -> Result<Vec<Partition<'a>>, DatasetError> {
    let values = dataset
        .text_column(group_column)
        .map_err(|_| DatasetError::GroupColumnMissing {
            name: group_column.to_owned(),
        })?;

    let labels: Vec<String> = match groups {
        Some(groups) => groups.to_vec(),
        None => {
            let mut seen = Vec::new();
            for value in values {
                if !seen.contains(value) {
                    seen.push(value.clone());
                }
            }
            seen
        }
    };

    Ok(labels
        .into_iter()
        .map(|label| {
            let rows = values
                .iter()
                .enumerate()
                .filter(|(_, value)| **value == label)
                .map(|(row, _)| row)
                .collect();
            Partition {
                label,
                dataset,
                rows,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let data = "\
Commune,Plastic,Waste Volume
Mai Hich,1,2.0
Hang Kia,0,3.5
Mai Hich,1,1.0
Hang Kia,1,
";
        Dataset::from_reader(data.as_bytes()).unwrap()
    }

    #[test]
    fn test_first_appearance_order() {
        let dataset = sample();
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let labels: Vec<_> = partitions.iter().map(Partition::label).collect();
        assert_eq!(labels, ["Mai Hich", "Hang Kia"]);
        assert_eq!(partitions[0].len(), 2);
        assert_eq!(partitions[1].len(), 2);
    }

    #[test]
    fn test_explicit_group_list() {
        let dataset = sample();
        let groups = vec!["Hang Kia".to_owned(), "Nowhere".to_owned()];
        let partitions = partition_by(&dataset, "Commune", Some(&groups)).unwrap();
        assert_eq!(partitions[0].label(), "Hang Kia");
        assert_eq!(partitions[0].len(), 2);
        assert!(partitions[1].is_empty());
    }

    #[test]
    fn test_partition_column_view() {
        let dataset = sample();
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let volume = partitions[1].numeric_column("Waste Volume").unwrap();
        assert_eq!(volume, vec![Some(3.5), None]);
    }

    #[test]
    fn test_paired_columns_drop_missing() {
        let dataset = sample();
        let partitions = partition_by(&dataset, "Commune", None).unwrap();
        let pairs = partitions[1].paired_columns("Plastic", "Waste Volume").unwrap();
        assert_eq!(pairs, vec![(0.0, 3.5)]);
    }

    #[test]
    fn test_missing_group_column_is_fatal() {
        let dataset = sample();
        let err = partition_by(&dataset, "District", None).unwrap_err();
        assert!(matches!(err, DatasetError::GroupColumnMissing { .. }));
    }
}
