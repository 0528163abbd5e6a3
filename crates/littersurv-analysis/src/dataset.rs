//! Loading the transect survey table.
//!
//! The input is one rectangular CSV file with a header row: each data row is
//! a surveyed transect, each column a named field. Cells are kept as raw
//! text; numeric access parses on demand so that empty and non-numeric
//! cells become missing values instead of load failures. Header names are
//! trimmed, since field-collected spreadsheets routinely carry stray
//! whitespace (the original survey had a literal `"Organic "` column).

use std::{io, path::Path};

/// Errors raised while loading or querying a dataset.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DatasetError {
    /// The file could not be read or parsed as rectangular CSV.
    #[display("failed to read survey table: {source}")]
    #[from]
    Csv { source: csv::Error },
    /// A named column is absent from the header row.
    #[display("column '{name}' not found in dataset")]
    ColumnNotFound { name: String },
    /// The grouping column is absent, so no partition can be formed.
    #[display("grouping column '{name}' not found in dataset")]
    GroupColumnMissing { name: String },
    /// The file parsed but contains no data rows.
    #[display("dataset contains no data rows")]
    Empty,
}

/// A loaded rectangular survey table, stored column-major.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    columns: Vec<Vec<String>>,
}

impl Dataset {
    /// Loads a dataset from a CSV file with a header row.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let reader = csv::Reader::from_path(path)?;
        Self::from_csv_reader(reader)
    }

    /// Loads a dataset from any CSV reader (used by tests with in-memory
    /// tables).
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DatasetError> {
        Self::from_csv_reader(csv::Reader::from_reader(reader))
    }

    fn from_csv_reader<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Self, DatasetError> {
        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_owned())
            .collect::<Vec<_>>();

        let mut columns = vec![Vec::new(); headers.len()];
        for record in reader.records() {
            let record = record?;
            for (column, cell) in columns.iter_mut().zip(record.iter()) {
                column.push(cell.trim().to_owned());
            }
        }

        if columns.first().is_none_or(Vec::is_empty) {
            return Err(DatasetError::Empty);
        }

        Ok(Self { headers, columns })
    }

    /// Number of data rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// The trimmed column names, in file order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Whether a column with this (trimmed) name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.headers.iter().position(|h| h == name)
    }

    /// Raw text cells of a column.
    pub fn text_column(&self, name: &str) -> Result<&[String], DatasetError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| DatasetError::ColumnNotFound {
                name: name.to_owned(),
            })?;
        Ok(&self.columns[index])
    }

    /// Numeric view of a column: empty and unparseable cells are `None`.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>, DatasetError> {
        Ok(self
            .text_column(name)?
            .iter()
            .map(|cell| parse_cell(cell))
            .collect())
    }
}

/// Parses one cell into a numeric observation. Empty cells and the usual
/// missing-data tokens become `None`.
fn parse_cell(cell: &str) -> Option<f64> {
    if cell.is_empty() || cell.eq_ignore_ascii_case("na") || cell.eq_ignore_ascii_case("nan") {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let data = "\
Commune,Organic ,Plastic,Waste Volume
Hang Kia,1,0,3.5
Hang Kia,0,1,
Mai Hich,1,1,2.0
";
        Dataset::from_reader(data.as_bytes()).unwrap()
    }

    #[test]
    fn test_headers_are_trimmed() {
        let dataset = sample();
        assert!(dataset.has_column("Organic"));
        assert!(dataset.has_column("Organic "));
        assert!(!dataset.has_column("Metal"));
    }

    #[test]
    fn test_numeric_column_with_missing() {
        let dataset = sample();
        let volume = dataset.numeric_column("Waste Volume").unwrap();
        assert_eq!(volume, vec![Some(3.5), None, Some(2.0)]);
    }

    #[test]
    fn test_text_column() {
        let dataset = sample();
        let commune = dataset.text_column("Commune").unwrap();
        assert_eq!(commune, ["Hang Kia", "Hang Kia", "Mai Hich"]);
    }

    #[test]
    fn test_column_not_found() {
        let err = sample().numeric_column("Glass/Metal").unwrap_err();
        assert!(matches!(err, DatasetError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_empty_dataset() {
        let err = Dataset::from_reader("Commune,Plastic\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_parse_cell_tokens() {
        assert_eq!(parse_cell("1"), Some(1.0));
        assert_eq!(parse_cell("2.25"), Some(2.25));
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("NA"), None);
        assert_eq!(parse_cell("n/a"), None);
    }
}
