//! Square, label-indexed result matrices.

use littersurv_stats::outcome::StatOutcome;

/// A square matrix of statistic outcomes indexed by indicator-column names.
///
/// Row and column order is exactly the caller-supplied label order; nothing
/// is sorted. Cells default to [`StatOutcome::Undefined`] until set.
#[derive(Debug, Clone)]
pub struct ResultMatrix {
    labels: Vec<String>,
    cells: Vec<StatOutcome>,
}

impl ResultMatrix {
    /// Creates a matrix for the given labels with all cells `Undefined`.
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        let n = labels.len();
        Self {
            labels,
            cells: vec![StatOutcome::Undefined; n * n],
        }
    }

    /// The row/column labels, in caller order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Matrix dimension.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the matrix has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Cell at (row, column).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> StatOutcome {
        self.cells[row * self.labels.len() + col]
    }

    /// Sets the cell at (row, column).
    pub fn set(&mut self, row: usize, col: usize, value: StatOutcome) {
        self.cells[row * self.labels.len() + col] = value;
    }

    /// Iterates rows as (label, cell slice).
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[StatOutcome])> {
        let n = self.labels.len();
        self.labels
            .iter()
            .enumerate()
            .map(move |(i, label)| (label.as_str(), &self.cells[i * n..(i + 1) * n]))
    }
}
