//! Row-major distance table construction and lookup.

use crate::error::MinimaxError;

/// Weights between every ordered pair of locations.
///
/// Built once from a square matrix and never modified afterwards. The
/// matrix need not be symmetric; `lookup(i, j)` is the weight of the edge
/// leaving location `i` towards location `j`.
///
/// # Examples
///
/// ```
/// use u_minimax::table::DistanceTable;
///
/// let table = DistanceTable::build(
///     vec!["A", "B", "C"],
///     &[[0, 4, 7], [4, 0, 2], [7, 2, 0]],
/// )
/// .unwrap();
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.lookup(1, 2), 2);
/// assert_eq!(table.tour_bottleneck(&[0, 1, 2, 0]), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable<L> {
    locations: Vec<L>,
    weights: Vec<u64>,
}

impl<L> DistanceTable<L> {
    /// Builds a table from location labels and a square weight matrix.
    ///
    /// `matrix[i][j]` is the weight from `locations[i]` to `locations[j]`.
    ///
    /// # Errors
    ///
    /// Returns [`MinimaxError::MalformedInput`] when the matrix row count or
    /// any row length differs from the number of locations, or when any
    /// weight is negative.
    pub fn build<R: AsRef<[i64]>>(locations: Vec<L>, matrix: &[R]) -> Result<Self, MinimaxError> {
        let n = locations.len();
        if matrix.len() != n {
            return Err(MinimaxError::MalformedInput(format!(
                "matrix has {} rows but {} locations were given",
                matrix.len(),
                n
            )));
        }

        let mut weights = Vec::with_capacity(n * n);
        for (i, row) in matrix.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(MinimaxError::MalformedInput(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (j, &w) in row.iter().enumerate() {
                let w = u64::try_from(w).map_err(|_| {
                    MinimaxError::MalformedInput(format!(
                        "negative weight {w} from location {i} to location {j}"
                    ))
                })?;
                weights.push(w);
            }
        }

        Ok(Self { locations, weights })
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the table has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Location labels in construction order.
    pub fn locations(&self) -> &[L] {
        &self.locations
    }

    /// Weight of the edge from `origin` to `destination`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn lookup(&self, origin: usize, destination: usize) -> u64 {
        let n = self.locations.len();
        assert!(
            origin < n && destination < n,
            "location index out of range: ({origin}, {destination}) with {n} locations"
        );
        self.weights[origin * n + destination]
    }

    /// Maximum edge weight along consecutive pairs of `sequence`.
    ///
    /// Returns 0 for sequences with fewer than two entries.
    pub fn tour_bottleneck(&self, sequence: &[usize]) -> u64 {
        sequence
            .windows(2)
            .map(|pair| self.lookup(pair[0], pair[1]))
            .max()
            .unwrap_or(0)
    }

    /// Maps a sequence of indices back to location labels.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn labels(&self, sequence: &[usize]) -> Vec<&L> {
        sequence.iter().map(|&i| &self.locations[i]).collect()
    }
}

impl<L: PartialEq> DistanceTable<L> {
    /// Index of the first location equal to `label`.
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.locations.iter().position(|l| l == label)
    }

    /// Weight between two locations addressed by label.
    pub fn weight_between(&self, origin: &L, destination: &L) -> Option<u64> {
        let i = self.index_of(origin)?;
        let j = self.index_of(destination)?;
        Some(self.lookup(i, j))
    }
}

impl DistanceTable<usize> {
    /// Builds a table whose labels are the indices `0..n`.
    pub fn indexed<R: AsRef<[i64]>>(matrix: &[R]) -> Result<Self, MinimaxError> {
        Self::build((0..matrix.len()).collect(), matrix)
    }
}
