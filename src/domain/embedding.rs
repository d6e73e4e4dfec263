// ============================================================
// Layer 3 - Embedding Matrix
// ============================================================
// The learned V x D table. Row i is the vector for vocabulary
// id i; row 0 is the padding vector. Stored row-major in one
// flat Vec so it can be filled straight from tensor data.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingMatrix {
    rows: usize,
    dim:  usize,
    data: Vec<f32>,
}

impl EmbeddingMatrix {
    /// Build a matrix from row-major values.
    /// Returns None when `data.len() != rows * dim`.
    pub fn from_flat(rows: usize, dim: usize, data: Vec<f32>) -> Option<Self> {
        (data.len() == rows * dim).then_some(Self { rows, dim, data })
    }

    /// Build a matrix from a list of equally sized rows.
    /// Returns None when any row has a different length.
    #[cfg(test)]
    pub fn from_rows(rows: &[Vec<f32>]) -> Option<Self> {
        let dim = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != dim) {
            return None;
        }
        let data = rows.iter().flatten().copied().collect();
        Some(Self { rows: rows.len(), dim, data })
    }

    /// Number of rows (the vocabulary size V)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Vector length D
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The vector for vocabulary id `id`, if the matrix has that row
    pub fn row(&self, id: u32) -> Option<&[f32]> {
        let i = id as usize;
        (i < self.rows).then(|| &self.data[i * self.dim..(i + 1) * self.dim])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_checks_shape() {
        assert!(EmbeddingMatrix::from_flat(2, 3, vec![0.0; 6]).is_some());
        assert!(EmbeddingMatrix::from_flat(2, 3, vec![0.0; 5]).is_none());
    }

    #[test]
    fn test_row_lookup() {
        let m = EmbeddingMatrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 2.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.dim(), 2);
        assert_eq!(m.row(1), Some(&[1.0, 2.0][..]));
        assert_eq!(m.row(2), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(EmbeddingMatrix::from_rows(&[vec![1.0], vec![1.0, 2.0]]).is_none());
    }
}
