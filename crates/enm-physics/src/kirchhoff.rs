//! Kirchhoff (graph Laplacian) matrix of a PPIN elastic network
//!
//! The Kirchhoff matrix Γ of a weighted undirected network:
//! - Γᵢⱼ = -kᵢⱼ for connected nodes i ≠ j (spring constant / edge weight)
//! - Γᵢᵢ = Σⱼ≠ᵢ kᵢⱼ (weighted degree, each row sums to zero)
//!
//! [`Kirchhoff`] is the only way matrices enter the engine, so every
//! downstream computation can rely on these invariants.

use enm_core::{EngineConfig, EnmError, Result};
use nalgebra::{DMatrix, DVector};

/// Validated Kirchhoff matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Kirchhoff {
    matrix: DMatrix<f64>,
}

impl Kirchhoff {
    /// Validate a dense matrix using the default symmetry tolerance.
    pub fn new(matrix: DMatrix<f64>) -> Result<Self> {
        Self::with_tolerance(matrix, EngineConfig::default().symmetry_tol)
    }

    /// Validate a dense matrix.
    ///
    /// `tol` is relative to the largest absolute entry. Row sums are allowed
    /// `tol × N` of drift to absorb accumulated rounding.
    pub fn with_tolerance(matrix: DMatrix<f64>, tol: f64) -> Result<Self> {
        let (rows, cols) = matrix.shape();
        if rows != cols {
            return Err(EnmError::invalid_input(format!(
                "Kirchhoff matrix must be square, got {}x{}",
                rows, cols
            )));
        }
        if rows == 0 {
            return Err(EnmError::invalid_input("Kirchhoff matrix is empty"));
        }
        if let Some(pos) = matrix.iter().position(|v| !v.is_finite()) {
            // Column-major storage
            let (i, j) = (pos % rows, pos / rows);
            return Err(EnmError::invalid_input(format!(
                "non-finite entry {} at ({}, {})",
                matrix[(i, j)],
                i,
                j
            )));
        }

        let n = rows;
        let scale = matrix.amax();
        let abs_tol = tol * scale;
        let row_tol = abs_tol * n as f64;

        for i in 0..n {
            if matrix[(i, i)] < -abs_tol {
                return Err(EnmError::invalid_input(format!(
                    "negative diagonal entry {} at ({}, {})",
                    matrix[(i, i)],
                    i,
                    i
                )));
            }
            for j in (i + 1)..n {
                let (a, b) = (matrix[(i, j)], matrix[(j, i)]);
                if (a - b).abs() > abs_tol {
                    return Err(EnmError::invalid_input(format!(
                        "matrix is not symmetric: ({}, {}) = {} but ({}, {}) = {}",
                        i, j, a, j, i, b
                    )));
                }
                if a > abs_tol {
                    return Err(EnmError::invalid_input(format!(
                        "positive off-diagonal entry {} at ({}, {})",
                        a, i, j
                    )));
                }
            }
            let row_sum: f64 = matrix.row(i).sum();
            if row_sum.abs() > row_tol {
                return Err(EnmError::invalid_input(format!(
                    "row {} sums to {:e}, expected 0",
                    i, row_sum
                )));
            }
        }

        Ok(Self { matrix })
    }

    /// Build from row-major data.
    pub fn from_row_slice(n: usize, data: &[f64]) -> Result<Self> {
        if data.len() != n * n {
            return Err(EnmError::invalid_input(format!(
                "expected {} entries for a {}x{} matrix, got {}",
                n * n,
                n,
                n,
                data.len()
            )));
        }
        Self::new(DMatrix::from_row_slice(n, n, data))
    }

    /// Build the Kirchhoff matrix of a weighted undirected graph
    ///
    /// Γᵢⱼ = -w for every edge (i, j, w), Γᵢᵢ = Σ w over incident edges.
    /// Repeated edges add their weights (parallel springs).
    pub fn from_weighted_edges(n: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        if n == 0 {
            return Err(EnmError::invalid_input("network has no nodes"));
        }

        let mut kirchhoff = DMatrix::zeros(n, n);
        let mut degree = vec![0.0f64; n];

        for &(i, j, w) in edges {
            if i >= n || j >= n {
                return Err(EnmError::invalid_input(format!(
                    "edge ({}, {}) out of range for {} nodes",
                    i, j, n
                )));
            }
            if i == j {
                return Err(EnmError::invalid_input(format!("self loop on node {}", i)));
            }
            if !(w.is_finite() && w > 0.0) {
                return Err(EnmError::invalid_input(format!(
                    "edge ({}, {}) has non-positive or non-finite weight {}",
                    i, j, w
                )));
            }

            kirchhoff[(i, j)] -= w;
            kirchhoff[(j, i)] -= w;
            degree[i] += w;
            degree[j] += w;
        }

        for (i, d) in degree.into_iter().enumerate() {
            kirchhoff[(i, i)] = d;
        }

        Ok(Self { matrix: kirchhoff })
    }

    /// Number of nodes
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// Underlying dense matrix
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Weighted degrees (the diagonal)
    pub fn degrees(&self) -> DVector<f64> {
        self.matrix.diagonal()
    }

    /// Graph volume Σᵢ dᵢ (twice the total edge weight)
    pub fn volume(&self) -> f64 {
        self.matrix.trace()
    }

    /// Stationary distribution of the random walk, πᵢ = dᵢ / vol
    ///
    /// `None` for an edgeless graph.
    pub fn stationary_distribution(&self) -> Option<DVector<f64>> {
        let volume = self.volume();
        if volume > 0.0 {
            Some(self.degrees() / volume)
        } else {
            None
        }
    }

    pub fn into_inner(self) -> DMatrix<f64> {
        self.matrix
    }
}
