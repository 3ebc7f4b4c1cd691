//! Moore-Penrose pseudoinverse of the Kirchhoff matrix
//!
//! The Kirchhoff matrix of a connected network has rank N-1: its single zero
//! mode is the uniform vector (rigid-body translation in GNM terms). The
//! pseudoinverse is reconstructed from the filtered eigenspectrum:
//!
//! ```text
//! Γ⁺ = Σ_{|λₖ| > ε} (1/λₖ) uₖ uₖᵀ,     ε = rcond × max|λ|
//! ```
//!
//! Eigenvalues at or below ε are taken as exactly zero. More than one of them
//! means the network falls apart into components and random-walk times
//! between components do not exist.

use enm_core::{EngineConfig, EnmError, Result};
use nalgebra::{DMatrix, SymmetricEigen};
use serde::{Deserialize, Serialize};

use crate::connectivity::connected_components;
use crate::kirchhoff::Kirchhoff;

/// Pseudoinverse of a symmetric matrix plus the spectrum it was built from
#[derive(Debug, Clone)]
pub struct SymmetricPinv {
    /// The pseudoinverse (exactly symmetric)
    pub matrix: DMatrix<f64>,
    /// Eigenvalues of the input in ascending order
    pub eigenvalues: Vec<f64>,
    /// Zero threshold ε
    pub threshold: f64,
    /// Number of eigenvalues with |λ| ≤ ε
    pub null_dimension: usize,
    /// Smallest |λ| above ε, if any
    pub smallest_retained: Option<f64>,
}

/// Implicit QR sweeps allowed per mode before the eigensolver gives up
const MAX_SWEEPS_PER_MODE: usize = 100;

/// Pseudoinverse of an arbitrary symmetric matrix via eigendecomposition.
///
/// Only the lower triangle of `matrix` is read. Non-square or non-finite
/// input is rejected up front; the eigensolver runs with a bounded
/// iteration count and reports non-convergence as `NumericalInstability`.
pub fn symmetric_pinv(matrix: &DMatrix<f64>, rcond: f64) -> Result<SymmetricPinv> {
    let (n, cols) = matrix.shape();
    if n != cols {
        return Err(EnmError::invalid_input(format!(
            "pseudoinverse needs a square matrix, got {}x{}",
            n, cols
        )));
    }
    if matrix.iter().any(|v| !v.is_finite()) {
        return Err(EnmError::invalid_input("pseudoinverse input has non-finite entries"));
    }
    if n <= 1 {
        return Ok(scalar_pinv(matrix, rcond));
    }

    let max_iterations = MAX_SWEEPS_PER_MODE * n;
    let eigen = SymmetricEigen::try_new(matrix.clone(), f64::EPSILON, max_iterations).ok_or_else(|| {
        EnmError::numerical(format!(
            "symmetric eigensolver did not converge within {} iterations (N={})",
            max_iterations, n
        ))
    })?;

    let max_abs = eigen.eigenvalues.amax();
    let threshold = rcond * max_abs;

    // U × diag(1/λ) on retained modes, zero columns for the null space
    let mut scaled = eigen.eigenvectors.clone();
    let mut null_dimension = 0;
    let mut smallest_retained: Option<f64> = None;

    for (k, &lambda) in eigen.eigenvalues.iter().enumerate() {
        if lambda.abs() <= threshold {
            null_dimension += 1;
            scaled.column_mut(k).fill(0.0);
        } else {
            scaled.column_mut(k).scale_mut(1.0 / lambda);
            let magnitude = lambda.abs();
            smallest_retained = Some(smallest_retained.map_or(magnitude, |s| s.min(magnitude)));
        }
    }

    let product = &scaled * eigen.eigenvectors.transpose();
    let pinv = DMatrix::from_fn(n, n, |i, j| 0.5 * (product[(i, j)] + product[(j, i)]));

    // nalgebra does not order eigenvalues
    let mut eigenvalues: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
    eigenvalues.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(SymmetricPinv {
        matrix: pinv,
        eigenvalues,
        threshold,
        null_dimension,
        smallest_retained,
    })
}

// 0×0 and 1×1 inputs: the single entry is the eigenvalue
fn scalar_pinv(matrix: &DMatrix<f64>, rcond: f64) -> SymmetricPinv {
    let n = matrix.nrows();
    let eigenvalues: Vec<f64> = (0..n).map(|i| matrix[(i, i)]).collect();
    let threshold = rcond * eigenvalues.iter().fold(0.0f64, |m, v| m.max(v.abs()));

    let retained: Vec<f64> = eigenvalues.iter().copied().filter(|v| v.abs() > threshold).collect();
    let pinv = DMatrix::from_fn(n, n, |_, _| match retained.first() {
        Some(lambda) => 1.0 / lambda,
        None => 0.0,
    });

    SymmetricPinv {
        matrix: pinv,
        null_dimension: n - retained.len(),
        smallest_retained: retained.first().map(|v| v.abs()),
        eigenvalues,
        threshold,
    }
}

/// Spectrum statistics reported alongside hitting/commute times
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumSummary {
    /// Number of nodes
    pub n_nodes: usize,
    /// Largest eigenvalue of Γ
    pub max_eigenvalue: f64,
    /// Zero threshold ε
    pub threshold: f64,
    /// Dimension of the numerical null space (1 for a connected network)
    pub null_dimension: usize,
    /// Algebraic connectivity (smallest non-zero eigenvalue), if N > 1
    pub algebraic_connectivity: Option<f64>,
}

/// Pseudoinverse Γ⁺ of a validated Kirchhoff matrix
#[derive(Debug, Clone)]
pub struct Pseudoinverse {
    matrix: DMatrix<f64>,
    summary: SpectrumSummary,
}

impl Pseudoinverse {
    /// Compute Γ⁺ for a connected network.
    ///
    /// # Errors
    /// - `DisconnectedGraph` if more than one eigenvalue falls below ε
    /// - `NumericalInstability` if no eigenvalue does, or (with `strict`) if
    ///   the smallest retained eigenvalue is within `gap_factor` of ε
    pub fn compute(kirchhoff: &Kirchhoff, config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let n = kirchhoff.dim();
        let spectral = symmetric_pinv(kirchhoff.matrix(), config.rcond)?;
        let max_eigenvalue = spectral.eigenvalues.last().copied().unwrap_or(0.0);

        log::debug!(
            "Kirchhoff spectrum: N={}, λmax={:.4e}, ε={:.4e}, null={}, λ2={:?}",
            n,
            max_eigenvalue,
            spectral.threshold,
            spectral.null_dimension,
            spectral.smallest_retained
        );

        if spectral.null_dimension > 1 {
            return Err(EnmError::disconnected(
                spectral.null_dimension,
                connected_components(kirchhoff),
            ));
        }
        if spectral.null_dimension == 0 {
            return Err(EnmError::numerical(format!(
                "no eigenvalue below ε = {:.3e} (smallest {:.3e}); matrix is not a singular Laplacian at rcond = {:e}",
                spectral.threshold,
                spectral.smallest_retained.unwrap_or(0.0),
                config.rcond
            )));
        }

        if let Some(lambda2) = spectral.smallest_retained {
            let gap_floor = config.gap_factor * spectral.threshold;
            if lambda2 < gap_floor {
                let message = format!(
                    "smallest retained eigenvalue {:.3e} is within {}x of the zero threshold {:.3e}",
                    lambda2, config.gap_factor, spectral.threshold
                );
                if config.strict {
                    return Err(EnmError::numerical(message));
                }
                log::warn!("{}; network is nearly disconnected", message);
            }
        }

        Ok(Self {
            matrix: spectral.matrix,
            summary: SpectrumSummary {
                n_nodes: n,
                max_eigenvalue,
                threshold: spectral.threshold,
                null_dimension: spectral.null_dimension,
                algebraic_connectivity: spectral.smallest_retained,
            },
        })
    }

    /// The dense pseudoinverse matrix
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn summary(&self) -> &SpectrumSummary {
        &self.summary
    }

    pub fn into_inner(self) -> DMatrix<f64> {
        self.matrix
    }
}
