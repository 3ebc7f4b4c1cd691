//! Random-walk hitting times from the Kirchhoff pseudoinverse
//!
//! For a walk that steps to neighbour j with probability kᵢⱼ / dᵢ, the
//! expected number of steps to first reach j from i is
//!
//! ```text
//! H[i,j] = vol × (Γ⁺ⱼⱼ − Γ⁺ᵢⱼ) + Σₖ dₖ (Γ⁺ᵢₖ − Γ⁺ⱼₖ)
//! ```
//!
//! with dₖ the weighted degree and vol = Σₖ dₖ. The degree-weighted sum is
//! the vector w = Γ⁺·d, so each entry costs O(1) after one mat-vec.
//!
//! # References
//!
//! - Tetali (1991) "Random walks and the effective resistance of networks"
//!   J. Theor. Probab. 4:101-109
//! - Lovász (1993) "Random walks on graphs: a survey"

use nalgebra::{DMatrix, DVector};

/// Build the hitting-time matrix H.
///
/// `pinv` is Γ⁺ (N×N), `degrees` the diagonal of Γ. H[i,i] is exactly zero.
pub fn build_hitting_times(pinv: &DMatrix<f64>, degrees: &DVector<f64>) -> DMatrix<f64> {
    let n = pinv.nrows();
    debug_assert_eq!(degrees.len(), n);

    let volume = degrees.sum();
    let weighted = pinv * degrees;

    DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            0.0
        } else {
            volume * (pinv[(j, j)] - pinv[(i, j)]) + weighted[i] - weighted[j]
        }
    })
}
