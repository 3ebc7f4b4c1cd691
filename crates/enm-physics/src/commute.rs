//! Commute times and effective resistances
//!
//! Commute time is the graph volume times the effective resistance between
//! two nodes when every spring is read as a conductance (Chandra et al. 1989):
//!
//! ```text
//! R[i,j] = Γ⁺ᵢᵢ + Γ⁺ⱼⱼ − 2Γ⁺ᵢⱼ
//! C[i,j] = vol × R[i,j]  = H[i,j] + H[j,i]
//! ```
//!
//! Both matrices are filled on the upper triangle and mirrored, so they are
//! exactly symmetric with an exact zero diagonal.

use nalgebra::DMatrix;

/// Effective resistance matrix R.
pub fn build_effective_resistance(pinv: &DMatrix<f64>) -> DMatrix<f64> {
    build_scaled_resistance(pinv, 1.0)
}

/// Commute-time matrix C for a network of the given volume.
pub fn build_commute_times(pinv: &DMatrix<f64>, volume: f64) -> DMatrix<f64> {
    build_scaled_resistance(pinv, volume)
}

fn build_scaled_resistance(pinv: &DMatrix<f64>, scale: f64) -> DMatrix<f64> {
    let n = pinv.nrows();
    let mut out = DMatrix::zeros(n, n);

    for i in 0..n {
        for j in (i + 1)..n {
            // Clamp rounding noise; resistances are non-negative
            let value = (scale * (pinv[(i, i)] + pinv[(j, j)] - 2.0 * pinv[(i, j)])).max(0.0);
            out[(i, j)] = value;
            out[(j, i)] = value;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn path3_pinv() -> DMatrix<f64> {
        DMatrix::from_row_slice(3, 3, &[5.0, -1.0, -4.0, -1.0, 2.0, -1.0, -4.0, -1.0, 5.0]) / 9.0
    }

    #[test]
    fn test_path_graph_resistance_is_series_sum() {
        let r = build_effective_resistance(&path3_pinv());
        assert_relative_eq!(r[(0, 1)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(r[(1, 2)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(r[(0, 2)], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_path_graph_commute_times() {
        let c = build_commute_times(&path3_pinv(), 4.0);
        assert_relative_eq!(c[(0, 1)], 4.0, epsilon = 1e-12);
        assert_relative_eq!(c[(0, 2)], 8.0, epsilon = 1e-12);
        assert_eq!(c[(0, 2)], c[(2, 0)]);
        for i in 0..3 {
            assert_eq!(c[(i, i)], 0.0);
        }
    }

    #[test]
    fn test_parallel_springs_halve_resistance() {
        // Two nodes joined by springs of weight 1 and 1 → single spring of weight 2
        let k = crate::kirchhoff::Kirchhoff::from_weighted_edges(2, &[(0, 1, 1.0), (0, 1, 1.0)]).unwrap();
        let pinv = crate::pseudoinverse::symmetric_pinv(k.matrix(), 1e-10).unwrap().matrix;
        let r = build_effective_resistance(&pinv);
        assert_relative_eq!(r[(0, 1)], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_single_node() {
        let c = build_commute_times(&DMatrix::zeros(1, 1), 0.0);
        assert_eq!(c, DMatrix::<f64>::zeros(1, 1));
    }
}
