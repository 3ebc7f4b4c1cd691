//! Hitting/commute time engine for PPIN elastic networks
//!
//! Stateless facade over the pseudoinverse and the two builders. Each call
//! computes Γ⁺ afresh; nothing is cached between calls, so repeated calls on
//! the same Kirchhoff matrix give identical results.
//!
//! ```text
//! Kirchhoff Γ ──► Γ⁺ (eigendecomposition) ──┬──► H  (hitting times)
//!                                           └──► C  (commute times)
//! ```

use enm_core::{EngineConfig, Result};
use nalgebra::DMatrix;

use crate::commute::build_commute_times;
use crate::hitting::build_hitting_times;
use crate::kirchhoff::Kirchhoff;
use crate::pseudoinverse::{Pseudoinverse, SpectrumSummary};

/// Hitting and commute times computed from one pseudoinverse
#[derive(Debug, Clone)]
pub struct HitCommuteResult {
    /// H[i,j]: expected steps from i to first reach j (asymmetric)
    pub hitting: DMatrix<f64>,
    /// C[i,j] = H[i,j] + H[j,i] (symmetric)
    pub commute: DMatrix<f64>,
    /// Graph volume Σ dᵢ used for normalization
    pub volume: f64,
    /// Spectrum statistics of Γ
    pub spectrum: SpectrumSummary,
}

/// Hitting/commute time engine
#[derive(Debug, Clone, Default)]
pub struct HitCommute {
    config: EngineConfig,
}

impl HitCommute {
    /// Create an engine with validated tolerances.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate a dense matrix as a Kirchhoff matrix using this engine's
    /// symmetry tolerance.
    pub fn kirchhoff(&self, matrix: DMatrix<f64>) -> Result<Kirchhoff> {
        Kirchhoff::with_tolerance(matrix, self.config.symmetry_tol)
    }

    /// Moore-Penrose pseudoinverse Γ⁺.
    pub fn pseudoinverse(&self, kirchhoff: &Kirchhoff) -> Result<Pseudoinverse> {
        Pseudoinverse::compute(kirchhoff, &self.config)
    }

    /// Hitting-time matrix H only.
    pub fn hitting_times(&self, kirchhoff: &Kirchhoff) -> Result<DMatrix<f64>> {
        let pinv = self.pseudoinverse(kirchhoff)?;
        Ok(build_hitting_times(pinv.matrix(), &kirchhoff.degrees()))
    }

    /// Commute-time matrix C only, from the closed form (H is never built).
    pub fn commute_times(&self, kirchhoff: &Kirchhoff) -> Result<DMatrix<f64>> {
        let pinv = self.pseudoinverse(kirchhoff)?;
        Ok(build_commute_times(pinv.matrix(), kirchhoff.volume()))
    }

    /// Both matrices from a single decomposition.
    pub fn compute(&self, kirchhoff: &Kirchhoff) -> Result<HitCommuteResult> {
        let pinv = self.pseudoinverse(kirchhoff)?;
        let volume = kirchhoff.volume();

        let hitting = build_hitting_times(pinv.matrix(), &kirchhoff.degrees());
        let commute = build_commute_times(pinv.matrix(), volume);

        log::debug!(
            "Hitting/commute times: N={}, vol={:.4}, max C={:.4e}",
            kirchhoff.dim(),
            volume,
            commute.max()
        );

        Ok(HitCommuteResult {
            hitting,
            commute,
            volume,
            spectrum: *pinv.summary(),
        })
    }
}
