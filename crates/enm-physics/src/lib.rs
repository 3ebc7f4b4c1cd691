//! # ENM Physics Module
//!
//! Random-walk analysis of protein-protein interaction networks under the
//! Gaussian Network Model: the Kirchhoff matrix of the network, its
//! Moore-Penrose pseudoinverse, and the hitting-time and commute-time
//! matrices derived from it.
//!
//! ```no_run
//! use enm_physics::{HitCommute, Kirchhoff};
//!
//! let k = Kirchhoff::from_weighted_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)])?;
//! let result = HitCommute::default().compute(&k)?;
//! assert!(result.commute[(0, 2)] > result.commute[(0, 1)]);
//! # Ok::<(), enm_core::EnmError>(())
//! ```

// Kirchhoff matrix construction and validation
pub mod kirchhoff;
pub use kirchhoff::Kirchhoff;

// Structural connectivity (petgraph)
pub mod connectivity;
pub use connectivity::{connected_components, is_connected};

// Eigendecomposition-based pseudoinverse
pub mod pseudoinverse;
pub use pseudoinverse::{symmetric_pinv, Pseudoinverse, SpectrumSummary, SymmetricPinv};

// Hitting/commute time builders
pub mod commute;
pub mod hitting;
pub use commute::{build_commute_times, build_effective_resistance};
pub use hitting::build_hitting_times;

// Engine facade
pub mod hit_commute;
pub use hit_commute::{HitCommute, HitCommuteResult};

// Text I/O for matrices and PPIN edge lists
pub mod edge_list;
pub mod matrix_io;
pub use edge_list::EdgeList;
pub use matrix_io::{load_matrix, read_matrix, save_matrix, write_matrix};
