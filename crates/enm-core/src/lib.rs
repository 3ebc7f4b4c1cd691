//! # enm-core
//!
//! Core errors and configuration for PPIN elastic network analysis.
//!
//! - **Errors**: unified error handling with [`EnmError`]
//! - **Config**: [`EngineConfig`] numerical tolerances, loadable from TOML
//!
//! ## Architecture
//! ```text
//! ┌─────────────────┐
//! │  enm-core       │  ← Errors / config
//! └─────────────────┘
//!         ▲
//! ┌───────┴─────────┐
//! │  enm-physics    │  ← Kirchhoff, pseudoinverse, hitting/commute times
//! └─────────────────┘
//!         ▲
//! ┌───────┴─────────┐
//! │  enm-cli        │  ← File I/O and orchestration
//! └─────────────────┘
//! ```

pub mod engine_config;
pub mod errors;

pub use engine_config::EngineConfig;
pub use errors::{EnmError, Result};
