//! Error types for elastic network analysis.
//!
//! Every engine failure is surfaced as a typed [`EnmError`]; nothing is
//! retried and nothing is replaced by placeholder values.

use thiserror::Error;

/// Unified error type for all ENM operations.
#[derive(Error, Debug)]
pub enum EnmError {
    /// Matrix is not square, not symmetric, has non-finite entries, or is not
    /// shaped like a graph Laplacian
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Laplacian null space has more than one direction
    #[error(
        "Disconnected graph: null space dimension {null_dimension} \
         ({components} structural component(s)); hitting/commute times are undefined"
    )]
    DisconnectedGraph {
        null_dimension: usize,
        components: usize,
    },

    /// Eigenvalue spectrum too poorly separated to place the zero threshold
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Configuration validation errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Text input that does not parse (matrix files, edge lists)
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// I/O errors (matrix files, edge lists, config files)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl EnmError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        EnmError::InvalidInput(message.into())
    }

    /// Creates a disconnected graph error.
    pub fn disconnected(null_dimension: usize, components: usize) -> Self {
        EnmError::DisconnectedGraph {
            null_dimension,
            components,
        }
    }

    /// Creates a numerical instability error.
    pub fn numerical(message: impl Into<String>) -> Self {
        EnmError::NumericalInstability(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        EnmError::ConfigError(message.into())
    }

    /// Creates a parse error for a 1-based line number.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        EnmError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Returns a user-friendly error message with actionable guidance.
    pub fn user_message(&self) -> String {
        match self {
            EnmError::InvalidInput(msg) => {
                format!(
                    "Invalid input: {}\n\
                     → The Kirchhoff matrix must be square, symmetric and finite.\n\
                     → Every row must sum to zero with non-positive off-diagonal entries.",
                    msg
                )
            }
            EnmError::DisconnectedGraph { components, .. } => {
                format!(
                    "{}\n\
                     → Restrict the network to its giant component ({} component(s) found).",
                    self, components
                )
            }
            EnmError::NumericalInstability(msg) => {
                format!(
                    "Numerical instability: {}\n\
                     → Adjust `rcond` / `gap_factor`, or run without `strict`.",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for ENM operations.
pub type Result<T> = std::result::Result<T, EnmError>;
