//! Error types for table generation

use std::io;
use thiserror::Error;

/// Errors raised while validating a range or writing a table
///
/// Evaluating a function outside its domain is not an error: rows report it
/// as "not computable" instead.
#[derive(Debug, Error)]
pub enum TableError {
    /// Step would never reach the end of the range
    #[error("step must be a positive finite number, got {step}")]
    InvalidStep { step: f64 },

    /// Range bound is NaN or infinite
    #[error("range bounds must be finite, got {value}")]
    NonFiniteBound { value: f64 },

    /// Output sink rejected a write
    #[error("failed to write table: {0}")]
    Io(#[from] io::Error),
}
