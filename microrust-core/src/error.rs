use crate::types::ValueOp;
use thiserror::Error;

/// Custom error type for the MicroRust engine.
///
/// The autograd core itself has a single failure mode: raising a value to a
/// node-valued exponent. Everything else (division by zero, overflow, ...)
/// follows IEEE-754 propagation and is not reported as an error. The
/// remaining variants belong to the consumer layer (`nn`), not the engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MicroRustError {
    #[error("Unsupported exponent: pow expects a plain numeric constant, got a value produced by operation '{op}'")]
    UnsupportedExponentType { op: ValueOp },

    #[error("Dimension mismatch: expected {expected} inputs, got {actual} during {operation}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },
}
