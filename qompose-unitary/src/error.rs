//! Error types for unitary reconstruction

use thiserror::Error;

/// Errors raised while contracting a circuit into a unitary.
///
/// Every per-gate variant names the offending operation index (position
/// in application order), so a failure points straight at the gate that
/// caused it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitaryError {
    /// A register must hold at least one qubit.
    #[error("register must have at least one qubit")]
    EmptyRegister,

    /// The dense representation would exceed the configured bound.
    #[error("register of {num_qubits} qubits exceeds the dense limit of {max} (the accumulator is 4^N entries)")]
    RegisterTooLarge { num_qubits: usize, max: usize },

    /// A gate's matrix does not match its target count.
    #[error("operation {operation}: gate matrix has {actual} entries, but {num_targets} target(s) require a {expected_dim}x{expected_dim} matrix")]
    MatrixDimensionMismatch {
        operation: usize,
        num_targets: usize,
        expected_dim: usize,
        actual: usize,
    },

    /// A target index lies outside the register.
    #[error("operation {operation}: target index {index} out of range for a {num_qubits}-qubit register")]
    TargetOutOfRange {
        operation: usize,
        index: usize,
        num_qubits: usize,
    },

    /// The same qubit appears twice in one operation's target tuple.
    #[error("operation {operation}: duplicate target q{index}")]
    DuplicateTarget { operation: usize, index: usize },
}

/// Result alias for reconstruction operations.
pub type Result<T> = std::result::Result<T, UnitaryError>;
