//! Circuit-to-unitary reconstruction

use crate::accumulator::Accumulator;
use crate::error::{Result, UnitaryError};
use crate::unitary::Unitary;
use log::debug;
use qompose_core::Circuit;

/// Default cap on the register size. A 16-qubit accumulator is 4^16
/// complex entries (64 GiB); anything larger is certainly a caller bug
/// rather than a workload.
pub const DEFAULT_MAX_QUBITS: usize = 16;

/// Bounds for a reconstruction run.
///
/// # Example
/// ```
/// use qompose_unitary::ReconstructConfig;
///
/// let config = ReconstructConfig::default();
/// assert_eq!(config.max_qubits, 16);
///
/// let small = ReconstructConfig { max_qubits: 8 };
/// assert_eq!(small.max_qubits, 8);
/// ```
#[derive(Debug, Clone)]
pub struct ReconstructConfig {
    /// Largest register the dense 4^N accumulator may be allocated for.
    pub max_qubits: usize,
}

impl Default for ReconstructConfig {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }
}

/// Compute the dense unitary of `circuit` with the default config.
///
/// Gates are contracted in application order; the result equals the
/// matrix product of every gate extended to the full register, last gate
/// leftmost. An empty circuit yields the exact identity.
///
/// # Errors
/// See [`reconstruct_with`].
///
/// # Example
/// ```
/// use qompose_core::{Circuit, QubitId};
/// use qompose_gates::standard::{CNot, Hadamard};
/// use qompose_unitary::reconstruct;
/// use std::sync::Arc;
///
/// let mut circuit = Circuit::new(2);
/// circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
/// circuit
///     .add_gate(Arc::new(CNot), &[QubitId::new(0), QubitId::new(1)])
///     .unwrap();
///
/// let bell = reconstruct(&circuit).unwrap();
/// assert_eq!(bell.dim(), 4);
/// assert!(bell.is_unitary(1e-10));
/// ```
pub fn reconstruct(circuit: &Circuit) -> Result<Unitary> {
    reconstruct_with(circuit, &ReconstructConfig::default())
}

/// Compute the dense unitary of `circuit` under `config`.
///
/// Pure and synchronous: either the full result or an error naming the
/// offending operation, with nothing retained in between.
///
/// # Errors
/// [`UnitaryError::RegisterTooLarge`] when the register exceeds
/// `config.max_qubits`; per-operation validation errors
/// ([`UnitaryError::MatrixDimensionMismatch`],
/// [`UnitaryError::TargetOutOfRange`], [`UnitaryError::DuplicateTarget`])
/// when a gate's matrix disagrees with its target tuple. Non-unitary
/// gate matrices are NOT detected; composing them simply yields a
/// non-unitary result.
pub fn reconstruct_with(circuit: &Circuit, config: &ReconstructConfig) -> Result<Unitary> {
    let num_qubits = circuit.num_qubits();
    if num_qubits > config.max_qubits {
        return Err(UnitaryError::RegisterTooLarge {
            num_qubits,
            max: config.max_qubits,
        });
    }

    debug!(
        "reconstructing unitary: {} qubits, {} operations",
        num_qubits,
        circuit.len()
    );

    let mut accumulator = Accumulator::identity(num_qubits)?;
    for (index, op) in circuit.operations().enumerate() {
        debug!("contracting operation {index}: {op}");
        accumulator.apply(&op.gate().matrix(), op.targets())?;
    }

    Ok(accumulator.into_unitary())
}
