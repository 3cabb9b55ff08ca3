//! Gate trait and gate operations

use crate::{CircuitError, QubitId, Result};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// A matrix-backed quantum gate.
///
/// Gates are stateless and shared between circuits via `Arc`. The matrix
/// is the gate's defining property here: the reconstruction pipeline
/// works on matrices alone, so `matrix()` is required rather than
/// optional. Non-matrix operations (measurement, reset) have no place in
/// this workspace.
///
/// # Example
/// ```
/// use qompose_core::{Gate, Complex64};
///
/// #[derive(Debug)]
/// struct Flip;
///
/// impl Gate for Flip {
///     fn name(&self) -> &str { "FLIP" }
///     fn num_qubits(&self) -> usize { 1 }
///     fn matrix(&self) -> Vec<Complex64> {
///         vec![
///             Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0),
///             Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0),
///         ]
///     }
/// }
/// ```
pub trait Gate: Send + Sync + fmt::Debug {
    /// Short name of the gate ("H", "CNOT", "RZ", ...).
    fn name(&self) -> &str;

    /// Number of qubits the gate acts on.
    fn num_qubits(&self) -> usize;

    /// The gate matrix, row-major, flattened.
    ///
    /// For a k-qubit gate the matrix is 2^k x 2^k, so the returned vector
    /// has length 4^k. Rows and columns index the gate's local 2^k space
    /// with the first target qubit as the most significant bit.
    fn matrix(&self) -> Vec<Complex64>;

    /// Whether the gate is self-adjoint.
    fn is_hermitian(&self) -> bool {
        false
    }
}

/// A gate bound to the qubits it acts on.
///
/// Construction validates that the target tuple matches the gate's arity
/// and contains no duplicates; target range is checked when the operation
/// is added to a [`Circuit`](crate::Circuit), which knows the register
/// size.
#[derive(Clone)]
pub struct GateOp {
    gate: Arc<dyn Gate>,
    targets: SmallVec<[QubitId; 2]>,
}

impl GateOp {
    /// Bind `gate` to `targets`.
    ///
    /// # Errors
    /// [`CircuitError::TargetCountMismatch`] if the tuple length differs
    /// from `gate.num_qubits()`; [`CircuitError::DuplicateTarget`] if a
    /// qubit appears twice.
    pub fn new(gate: Arc<dyn Gate>, targets: &[QubitId]) -> Result<Self> {
        if targets.len() != gate.num_qubits() {
            return Err(CircuitError::target_count_mismatch(
                gate.name(),
                gate.num_qubits(),
                targets.len(),
            ));
        }

        for i in 0..targets.len() {
            for j in (i + 1)..targets.len() {
                if targets[i] == targets[j] {
                    return Err(CircuitError::DuplicateTarget(targets[i]));
                }
            }
        }

        Ok(Self {
            gate,
            targets: SmallVec::from_slice(targets),
        })
    }

    /// The gate.
    #[inline]
    pub fn gate(&self) -> &Arc<dyn Gate> {
        &self.gate
    }

    /// Ordered target qubits.
    #[inline]
    pub fn targets(&self) -> &[QubitId] {
        &self.targets
    }

    /// Number of target qubits.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.targets.len()
    }
}

impl fmt::Debug for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate.name())?;
        for (i, q) in self.targets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{q}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FakeGate {
        name: &'static str,
        arity: usize,
    }

    impl Gate for FakeGate {
        fn name(&self) -> &str {
            self.name
        }

        fn num_qubits(&self) -> usize {
            self.arity
        }

        fn matrix(&self) -> Vec<Complex64> {
            let dim = 1 << self.arity;
            let mut m = vec![Complex64::new(0.0, 0.0); dim * dim];
            for i in 0..dim {
                m[i * dim + i] = Complex64::new(1.0, 0.0);
            }
            m
        }
    }

    #[test]
    fn binds_gate_to_targets() {
        let gate = Arc::new(FakeGate {
            name: "H",
            arity: 1,
        });
        let op = GateOp::new(gate, &[QubitId::new(0)]).unwrap();
        assert_eq!(op.num_qubits(), 1);
        assert_eq!(op.targets(), &[QubitId::new(0)]);
        assert_eq!(op.gate().name(), "H");
    }

    #[test]
    fn rejects_wrong_target_count() {
        let gate = Arc::new(FakeGate {
            name: "CNOT",
            arity: 2,
        });
        let err = GateOp::new(gate, &[QubitId::new(0)]).unwrap_err();
        match err {
            CircuitError::TargetCountMismatch {
                gate,
                expected,
                actual,
            } => {
                assert_eq!(gate, "CNOT");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected TargetCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_targets() {
        let gate = Arc::new(FakeGate {
            name: "CNOT",
            arity: 2,
        });
        let result = GateOp::new(gate, &[QubitId::new(1), QubitId::new(1)]);
        assert!(matches!(result, Err(CircuitError::DuplicateTarget(q)) if q == QubitId::new(1)));
    }

    #[test]
    fn debug_lists_targets_in_order() {
        let gate = Arc::new(FakeGate {
            name: "SWAP",
            arity: 2,
        });
        let op = GateOp::new(gate, &[QubitId::new(2), QubitId::new(0)]).unwrap();
        assert_eq!(format!("{op}"), "SWAP(q2, q0)");
    }
}
