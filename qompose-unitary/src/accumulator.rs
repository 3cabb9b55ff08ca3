//! Running-product accumulator
//!
//! The accumulator holds the partially composed unitary as a flat
//! row-major 2^N × 2^N buffer. Conceptually it is a tensor with one row
//! axis and one column axis of extent 2 per qubit; the axis bookkeeping
//! is carried by bit masks derived from the target indices, so a gate is
//! contracted in place and every axis stays at its canonical qubit slot.
//!
//! Contracting gate G on targets T computes U ← (G ⊗ I_rest) · U: only
//! the row subspace addressed by the targets changes, columns are
//! untouched. Per k-qubit gate this costs O(4^N · 2^k) instead of the
//! O(8^N) of embedding G to full size and multiplying.

use crate::error::{Result, UnitaryError};
use crate::unitary::Unitary;
use ahash::AHashSet;
use num_complex::Complex64;
use qompose_core::QubitId;
use smallvec::SmallVec;

/// Hard bound on the register size; beyond this the 4^N index space no
/// longer fits comfortably in a usize. The practical bound is far lower
/// and enforced by [`ReconstructConfig`](crate::ReconstructConfig).
pub const HARD_MAX_QUBITS: usize = 31;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// The running product of the gates contracted so far.
///
/// Created as the identity, mutated once per gate via [`apply`], and
/// drained into a [`Unitary`] when the sequence is exhausted. One
/// accumulator serves one reconstruction; nothing is shared or retained
/// across invocations.
///
/// [`apply`]: Accumulator::apply
///
/// # Example
/// ```
/// use qompose_core::QubitId;
/// use qompose_gates::matrices;
/// use qompose_unitary::Accumulator;
///
/// let mut acc = Accumulator::identity(2).unwrap();
/// acc.apply(&matrices::HADAMARD, &[QubitId::new(0)]).unwrap();
/// acc.apply(&matrices::CNOT, &[QubitId::new(0), QubitId::new(1)])
///     .unwrap();
/// let bell = acc.into_unitary();
/// assert!(bell.is_unitary(1e-10));
/// ```
#[derive(Debug, Clone)]
pub struct Accumulator {
    num_qubits: usize,
    dim: usize,
    data: Vec<Complex64>,
    applied: usize,
}

impl Accumulator {
    /// Identity accumulator over `num_qubits` qubits.
    ///
    /// # Errors
    /// [`UnitaryError::EmptyRegister`] for a zero-qubit register,
    /// [`UnitaryError::RegisterTooLarge`] beyond [`HARD_MAX_QUBITS`].
    pub fn identity(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(UnitaryError::EmptyRegister);
        }
        if num_qubits > HARD_MAX_QUBITS {
            return Err(UnitaryError::RegisterTooLarge {
                num_qubits,
                max: HARD_MAX_QUBITS,
            });
        }

        let dim = 1usize << num_qubits;
        let mut data = vec![ZERO; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = ONE;
        }

        Ok(Self {
            num_qubits,
            dim,
            data,
            applied: 0,
        })
    }

    /// Register size N.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Matrix side length 2^N.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of gates contracted so far.
    #[inline]
    pub fn num_applied(&self) -> usize {
        self.applied
    }

    /// The current matrix, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Contract one gate into the accumulator.
    ///
    /// `matrix` is the gate's row-major 2^k × 2^k buffer and `targets`
    /// its ordered qubit tuple: the j-th target carries the gate's j-th
    /// local qubit, most significant first. Validation happens before
    /// anything is touched, so a failed call leaves the accumulator
    /// unchanged; errors report the index of the offending operation
    /// (the number of gates applied so far).
    ///
    /// # Errors
    /// [`UnitaryError::MatrixDimensionMismatch`],
    /// [`UnitaryError::TargetOutOfRange`], or
    /// [`UnitaryError::DuplicateTarget`].
    pub fn apply(&mut self, matrix: &[Complex64], targets: &[QubitId]) -> Result<()> {
        let operation = self.applied;
        let k = targets.len();
        let block = 1usize << k;

        if matrix.len() != block * block {
            return Err(UnitaryError::MatrixDimensionMismatch {
                operation,
                num_targets: k,
                expected_dim: block,
                actual: matrix.len(),
            });
        }

        let mut seen = AHashSet::with_capacity(k);
        for &q in targets {
            if q.index() >= self.num_qubits {
                return Err(UnitaryError::TargetOutOfRange {
                    operation,
                    index: q.index(),
                    num_qubits: self.num_qubits,
                });
            }
            if !seen.insert(q.index()) {
                return Err(UnitaryError::DuplicateTarget {
                    operation,
                    index: q.index(),
                });
            }
        }

        self.contract(matrix, targets);
        self.applied += 1;
        Ok(())
    }

    /// The contraction itself: inputs are already validated.
    fn contract(&mut self, matrix: &[Complex64], targets: &[QubitId]) {
        let k = targets.len();
        let block = 1usize << k;
        let dim = self.dim;

        // Register-bit mask of each target row axis; gate-local qubit j
        // lives at targets[j], qubit 0 is the most significant bit.
        let masks: SmallVec<[usize; 4]> = targets
            .iter()
            .map(|q| 1usize << (self.num_qubits - 1 - q.index()))
            .collect();
        let target_mask: usize = masks.iter().fold(0, |acc, m| acc | m);

        // offsets[s]: register row bits addressed by local basis index s.
        // This table is the inverse axis permutation of the contraction:
        // gathering and scattering through it keeps every row axis at
        // its canonical qubit position.
        let mut offsets: SmallVec<[usize; 8]> = SmallVec::with_capacity(block);
        for s in 0..block {
            let mut bits = 0usize;
            for (j, mask) in masks.iter().enumerate() {
                if s & (1 << (k - 1 - j)) != 0 {
                    bits |= mask;
                }
            }
            offsets.push(bits);
        }

        // For every pattern of non-target row bits, the 2^k addressed
        // rows are pulled out, multiplied by the gate, and written back.
        let mut scratch = vec![ZERO; block * dim];
        for base in 0..dim {
            if base & target_mask != 0 {
                continue;
            }

            for (s, offset) in offsets.iter().enumerate() {
                let row = base | offset;
                scratch[s * dim..(s + 1) * dim]
                    .copy_from_slice(&self.data[row * dim..(row + 1) * dim]);
            }

            for (s, offset) in offsets.iter().enumerate() {
                let row = base | offset;
                let out = &mut self.data[row * dim..(row + 1) * dim];
                for (col, entry) in out.iter_mut().enumerate() {
                    let mut acc = ZERO;
                    for t in 0..block {
                        acc += matrix[s * block + t] * scratch[t * dim + col];
                    }
                    *entry = acc;
                }
            }
        }
    }

    /// Finish: reshape the accumulator into the resulting matrix.
    pub fn into_unitary(self) -> Unitary {
        Unitary::from_parts(self.num_qubits, self.dim, self.data)
    }
}
