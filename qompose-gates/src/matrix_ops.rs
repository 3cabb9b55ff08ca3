//! Dense matrix utilities
//!
//! Helpers for square complex matrices stored as flat row-major buffers.
//! `embed_gate` and `matrix_multiply` together form the reference
//! composition path: a gate extended to the full register by Kronecker
//! products with identity, then multiplied out. The reconstruction crate
//! computes the same result without ever materializing the embedded
//! matrices; its tests use this module as the oracle.

use num_complex::Complex64;

/// Side length of the square matrix stored in `matrix`.
///
/// # Panics
/// Panics if the buffer length is not a perfect square.
pub fn dimension_of(matrix: &[Complex64]) -> usize {
    let dim = (matrix.len() as f64).sqrt().round() as usize;
    assert_eq!(dim * dim, matrix.len(), "matrix buffer must be square");
    dim
}

/// Identity matrix of side `dim`.
pub fn identity_matrix(dim: usize) -> Vec<Complex64> {
    let mut m = vec![Complex64::new(0.0, 0.0); dim * dim];
    for i in 0..dim {
        m[i * dim + i] = Complex64::new(1.0, 0.0);
    }
    m
}

/// C = A · B for square matrices of equal dimension.
///
/// # Panics
/// Panics if the buffers are not square or differ in dimension.
pub fn matrix_multiply(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    let dim = dimension_of(a);
    assert_eq!(b.len(), a.len(), "matrix dimensions must agree");

    let mut out = vec![Complex64::new(0.0, 0.0); dim * dim];
    for r in 0..dim {
        for k in 0..dim {
            let a_rk = a[r * dim + k];
            for c in 0..dim {
                out[r * dim + c] += a_rk * b[k * dim + c];
            }
        }
    }
    out
}

/// Conjugate transpose A†.
pub fn matrix_adjoint(matrix: &[Complex64]) -> Vec<Complex64> {
    let dim = dimension_of(matrix);
    let mut out = vec![Complex64::new(0.0, 0.0); dim * dim];
    for r in 0..dim {
        for c in 0..dim {
            out[r * dim + c] = matrix[c * dim + r].conj();
        }
    }
    out
}

/// Kronecker product A ⊗ B.
pub fn tensor_product(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    let dim_a = dimension_of(a);
    let dim_b = dimension_of(b);
    let dim = dim_a * dim_b;

    let mut out = vec![Complex64::new(0.0, 0.0); dim * dim];
    for i in 0..dim_a {
        for j in 0..dim_a {
            let a_ij = a[i * dim_a + j];
            for k in 0..dim_b {
                for l in 0..dim_b {
                    out[(i * dim_b + k) * dim + (j * dim_b + l)] = a_ij * b[k * dim_b + l];
                }
            }
        }
    }
    out
}

/// Extend a k-qubit gate matrix to a full `num_qubits` register.
///
/// Produces the 2^N × 2^N matrix acting as `gate` on `targets` and as
/// identity elsewhere, under the workspace convention (qubit 0 and the
/// first target are most significant). Targets may appear in any order;
/// the j-th target carries the gate's j-th local qubit.
///
/// # Panics
/// Panics on a non-square gate buffer, a target/dimension mismatch, an
/// out-of-range target, or a duplicate target. This is a test oracle and
/// construction helper; the reconstruction path reports the same
/// conditions as errors.
pub fn embed_gate(gate: &[Complex64], num_qubits: usize, targets: &[usize]) -> Vec<Complex64> {
    let gate_dim = dimension_of(gate);
    let k = targets.len();
    assert_eq!(gate_dim, 1usize << k, "gate dimension must be 2^(targets)");
    assert!(num_qubits >= k, "register smaller than gate");

    // Register-bit mask of each target; local bit j of the gate's index
    // space corresponds to targets[j].
    let masks: Vec<usize> = targets
        .iter()
        .map(|&t| {
            assert!(t < num_qubits, "target {t} out of range");
            1usize << (num_qubits - 1 - t)
        })
        .collect();
    let target_mask = masks.iter().fold(0usize, |acc, m| {
        assert_eq!(acc & m, 0, "duplicate target");
        acc | m
    });

    // offsets[s]: register bits for local basis index s.
    let mut offsets = vec![0usize; gate_dim];
    for (s, offset) in offsets.iter_mut().enumerate() {
        for (j, mask) in masks.iter().enumerate() {
            if s & (1 << (k - 1 - j)) != 0 {
                *offset |= mask;
            }
        }
    }

    let dim = 1usize << num_qubits;
    let mut out = vec![Complex64::new(0.0, 0.0); dim * dim];
    for col in 0..dim {
        let rest = col & !target_mask;
        // Local column index of `col` within the gate's space.
        let mut local_col = 0usize;
        for (j, mask) in masks.iter().enumerate() {
            if col & mask != 0 {
                local_col |= 1 << (k - 1 - j);
            }
        }
        for (local_row, offset) in offsets.iter().enumerate() {
            let row = rest | offset;
            out[row * dim + col] = gate[local_row * gate_dim + local_col];
        }
    }
    out
}

/// Trace of a square matrix.
pub fn matrix_trace(matrix: &[Complex64]) -> Complex64 {
    let dim = dimension_of(matrix);
    (0..dim).map(|i| matrix[i * dim + i]).sum()
}

/// Whether U†·U ≈ I within `tolerance`.
pub fn is_unitary(matrix: &[Complex64], tolerance: f64) -> bool {
    let dim = dimension_of(matrix);
    let product = matrix_multiply(&matrix_adjoint(matrix), matrix);
    for r in 0..dim {
        for c in 0..dim {
            let expected = if r == c { 1.0 } else { 0.0 };
            if (product[r * dim + c] - expected).norm() > tolerance {
                return false;
            }
        }
    }
    true
}

/// Whether A ≈ A† within `tolerance`.
pub fn is_hermitian(matrix: &[Complex64], tolerance: f64) -> bool {
    let dim = dimension_of(matrix);
    for r in 0..dim {
        for c in 0..dim {
            if (matrix[r * dim + c] - matrix[c * dim + r].conj()).norm() > tolerance {
                return false;
            }
        }
    }
    true
}

/// Element-wise comparison within `tolerance`.
pub fn approx_matrix_eq(a: &[Complex64], b: &[Complex64], tolerance: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).norm() <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices::{CNOT, HADAMARD, IDENTITY, PAULI_X, PAULI_Y, PAULI_Z, SWAP};
    use approx::assert_relative_eq;

    #[test]
    fn x_squared_is_identity() {
        let squared = matrix_multiply(&PAULI_X, &PAULI_X);
        assert!(approx_matrix_eq(&squared, &IDENTITY, 1e-12));
    }

    #[test]
    fn adjoint_of_hermitian_matrix_is_itself() {
        assert!(approx_matrix_eq(&matrix_adjoint(&PAULI_Y), &PAULI_Y, 1e-12));
    }

    #[test]
    fn kronecker_of_identity_and_x() {
        let ix = tensor_product(&IDENTITY, &PAULI_X);
        assert_eq!(ix.len(), 16);
        // block-diagonal [[X, 0], [0, X]]
        assert_relative_eq!(ix[0 * 4 + 1].re, 1.0);
        assert_relative_eq!(ix[1 * 4 + 0].re, 1.0);
        assert_relative_eq!(ix[2 * 4 + 3].re, 1.0);
        assert_relative_eq!(ix[3 * 4 + 2].re, 1.0);
    }

    #[test]
    fn embed_on_first_qubit_is_left_kronecker_factor() {
        let embedded = embed_gate(&PAULI_X, 2, &[0]);
        let expected = tensor_product(&PAULI_X, &IDENTITY);
        assert!(approx_matrix_eq(&embedded, &expected, 1e-12));
    }

    #[test]
    fn embed_on_last_qubit_is_right_kronecker_factor() {
        let embedded = embed_gate(&PAULI_X, 2, &[1]);
        let expected = tensor_product(&IDENTITY, &PAULI_X);
        assert!(approx_matrix_eq(&embedded, &expected, 1e-12));
    }

    #[test]
    fn embed_of_full_width_gate_is_the_gate() {
        let embedded = embed_gate(&CNOT, 2, &[0, 1]);
        assert!(approx_matrix_eq(&embedded, &CNOT, 1e-12));
    }

    #[test]
    fn embed_with_reversed_targets_conjugates_by_swap() {
        // CNOT with control q1, target q0 equals SWAP · CNOT · SWAP.
        let reversed = embed_gate(&CNOT, 2, &[1, 0]);
        let expected = matrix_multiply(&SWAP.to_vec(), &matrix_multiply(&CNOT, &SWAP));
        assert!(approx_matrix_eq(&reversed, &expected, 1e-12));
    }

    #[test]
    fn embed_in_middle_of_three_qubits() {
        let embedded = embed_gate(&HADAMARD, 3, &[1]);
        let expected = tensor_product(&tensor_product(&IDENTITY, &HADAMARD), &IDENTITY);
        assert!(approx_matrix_eq(&embedded, &expected, 1e-12));
    }

    #[test]
    fn unitarity_and_hermiticity_checks() {
        assert!(is_unitary(&HADAMARD, 1e-10));
        assert!(is_unitary(&CNOT, 1e-10));
        assert!(is_hermitian(&PAULI_Z, 1e-10));

        let shear = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        ];
        assert!(!is_unitary(&shear, 1e-10));
    }

    #[test]
    fn trace_of_paulis_vanishes() {
        assert_relative_eq!(matrix_trace(&PAULI_X).norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(matrix_trace(&PAULI_Z).norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(matrix_trace(&IDENTITY).re, 2.0, epsilon = 1e-12);
    }
}
