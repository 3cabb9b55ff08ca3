//! Dense unitary matrix result type

use num_complex::Complex64;
use qompose_gates::matrix_ops;
use std::fmt;

/// The dense matrix of a composed circuit.
///
/// Row-major 2^N × 2^N buffer under the workspace register convention
/// (qubit 0 is the most significant bit of a basis index). Produced by
/// [`reconstruct`](crate::reconstruct) or by draining an
/// [`Accumulator`](crate::Accumulator); immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Unitary {
    num_qubits: usize,
    dim: usize,
    data: Vec<Complex64>,
}

impl Unitary {
    pub(crate) fn from_parts(num_qubits: usize, dim: usize, data: Vec<Complex64>) -> Self {
        debug_assert_eq!(dim, 1usize << num_qubits);
        debug_assert_eq!(data.len(), dim * dim);
        Self {
            num_qubits,
            dim,
            data,
        }
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

    /// Entry at `row`, `col`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        assert!(row < self.dim && col < self.dim, "index out of range");
        self.data[row * self.dim + col]
    }

    /// The flat row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Consume into the flat row-major buffer.
    pub fn into_vec(self) -> Vec<Complex64> {
        self.data
    }

    /// Conjugate transpose U†.
    pub fn adjoint(&self) -> Self {
        Self {
            num_qubits: self.num_qubits,
            dim: self.dim,
            data: matrix_ops::matrix_adjoint(&self.data),
        }
    }

    /// Whether U†·U ≈ I within `tolerance`.
    ///
    /// Reconstruction never checks this itself; it holds whenever every
    /// input gate matrix was unitary.
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        matrix_ops::is_unitary(&self.data, tolerance)
    }

    /// Element-wise comparison against another matrix within `tolerance`.
    pub fn approx_eq(&self, other: &[Complex64], tolerance: f64) -> bool {
        matrix_ops::approx_matrix_eq(&self.data, other, tolerance)
    }
}

impl fmt::Display for Unitary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Unitary({} qubits, {}x{})",
            self.num_qubits, self.dim, self.dim
        )?;
        for row in 0..self.dim {
            write!(f, "  [")?;
            for col in 0..self.dim {
                if col > 0 {
                    write!(f, ", ")?;
                }
                let v = self.data[row * self.dim + col];
                write!(f, "{:+.3}{:+.3}i", v.re, v.im)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
