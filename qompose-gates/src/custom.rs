//! User-supplied matrix gates

use crate::matrix_ops;
use num_complex::Complex64;
use qompose_core::Gate;
use thiserror::Error;

/// Errors raised when constructing a [`CustomGate`].
#[derive(Debug, Error)]
pub enum CustomGateError {
    /// The buffer is not a square matrix of dimension 2^k.
    #[error("gate '{name}' matrix has {len} entries; expected a square matrix of dimension 2^k")]
    InvalidDimension { name: String, len: usize },

    /// The matrix contains a NaN or infinite entry.
    #[error("gate '{name}' matrix contains a non-finite entry")]
    NonFiniteEntry { name: String },

    /// The gate name is empty.
    #[error("gate name must not be empty")]
    EmptyName,
}

/// A gate defined by an arbitrary caller-supplied matrix.
///
/// Construction checks the shape (square, dimension a power of two, at
/// least one qubit) and that every entry is finite. Unitarity is NOT
/// checked: a non-unitary matrix is accepted and simply produces a
/// non-unitary composite, matching the garbage-in/garbage-out stance of
/// the reconstruction pipeline. Use [`CustomGate::is_unitary`] to check
/// explicitly.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use qompose_core::Gate;
/// use qompose_gates::CustomGate;
///
/// let h = std::f64::consts::FRAC_1_SQRT_2;
/// let gate = CustomGate::new(
///     "MyH",
///     vec![
///         Complex64::new(h, 0.0), Complex64::new(h, 0.0),
///         Complex64::new(h, 0.0), Complex64::new(-h, 0.0),
///     ],
/// )
/// .unwrap();
/// assert_eq!(gate.num_qubits(), 1);
/// assert!(gate.is_unitary(1e-10));
/// ```
#[derive(Debug, Clone)]
pub struct CustomGate {
    name: String,
    num_qubits: usize,
    matrix: Vec<Complex64>,
}

impl CustomGate {
    /// Create a gate from a flat row-major matrix.
    pub fn new(name: impl Into<String>, matrix: Vec<Complex64>) -> Result<Self, CustomGateError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CustomGateError::EmptyName);
        }

        let dim = (matrix.len() as f64).sqrt().round() as usize;
        if dim < 2 || dim * dim != matrix.len() || !dim.is_power_of_two() {
            return Err(CustomGateError::InvalidDimension {
                name,
                len: matrix.len(),
            });
        }

        if matrix.iter().any(|v| !v.re.is_finite() || !v.im.is_finite()) {
            return Err(CustomGateError::NonFiniteEntry { name });
        }

        Ok(Self {
            name,
            num_qubits: dim.trailing_zeros() as usize,
            matrix,
        })
    }

    /// Whether the stored matrix is unitary within `tolerance`.
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        matrix_ops::is_unitary(&self.matrix, tolerance)
    }
}

impl Gate for CustomGate {
    fn name(&self) -> &str {
        &self.name
    }

    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn matrix(&self) -> Vec<Complex64> {
        self.matrix.clone()
    }

    fn is_hermitian(&self) -> bool {
        matrix_ops::is_hermitian(&self.matrix, 1e-12)
    }
}
