//! Gate matrices as flat row-major buffers
//!
//! Constants for the fixed gates, generator functions for the
//! parameterized ones. A k-qubit matrix is stored as `[Complex64; 4^k]`
//! in row-major order; the first target qubit is the most significant
//! bit of the local basis index.

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;
const H: Complex64 = Complex64::new(INV_SQRT2, 0.0);
const NEG_H: Complex64 = Complex64::new(-INV_SQRT2, 0.0);

// Single-qubit matrices (2x2, 4 entries)

/// Identity.
pub const IDENTITY: [Complex64; 4] = [ONE, ZERO, ZERO, ONE];

/// Hadamard: 1/√2 [[1, 1], [1, -1]].
pub const HADAMARD: [Complex64; 4] = [H, H, H, NEG_H];

/// Pauli-X (bit flip).
pub const PAULI_X: [Complex64; 4] = [ZERO, ONE, ONE, ZERO];

/// Pauli-Y.
pub const PAULI_Y: [Complex64; 4] = [ZERO, NEG_I, I, ZERO];

/// Pauli-Z (phase flip).
pub const PAULI_Z: [Complex64; 4] = [ONE, ZERO, ZERO, NEG_ONE];

/// S (√Z): diag(1, i).
pub const S_GATE: [Complex64; 4] = [ONE, ZERO, ZERO, I];

/// S†: diag(1, -i).
pub const S_DAGGER: [Complex64; 4] = [ONE, ZERO, ZERO, NEG_I];

/// T (π/8): diag(1, e^{iπ/4}).
pub const T_GATE: [Complex64; 4] = [ONE, ZERO, ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)];

/// T†: diag(1, e^{-iπ/4}).
pub const T_DAGGER: [Complex64; 4] = [ONE, ZERO, ZERO, Complex64::new(INV_SQRT2, -INV_SQRT2)];

/// √X: 1/2 [[1+i, 1-i], [1-i, 1+i]].
pub const SQRT_X: [Complex64; 4] = [
    Complex64::new(0.5, 0.5),
    Complex64::new(0.5, -0.5),
    Complex64::new(0.5, -0.5),
    Complex64::new(0.5, 0.5),
];

// Two-qubit matrices (4x4, 16 entries). First target = control where
// the gate has one, and always the most significant local bit.

/// Controlled-NOT.
#[rustfmt::skip]
pub const CNOT: [Complex64; 16] = [
    ONE,  ZERO, ZERO, ZERO,
    ZERO, ONE,  ZERO, ZERO,
    ZERO, ZERO, ZERO, ONE,
    ZERO, ZERO, ONE,  ZERO,
];

/// Controlled-Z.
#[rustfmt::skip]
pub const CZ: [Complex64; 16] = [
    ONE,  ZERO, ZERO, ZERO,
    ZERO, ONE,  ZERO, ZERO,
    ZERO, ZERO, ONE,  ZERO,
    ZERO, ZERO, ZERO, NEG_ONE,
];

/// Controlled-Y.
#[rustfmt::skip]
pub const CY: [Complex64; 16] = [
    ONE,  ZERO, ZERO, ZERO,
    ZERO, ONE,  ZERO, ZERO,
    ZERO, ZERO, ZERO, NEG_I,
    ZERO, ZERO, I,    ZERO,
];

/// SWAP.
#[rustfmt::skip]
pub const SWAP: [Complex64; 16] = [
    ONE,  ZERO, ZERO, ZERO,
    ZERO, ZERO, ONE,  ZERO,
    ZERO, ONE,  ZERO, ZERO,
    ZERO, ZERO, ZERO, ONE,
];

/// iSWAP.
#[rustfmt::skip]
pub const ISWAP: [Complex64; 16] = [
    ONE,  ZERO, ZERO, ZERO,
    ZERO, ZERO, I,    ZERO,
    ZERO, I,    ZERO, ZERO,
    ZERO, ZERO, ZERO, ONE,
];

// Three-qubit matrices (8x8, 64 entries)

/// Toffoli (CCNOT): flips the third qubit when both controls are |1⟩.
#[rustfmt::skip]
pub const TOFFOLI: [Complex64; 64] = [
    ONE,  ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO,
    ZERO, ONE,  ZERO, ZERO, ZERO, ZERO, ZERO, ZERO,
    ZERO, ZERO, ONE,  ZERO, ZERO, ZERO, ZERO, ZERO,
    ZERO, ZERO, ZERO, ONE,  ZERO, ZERO, ZERO, ZERO,
    ZERO, ZERO, ZERO, ZERO, ONE,  ZERO, ZERO, ZERO,
    ZERO, ZERO, ZERO, ZERO, ZERO, ONE,  ZERO, ZERO,
    ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE,
    ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE,  ZERO,
];

/// Fredkin (CSWAP): swaps the last two qubits when the control is |1⟩.
#[rustfmt::skip]
pub const FREDKIN: [Complex64; 64] = [
    ONE,  ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO,
    ZERO, ONE,  ZERO, ZERO, ZERO, ZERO, ZERO, ZERO,
    ZERO, ZERO, ONE,  ZERO, ZERO, ZERO, ZERO, ZERO,
    ZERO, ZERO, ZERO, ONE,  ZERO, ZERO, ZERO, ZERO,
    ZERO, ZERO, ZERO, ZERO, ONE,  ZERO, ZERO, ZERO,
    ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE,  ZERO,
    ZERO, ZERO, ZERO, ZERO, ZERO, ONE,  ZERO, ZERO,
    ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ZERO, ONE,
];

// Parameterized generators

/// RX(θ) = exp(-iθX/2).
#[inline]
pub fn rotation_x(theta: f64) -> [Complex64; 4] {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        Complex64::new(cos, 0.0),
        Complex64::new(0.0, -sin),
        Complex64::new(0.0, -sin),
        Complex64::new(cos, 0.0),
    ]
}

/// RY(θ) = exp(-iθY/2).
#[inline]
pub fn rotation_y(theta: f64) -> [Complex64; 4] {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        Complex64::new(cos, 0.0),
        Complex64::new(-sin, 0.0),
        Complex64::new(sin, 0.0),
        Complex64::new(cos, 0.0),
    ]
}

/// RZ(θ) = exp(-iθZ/2) = diag(e^{-iθ/2}, e^{iθ/2}).
#[inline]
pub fn rotation_z(theta: f64) -> [Complex64; 4] {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        Complex64::new(cos, -sin),
        ZERO,
        ZERO,
        Complex64::new(cos, sin),
    ]
}

/// Phase gate P(θ) = diag(1, e^{iθ}).
#[inline]
pub fn phase(theta: f64) -> [Complex64; 4] {
    [ONE, ZERO, ZERO, Complex64::new(theta.cos(), theta.sin())]
}

/// U3(θ, φ, λ), the universal single-qubit gate.
#[inline]
pub fn u3(theta: f64, phi: f64, lambda: f64) -> [Complex64; 4] {
    let (sin, cos) = (theta / 2.0).sin_cos();
    let e_phi = Complex64::new(phi.cos(), phi.sin());
    let e_lambda = Complex64::new(lambda.cos(), lambda.sin());
    [
        Complex64::new(cos, 0.0),
        -e_lambda * sin,
        e_phi * sin,
        e_phi * e_lambda * cos,
    ]
}

/// Controlled phase CP(θ) = diag(1, 1, 1, e^{iθ}).
#[inline]
pub fn controlled_phase(theta: f64) -> [Complex64; 16] {
    let mut m = [ZERO; 16];
    m[0] = ONE;
    m[5] = ONE;
    m[10] = ONE;
    m[15] = Complex64::new(theta.cos(), theta.sin());
    m
}

/// RZZ(θ) = exp(-iθ Z⊗Z / 2) = diag(e^{-iθ/2}, e^{iθ/2}, e^{iθ/2}, e^{-iθ/2}).
#[inline]
pub fn rotation_zz(theta: f64) -> [Complex64; 16] {
    let (sin, cos) = (theta / 2.0).sin_cos();
    let e_neg = Complex64::new(cos, -sin);
    let e_pos = Complex64::new(cos, sin);
    let mut m = [ZERO; 16];
    m[0] = e_neg;
    m[5] = e_pos;
    m[10] = e_pos;
    m[15] = e_neg;
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_matrix_eq(a: &[Complex64], b: &[Complex64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert_relative_eq!(x.re, y.re, epsilon = 1e-12);
            assert_relative_eq!(x.im, y.im, epsilon = 1e-12);
        }
    }

    fn mul2(a: &[Complex64; 4], b: &[Complex64; 4]) -> [Complex64; 4] {
        let mut out = [ZERO; 4];
        for r in 0..2 {
            for c in 0..2 {
                for k in 0..2 {
                    out[r * 2 + c] += a[r * 2 + k] * b[k * 2 + c];
                }
            }
        }
        out
    }

    #[test]
    fn hadamard_is_self_inverse() {
        assert_matrix_eq(&mul2(&HADAMARD, &HADAMARD), &IDENTITY);
    }

    #[test]
    fn s_squares_to_z_and_t_squares_to_s() {
        assert_matrix_eq(&mul2(&S_GATE, &S_GATE), &PAULI_Z);
        assert_matrix_eq(&mul2(&T_GATE, &T_GATE), &S_GATE);
    }

    #[test]
    fn sqrt_x_squares_to_x() {
        assert_matrix_eq(&mul2(&SQRT_X, &SQRT_X), &PAULI_X);
    }

    #[test]
    fn daggers_invert_their_gates() {
        assert_matrix_eq(&mul2(&S_GATE, &S_DAGGER), &IDENTITY);
        assert_matrix_eq(&mul2(&T_GATE, &T_DAGGER), &IDENTITY);
    }

    #[test]
    fn rotations_at_zero_are_identity() {
        assert_matrix_eq(&rotation_x(0.0), &IDENTITY);
        assert_matrix_eq(&rotation_y(0.0), &IDENTITY);
        assert_matrix_eq(&rotation_z(0.0), &IDENTITY);
        assert_matrix_eq(&phase(0.0), &IDENTITY);
    }

    #[test]
    fn rotation_x_at_pi_is_x_up_to_phase() {
        let rx = rotation_x(std::f64::consts::PI);
        let expected: Vec<Complex64> = PAULI_X.iter().map(|v| NEG_I * v).collect();
        assert_matrix_eq(&rx, &expected);
    }

    #[test]
    fn u3_reduces_to_rotation_y() {
        assert_matrix_eq(&u3(0.3, 0.0, 0.0), &rotation_y(0.3));
    }

    #[test]
    fn cnot_permutes_the_control_on_block() {
        // |10⟩ <-> |11⟩, first qubit (most significant bit) is control
        assert_relative_eq!(CNOT[2 * 4 + 3].re, 1.0);
        assert_relative_eq!(CNOT[3 * 4 + 2].re, 1.0);
        assert_relative_eq!(CNOT[0].re, 1.0);
        assert_relative_eq!(CNOT[1 * 4 + 1].re, 1.0);
    }

    #[test]
    fn controlled_phase_at_pi_is_cz() {
        assert_matrix_eq(&controlled_phase(std::f64::consts::PI), &CZ);
    }
}
