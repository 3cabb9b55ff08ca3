//! Standard gate types
//!
//! Unit structs for the fixed gates and small parameterized structs for
//! the rotation family, all implementing [`qompose_core::Gate`].

use crate::matrices;
use num_complex::Complex64;
use qompose_core::Gate;

/// Implements `Gate` for a unit struct backed by a constant matrix.
macro_rules! fixed_gate {
    ($gate:ty, $name:literal, $qubits:literal, $matrix:expr, hermitian: $herm:literal) => {
        impl Gate for $gate {
            fn name(&self) -> &str {
                $name
            }

            fn num_qubits(&self) -> usize {
                $qubits
            }

            fn matrix(&self) -> Vec<Complex64> {
                $matrix.to_vec()
            }

            fn is_hermitian(&self) -> bool {
                $herm
            }
        }
    };
}

// Single-qubit gates

/// Hadamard gate. H|0⟩ = (|0⟩ + |1⟩)/√2.
#[derive(Debug, Clone, Copy)]
pub struct Hadamard;
fixed_gate!(Hadamard, "H", 1, matrices::HADAMARD, hermitian: true);

/// Pauli-X gate (bit flip).
#[derive(Debug, Clone, Copy)]
pub struct PauliX;
fixed_gate!(PauliX, "X", 1, matrices::PAULI_X, hermitian: true);

/// Pauli-Y gate.
#[derive(Debug, Clone, Copy)]
pub struct PauliY;
fixed_gate!(PauliY, "Y", 1, matrices::PAULI_Y, hermitian: true);

/// Pauli-Z gate (phase flip).
#[derive(Debug, Clone, Copy)]
pub struct PauliZ;
fixed_gate!(PauliZ, "Z", 1, matrices::PAULI_Z, hermitian: true);

/// S gate, the square root of Z.
#[derive(Debug, Clone, Copy)]
pub struct SGate;
fixed_gate!(SGate, "S", 1, matrices::S_GATE, hermitian: false);

/// Adjoint of the S gate.
#[derive(Debug, Clone, Copy)]
pub struct SDagger;
fixed_gate!(SDagger, "S†", 1, matrices::S_DAGGER, hermitian: false);

/// T gate, the square root of S.
#[derive(Debug, Clone, Copy)]
pub struct TGate;
fixed_gate!(TGate, "T", 1, matrices::T_GATE, hermitian: false);

/// Adjoint of the T gate.
#[derive(Debug, Clone, Copy)]
pub struct TDagger;
fixed_gate!(TDagger, "T†", 1, matrices::T_DAGGER, hermitian: false);

/// Square root of the Pauli-X gate.
#[derive(Debug, Clone, Copy)]
pub struct SqrtX;
fixed_gate!(SqrtX, "√X", 1, matrices::SQRT_X, hermitian: false);

// Two-qubit gates. The first target is the control where there is one.

/// Controlled-NOT gate.
#[derive(Debug, Clone, Copy)]
pub struct CNot;
fixed_gate!(CNot, "CNOT", 2, matrices::CNOT, hermitian: true);

/// Controlled-Z gate.
#[derive(Debug, Clone, Copy)]
pub struct CZGate;
fixed_gate!(CZGate, "CZ", 2, matrices::CZ, hermitian: true);

/// Controlled-Y gate.
#[derive(Debug, Clone, Copy)]
pub struct CYGate;
fixed_gate!(CYGate, "CY", 2, matrices::CY, hermitian: true);

/// SWAP gate.
#[derive(Debug, Clone, Copy)]
pub struct Swap;
fixed_gate!(Swap, "SWAP", 2, matrices::SWAP, hermitian: true);

/// iSWAP gate.
#[derive(Debug, Clone, Copy)]
pub struct ISwap;
fixed_gate!(ISwap, "iSWAP", 2, matrices::ISWAP, hermitian: false);

// Three-qubit gates

/// Toffoli (CCNOT) gate.
#[derive(Debug, Clone, Copy)]
pub struct Toffoli;
fixed_gate!(Toffoli, "CCNOT", 3, matrices::TOFFOLI, hermitian: true);

/// Fredkin (CSWAP) gate.
#[derive(Debug, Clone, Copy)]
pub struct Fredkin;
fixed_gate!(Fredkin, "CSWAP", 3, matrices::FREDKIN, hermitian: true);

// Parameterized gates

/// Rotation about the X axis by an angle in radians.
#[derive(Debug, Clone, Copy)]
pub struct RotationX {
    theta: f64,
}

impl RotationX {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }
}

impl Gate for RotationX {
    fn name(&self) -> &str {
        "RX"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn matrix(&self) -> Vec<Complex64> {
        matrices::rotation_x(self.theta).to_vec()
    }
}

/// Rotation about the Y axis by an angle in radians.
#[derive(Debug, Clone, Copy)]
pub struct RotationY {
    theta: f64,
}

impl RotationY {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }
}

impl Gate for RotationY {
    fn name(&self) -> &str {
        "RY"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn matrix(&self) -> Vec<Complex64> {
        matrices::rotation_y(self.theta).to_vec()
    }
}

/// Rotation about the Z axis by an angle in radians.
#[derive(Debug, Clone, Copy)]
pub struct RotationZ {
    theta: f64,
}

impl RotationZ {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }
}

impl Gate for RotationZ {
    fn name(&self) -> &str {
        "RZ"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn matrix(&self) -> Vec<Complex64> {
        matrices::rotation_z(self.theta).to_vec()
    }
}

/// Phase gate: |1⟩ picks up e^{iθ}.
#[derive(Debug, Clone, Copy)]
pub struct Phase {
    theta: f64,
}

impl Phase {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl Gate for Phase {
    fn name(&self) -> &str {
        "P"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn matrix(&self) -> Vec<Complex64> {
        matrices::phase(self.theta).to_vec()
    }
}

/// Controlled phase: |11⟩ picks up e^{iθ}.
#[derive(Debug, Clone, Copy)]
pub struct ControlledPhase {
    theta: f64,
}

impl ControlledPhase {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl Gate for ControlledPhase {
    fn name(&self) -> &str {
        "CP"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn matrix(&self) -> Vec<Complex64> {
        matrices::controlled_phase(self.theta).to_vec()
    }
}

/// Two-qubit ZZ rotation.
#[derive(Debug, Clone, Copy)]
pub struct RotationZZ {
    theta: f64,
}

impl RotationZZ {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl Gate for RotationZZ {
    fn name(&self) -> &str {
        "RZZ"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn matrix(&self) -> Vec<Complex64> {
        matrices::rotation_zz(self.theta).to_vec()
    }
}
