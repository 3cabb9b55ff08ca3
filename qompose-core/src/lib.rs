//! Core circuit types for qompose
//!
//! This crate provides the types a circuit is made of:
//! - [`QubitId`]: type-safe register positions
//! - [`Gate`]: trait for matrix-backed quantum operations
//! - [`GateOp`]: a gate bound to the qubits it acts on
//! - [`Circuit`]: an ordered sequence of gate operations
//!
//! Every gate in this workspace exposes a dense matrix; the
//! `qompose-unitary` crate consumes circuits built from these types and
//! contracts them into a single unitary matrix.
//!
//! # Register convention
//!
//! Basis states are ordered |q0 q1 … q(N-1)⟩ with **qubit 0 as the most
//! significant bit** of a basis index. A single-qubit gate U on qubit i
//! of an N-qubit register therefore acts as I ⊗ … ⊗ U ⊗ … ⊗ I with i
//! identity factors on the left. Multi-qubit gate matrices index their
//! own 2^k space the same way: the first target is the most significant
//! local bit.
//!
//! # Example
//! ```
//! use qompose_core::{Circuit, QubitId};
//!
//! let circuit = Circuit::new(2);
//! assert_eq!(circuit.num_qubits(), 2);
//! assert!(circuit.is_empty());
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::Circuit;
pub use error::CircuitError;
pub use gate::{Gate, GateOp};
pub use num_complex::Complex64;
pub use qubit::QubitId;

/// Result alias for circuit construction and validation.
pub type Result<T> = std::result::Result<T, CircuitError>;
