//! Dense unitary reconstruction for quantum circuits
//!
//! Given a [`Circuit`](qompose_core::Circuit), an ordered sequence of
//! matrix-backed gate operations on an N-qubit register, this crate
//! computes the dense 2^N × 2^N unitary of the composite transformation.
//! Each gate is contracted into a running [`Accumulator`] at a cost of
//! O(4^N · 2^k) per k-qubit gate, avoiding both the explicit embedded
//! matrices and the O(8^N) products of the naive
//! embed-and-multiply composition.
//!
//! The computation is pure, synchronous and single-threaded; memory is
//! O(4^N) for the accumulator, which bounds practical register sizes
//! (see [`ReconstructConfig`]). Validation is strict: mismatched matrix
//! dimensions, out-of-range targets and duplicate targets fail with an
//! error naming the offending operation. Unitarity of the inputs is not
//! checked; composing non-unitary matrices yields a non-unitary result.
//!
//! # Example
//! ```
//! use qompose_core::{Circuit, QubitId};
//! use qompose_gates::standard::{CNot, Hadamard};
//! use qompose_unitary::reconstruct;
//! use std::sync::Arc;
//!
//! // Bell-state preparation: H on q0, then CNOT(q0 -> q1).
//! let mut circuit = Circuit::new(2);
//! circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
//! circuit
//!     .add_gate(Arc::new(CNot), &[QubitId::new(0), QubitId::new(1)])
//!     .unwrap();
//!
//! let unitary = reconstruct(&circuit).unwrap();
//! assert!(unitary.is_unitary(1e-10));
//! ```

pub mod accumulator;
pub mod error;
pub mod reconstruct;
pub mod unitary;

pub use accumulator::{Accumulator, HARD_MAX_QUBITS};
pub use error::{Result, UnitaryError};
pub use reconstruct::{reconstruct, reconstruct_with, ReconstructConfig, DEFAULT_MAX_QUBITS};
pub use unitary::Unitary;
