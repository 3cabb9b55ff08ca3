//! Standard gate library for qompose
//!
//! Matrix-backed implementations of the common quantum gates, plus the
//! dense-matrix utilities the rest of the workspace (and its tests) are
//! built on.
//!
//! - [`matrices`]: flat row-major gate matrices as constants and
//!   generator functions
//! - [`standard`]: gate types implementing [`qompose_core::Gate`]
//! - [`custom`]: user-supplied matrix gates with shape validation
//! - [`matrix_ops`]: multiply / adjoint / Kronecker / embedding helpers
//!
//! All matrices follow the workspace register convention: qubit 0 (and a
//! gate's first target) is the most significant bit of a basis index.
//!
//! # Example
//! ```
//! use qompose_core::{Circuit, QubitId};
//! use qompose_gates::standard::{CNot, Hadamard};
//! use std::sync::Arc;
//!
//! let mut circuit = Circuit::new(2);
//! circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
//! circuit
//!     .add_gate(Arc::new(CNot), &[QubitId::new(0), QubitId::new(1)])
//!     .unwrap();
//! assert_eq!(circuit.len(), 2);
//! ```

pub mod custom;
pub mod matrices;
pub mod matrix_ops;
pub mod standard;

pub use custom::CustomGate;
pub use standard::*;
