//! Reconstruct and print the Bell-state preparation unitary.
//!
//! Run with `cargo run --example bell_unitary`.

use qompose_core::{Circuit, QubitId};
use qompose_gates::standard::{CNot, Hadamard};
use qompose_unitary::reconstruct;
use std::sync::Arc;

fn main() {
    let q0 = QubitId::new(0);
    let q1 = QubitId::new(1);

    let mut circuit = Circuit::new(2);
    circuit.add_gate(Arc::new(Hadamard), &[q0]).unwrap();
    circuit.add_gate(Arc::new(CNot), &[q0, q1]).unwrap();

    println!("{circuit}");

    let unitary = reconstruct(&circuit).unwrap();
    println!("{unitary}");
    println!("unitary within 1e-10: {}", unitary.is_unitary(1e-10));
}
