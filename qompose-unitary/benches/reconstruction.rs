//! Reconstruction throughput across register sizes and gate arities

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qompose_core::{Circuit, QubitId};
use qompose_gates::standard::{CNot, Hadamard, RotationZ, Toffoli};
use qompose_unitary::reconstruct;
use std::sync::Arc;

fn q(i: usize) -> QubitId {
    QubitId::new(i)
}

/// H on every qubit, then a CNOT chain down the register.
fn ghz_circuit(num_qubits: usize) -> Circuit {
    let mut circuit = Circuit::with_capacity(num_qubits, 2 * num_qubits);
    for i in 0..num_qubits {
        circuit.add_gate(Arc::new(Hadamard), &[q(i)]).unwrap();
    }
    for i in 0..num_qubits - 1 {
        circuit.add_gate(Arc::new(CNot), &[q(i), q(i + 1)]).unwrap();
    }
    circuit
}

/// Dense single-qubit layers: `depth` rounds of RZ on every qubit.
fn rotation_layers(num_qubits: usize, depth: usize) -> Circuit {
    let mut circuit = Circuit::with_capacity(num_qubits, num_qubits * depth);
    for layer in 0..depth {
        for i in 0..num_qubits {
            let theta = 0.1 * (layer * num_qubits + i) as f64;
            circuit
                .add_gate(Arc::new(RotationZ::new(theta)), &[q(i)])
                .unwrap();
        }
    }
    circuit
}

fn bench_ghz(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghz");
    for num_qubits in [4, 6, 8] {
        let circuit = ghz_circuit(num_qubits);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            &circuit,
            |b, circuit| b.iter(|| reconstruct(black_box(circuit)).unwrap()),
        );
    }
    group.finish();
}

fn bench_rotation_layers(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation_layers");
    for num_qubits in [4, 6, 8] {
        let circuit = rotation_layers(num_qubits, 10);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            &circuit,
            |b, circuit| b.iter(|| reconstruct(black_box(circuit)).unwrap()),
        );
    }
    group.finish();
}

fn bench_wide_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("toffoli_chain");
    for num_qubits in [4, 6, 8] {
        let mut circuit = Circuit::new(num_qubits);
        for i in 0..num_qubits - 2 {
            circuit
                .add_gate(Arc::new(Toffoli), &[q(i), q(i + 1), q(i + 2)])
                .unwrap();
        }
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            &circuit,
            |b, circuit| b.iter(|| reconstruct(black_box(circuit)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_ghz, bench_rotation_layers, bench_wide_gates);
criterion_main!(benches);
