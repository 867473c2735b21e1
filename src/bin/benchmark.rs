//! Move throughput benchmark, serial vs. parallel across many cubes.
//! Every cube's lattice invariant is checked after its sequence.

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rubiks_cube::domain::{CubeletRegistry, MoveId, engine};

fn random_sequence(seed: u64, length: usize) -> Vec<MoveId> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..length)
        .filter_map(|_| MoveId::ALL.choose(&mut rng).copied())
        .collect()
}

/// Apply the sequence, then its inverse, and report whether the cube came back solved
fn run_cube(moves: &[MoveId]) -> bool {
    let mut registry = CubeletRegistry::new();
    let inverse: Vec<MoveId> = moves.iter().rev().map(|m| m.inverse()).collect();
    engine::apply_sequence(&mut registry, moves).is_ok()
        && registry.validate().is_ok()
        && engine::apply_sequence(&mut registry, &inverse).is_ok()
        && registry.is_solved()
}

fn benchmark_serial(sequences: &[Vec<MoveId>]) -> (f64, usize) {
    let start = Instant::now();
    let ok = sequences.iter().filter(|s| run_cube(s)).count();
    (start.elapsed().as_secs_f64() * 1000.0, ok)
}

fn benchmark_parallel(sequences: &[Vec<MoveId>]) -> (f64, usize) {
    let start = Instant::now();
    let ok = sequences.par_iter().filter(|s| run_cube(s)).count();
    (start.elapsed().as_secs_f64() * 1000.0, ok)
}

fn main() {
    println!("=== Cube Move Throughput Benchmark ===\n");

    let cube_counts = [100, 1_000, 10_000];
    let sequence_length = 200;

    println!("{:>8} {:>12} {:>12} {:>10} {:>14}", "Cubes", "Serial", "Parallel", "Speedup", "Moves/s (par)");
    println!("{:-<60}", "");

    for cubes in cube_counts {
        let sequences: Vec<Vec<MoveId>> = (0..cubes as u64)
            .map(|seed| random_sequence(seed, sequence_length))
            .collect();

        let (serial_ms, serial_ok) = benchmark_serial(&sequences);
        let (parallel_ms, parallel_ok) = benchmark_parallel(&sequences);

        // Each cube applies the sequence and its inverse
        let moves = (cubes * sequence_length * 2) as f64;
        println!(
            "{:>8} {:>10.1}ms {:>10.1}ms {:>9.1}x {:>14.0}",
            cubes,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON),
            moves / (parallel_ms / 1000.0).max(f64::EPSILON),
        );

        if serial_ok != cubes || parallel_ok != cubes {
            eprintln!("  invariant check failed: {serial_ok}/{cubes} serial, {parallel_ok}/{cubes} parallel");
        }
    }
}
