//! Plume Quickstart — build a field, add sources, step once, resize.
//!
//! Demonstrates:
//!   1. Creating a 5x5 `f32` field engine
//!   2. Setting constants and registering sources
//!   3. Seeding initial cell values
//!   4. Stepping the neighbour-average update
//!   5. Resizing with data preservation
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use plume_engine::FieldEngine;
use plume_grid::Grid;
use tracing_subscriber::EnvFilter;

// ─── Rendering ──────────────────────────────────────────────────

fn print_grid(grid: &Grid<f32>) {
    for row in grid.rows_iter() {
        print!("| ");
        for v in row {
            print!("{v:5.1} | ");
        }
        println!();
    }
}

// ─── Main ───────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Plume Quickstart ===\n");

    // 1. A 5x5 field, all zeros.
    let mut engine = FieldEngine::<f32>::new(5, 5);
    println!("Created {}x{} f32 field.\n", engine.rows(), engine.cols());

    // 2. Constants and sources.
    engine.set_constants(1.0, 1.0, 1.0);
    for value in [100.0, 50.0] {
        engine.add_source(value);
        println!("Added source {value:.1}.");
    }
    println!();

    // 3. Initial values.
    engine.set(2, 2, 100.0);
    engine.set(4, 0, 50.0);
    println!("--- Initial field (step 0) ---");
    print_grid(engine.grid());

    // 4. One step.
    engine.step();
    println!(
        "\n--- After step {} ({} interior cells, {} us) ---",
        engine.generation(),
        engine.last_metrics().interior_cells,
        engine.last_metrics().total_us,
    );
    print_grid(engine.grid());

    // 5. Grow to 6x6; existing values are kept.
    engine.resize(6, 6);
    println!("\n--- Resized to {}x{} ---", engine.rows(), engine.cols());
    print_grid(engine.grid());

    println!("\nDone.");
}
