//! Turning a Cube
//!
//! This example drives a cube store the way a presentation layer would:
//! one call per button press, reading the state back after every turn.
//!
//! Key concepts:
//! - Turning faces with the held direction toggle
//! - Explicit directions and move notation
//! - Rejecting unknown face identifiers without touching the cube
//! - Checkpointing and resuming
//!
//! Run with: LOG_LEVEL=debug cargo run --example turn_cube

use std::env::var;
use tracing_subscriber::fmt::fmt;
use twisty::core::{CubeState, FaceKey};
use twisty::{Checkpoint, CubeStore};

fn bootstrap() {
    let level = match var("LOG_LEVEL") {
        Ok(level) => match level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => level,
            _ => String::from("info"),
        },
        Err(_) => String::from("info"),
    };
    fmt().with_env_filter(level).init();
}

fn print_net(state: &CubeState) {
    let row = |face: FaceKey, i: usize| -> String {
        state
            .face(face)
            .grid()[i]
            .iter()
            .map(|cell| cell.color.symbol())
            .collect()
    };

    for i in 0..3 {
        println!("    {}", row(FaceKey::Up, i));
    }
    for i in 0..3 {
        println!(
            "{} {} {} {}",
            row(FaceKey::Left, i),
            row(FaceKey::Front, i),
            row(FaceKey::Right, i),
            row(FaceKey::Back, i)
        );
    }
    for i in 0..3 {
        println!("    {}", row(FaceKey::Down, i));
    }
}

fn main() {
    bootstrap();
    println!("=== Turning a Cube ===\n");

    let mut store = CubeStore::new();
    for face in [FaceKey::Right, FaceKey::Up] {
        store.turn(face);
    }
    println!("After R U:");
    print_net(store.state());

    store.toggle_direction();
    println!("\nDirection is now {}", store.direction());
    store.turn(FaceKey::Up);
    store.turn(FaceKey::Right);
    println!("After U' R': solved = {}", store.state().is_solved());

    if let Err(err) = store.turn_notation("M") {
        println!("\nRejected: {err}");
    }

    store.turn_notation("F").unwrap();
    let json = store.checkpoint().to_json().unwrap();
    println!("\nCheckpoint is {} bytes of JSON", json.len());

    let resumed = CubeStore::resume(Checkpoint::from_json(&json).unwrap()).unwrap();
    println!("Resumed after {} turns:", resumed.turn_count());
    print_net(resumed.state());

    println!("\n=== Example Complete ===");
}
