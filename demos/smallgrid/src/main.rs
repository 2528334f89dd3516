//! smallgrid — smallest runnable scenario for the cabsim fleet simulation.
//!
//! Samples 3 cars and 3 passengers on a 10×10 weighted grid from a fixed
//! seed, dispatches the fleet first-come-first-served, and runs the tick
//! loop to completion while streaming snapshots to CSV.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use cab_core::GridPoint;
use cab_grid::{GreedyPlanner, PathPlanner};
use cab_output::{CsvWriter, SimOutputObserver};
use cab_sim::{ScenarioConfig, Simulation};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                    u64   = 0;
const ROWS:                    i32   = 10;
const COLS:                    i32   = 10;
const NUM_CARS:                usize = 3;
const NUM_PASSENGERS:          usize = 3;
const TOTAL_TICKS:             u64   = 40; // ample for any 10×10 delivery
const SNAPSHOT_INTERVAL_TICKS: u64   = 1;  // snapshot every tick

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== smallgrid — cabsim fleet simulation ===");
    println!(
        "Grid: {ROWS}×{COLS}  |  Cars: {NUM_CARS}  |  Passengers: {NUM_PASSENGERS}  |  Seed: {SEED}"
    );
    println!();

    // 1. Sample the scenario from the seed.
    let config = ScenarioConfig {
        seed:                    SEED,
        rows:                    ROWS,
        cols:                    COLS,
        num_cars:                NUM_CARS,
        num_passengers:          NUM_PASSENGERS,
        total_ticks:             TOTAL_TICKS,
        snapshot_interval_ticks: SNAPSHOT_INTERVAL_TICKS,
    };
    let mut sim = Simulation::from_config(config, GreedyPlanner)?;

    // 2. Show the planner on a sample pair.
    let path = GreedyPlanner.plan(sim.topology(), GridPoint::new(0, 0), GridPoint::new(5, 5))?;
    println!("Planned path (0, 0) → (5, 5): {} steps", path.len());

    // 3. First-come dispatch of the whole fleet.
    let paired = sim.dispatch_idle()?;
    println!("Dispatched {paired} car/passenger pairings");
    println!();

    // 4. Set up CSV output.
    std::fs::create_dir_all("output/smallgrid")?;
    let writer = CsvWriter::new(Path::new("output/smallgrid"))?;
    let mut obs = SimOutputObserver::new(writer);

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!(
        "Simulation complete in {:.3} s ({} ticks)",
        elapsed.as_secs_f64(),
        sim.tick().0
    );
    println!(
        "Delivered: {}  |  Accumulated penalty: {}",
        sim.delivered(),
        sim.total_penalty()
    );
    println!();

    // 7. Final fleet tables.
    println!("{:<6} {:<14} {:<10} {:<8} {:<6}", "Car", "Status", "Position", "Energy", "Moves");
    println!("{}", "-".repeat(48));
    for car in sim.cars() {
        println!(
            "{:<6} {:<14} {:<10} {:<8} {:<6}",
            car.id().0,
            car.status().to_string(),
            car.position().to_string(),
            car.energy(),
            car.travel_distance(),
        );
    }
    println!();
    println!("{:<10} {:<12} {:<10} {:<10}", "Passenger", "Status", "Pickup", "Dropoff");
    println!("{}", "-".repeat(44));
    for p in sim.passengers() {
        println!(
            "{:<10} {:<12} {:<10} {:<10}",
            p.id().0,
            p.status().to_string(),
            p.pickup().to_string(),
            p.dropoff().to_string(),
        );
    }

    Ok(())
}
