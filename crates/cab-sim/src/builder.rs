//! Scenario assembly: seeded sampling of passengers, cars, and edge costs.
//!
//! # Draw order
//!
//! Reproducibility rests on one fixed sequence of draws from the scenario
//! RNG:
//!
//! 1. passenger pick-up points (distinct cells, kept in draw order),
//! 2. passenger drop-off points (one per pick-up, resampled until distinct
//!    from that pick-up),
//! 3. car positions (distinct cells, draw order),
//! 4. car energies (uniform in `[0, rows + cols - 2]`),
//! 5. edge costs ([`Topology::init_random_costs`] traversal order).
//!
//! Distinctness uses rejection sampling against an insertion-ordered `Vec`,
//! so entity ids always match draw order.

use cab_core::{CarId, GridPoint, PassengerId, SimRng};
use cab_fleet::{Car, Passenger};
use cab_grid::Topology;

use crate::config::ScenarioConfig;
use crate::error::{SimError, SimResult};

/// Everything `Simulation` owns at tick 0, freshly sampled from the seed.
pub(crate) struct Scenario {
    pub topology:   Topology,
    pub cars:       Vec<Car>,
    pub passengers: Vec<Passenger>,
}

pub(crate) fn build_scenario(config: &ScenarioConfig) -> SimResult<Scenario> {
    let mut topology = Topology::new(config.rows, config.cols)?;
    let cells = topology.cell_count();

    if config.num_passengers > cells {
        return Err(SimError::CountExceedsCells {
            what:  "passenger",
            count: config.num_passengers,
            cells,
        });
    }
    if config.num_cars > cells {
        return Err(SimError::CountExceedsCells {
            what:  "car",
            count: config.num_cars,
            cells,
        });
    }

    let mut rng = SimRng::new(config.seed);

    // 1. Pick-up points.
    let pickups = sample_distinct_points(&mut rng, config, config.num_passengers);

    // 2. Drop-off points, one per pick-up in order.
    let passengers = pickups
        .into_iter()
        .enumerate()
        .map(|(i, pickup)| {
            let dropoff = loop {
                let d = sample_point(&mut rng, config);
                if d != pickup {
                    break d;
                }
            };
            Passenger::new(PassengerId(i as u32), pickup, dropoff)
        })
        .collect();

    // 3. Car positions, then 4. energies — two full passes, not interleaved.
    let positions = sample_distinct_points(&mut rng, config, config.num_cars);
    let energies: Vec<u32> = (0..config.num_cars)
        .map(|_| rng.gen_range(0..=config.max_energy()))
        .collect();
    let cars = positions
        .into_iter()
        .zip(energies)
        .enumerate()
        .map(|(i, (pos, energy))| Car::new(CarId(i as u32), pos, energy))
        .collect();

    // 5. Edge costs.
    topology.init_random_costs(&mut rng);

    Ok(Scenario {
        topology,
        cars,
        passengers,
    })
}

fn sample_point(rng: &mut SimRng, config: &ScenarioConfig) -> GridPoint {
    GridPoint::new(
        rng.gen_range(0..config.rows),
        rng.gen_range(0..config.cols),
    )
}

/// Rejection-sample `n` distinct cells, preserving draw order.
fn sample_distinct_points(rng: &mut SimRng, config: &ScenarioConfig, n: usize) -> Vec<GridPoint> {
    let mut points: Vec<GridPoint> = Vec::with_capacity(n);
    while points.len() < n {
        let p = sample_point(rng, config);
        if !points.contains(&p) {
            points.push(p);
        }
    }
    points
}
