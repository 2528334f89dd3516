//! The `Simulation` struct: fleet state, dispatch, and the tick loop.

use cab_core::{CarId, PassengerId, Tick};
use cab_fleet::{Car, CarStatus, MoveOutcome, Passenger, PassengerStatus};
use cab_grid::{GridError, PathPlanner, Topology};

use crate::builder::{Scenario, build_scenario};
use crate::config::ScenarioConfig;
use crate::error::{SimError, SimResult};
use crate::observer::SimObserver;

/// Penalty added to the run's total when a car exhausts its energy before
/// completing a delivery.  Consumed by external reward/accounting logic, not
/// enforced internally.
// TODO: make the penalty configurable per scenario.
pub const FAIL_PENALTY: u64 = 100;

/// The fleet manager: owns the topology, cars, and passengers, and drives
/// per-tick advancement.
///
/// `Simulation<P>` is generic over the planner so applications can swap
/// routing strategies at compile time with no runtime overhead.  Cars and
/// passengers live in insertion-order vectors; an entity's id equals its
/// index, and cars reference their passenger by id only.
pub struct Simulation<P: PathPlanner> {
    config:        ScenarioConfig,
    planner:       P,
    topology:      Topology,
    cars:          Vec<Car>,
    passengers:    Vec<Passenger>,
    tick:          Tick,
    total_penalty: u64,
    delivered:     u64,
}

impl<P: PathPlanner> Simulation<P> {
    /// Sample a fresh scenario from `config` (see the draw-order contract in
    /// [`builder`][crate::builder]) and wrap it in a ready-to-run simulation.
    pub fn from_config(config: ScenarioConfig, planner: P) -> SimResult<Self> {
        let Scenario {
            topology,
            cars,
            passengers,
        } = build_scenario(&config)?;
        Ok(Self {
            config,
            planner,
            topology,
            cars,
            passengers,
            tick:          Tick::ZERO,
            total_penalty: 0,
            delivered:     0,
        })
    }

    /// Assemble a simulation from pre-built entities instead of sampling.
    ///
    /// Used by tests and by collaborators that replay recorded scenarios.
    /// Every entity position must lie on `topology`.
    pub fn from_parts(
        config:     ScenarioConfig,
        planner:    P,
        topology:   Topology,
        cars:       Vec<Car>,
        passengers: Vec<Passenger>,
    ) -> SimResult<Self> {
        for car in &cars {
            if !topology.is_valid(car.position()) {
                return Err(GridError::OutOfBounds(car.position()).into());
            }
        }
        for p in &passengers {
            if !topology.is_valid(p.pickup()) {
                return Err(GridError::OutOfBounds(p.pickup()).into());
            }
            if !topology.is_valid(p.dropoff()) {
                return Err(GridError::OutOfBounds(p.dropoff()).into());
            }
        }
        Ok(Self {
            config,
            planner,
            topology,
            cars,
            passengers,
            tick:          Tick::ZERO,
            total_penalty: 0,
            delivered:     0,
        })
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// All cars in insertion order (index == id).
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// All passengers in insertion order (index == id).
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Accumulated failure penalty across all stranded deliveries.
    pub fn total_penalty(&self) -> u64 {
        self.total_penalty
    }

    /// Passengers delivered to their drop-off point so far.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn car(&self, id: CarId) -> SimResult<&Car> {
        self.cars.get(id.index()).ok_or(SimError::UnknownCar(id))
    }

    pub fn passenger(&self, id: PassengerId) -> SimResult<&Passenger> {
        self.passengers
            .get(id.index())
            .ok_or(SimError::UnknownPassenger(id))
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Pair `car` with `passenger` and assign the full delivery path: the
    /// planned leg to the pick-up point followed by the planned leg to the
    /// drop-off point.
    ///
    /// Planning happens before pairing so a failed plan leaves both entities
    /// untouched.  A car already standing on the pick-up point boards the
    /// passenger immediately (its first leg is empty), which upholds the
    /// invariant that a busy car always has a non-empty path when ticked.
    pub fn dispatch(&mut self, car: CarId, passenger: PassengerId) -> SimResult<()> {
        if car.index() >= self.cars.len() {
            return Err(SimError::UnknownCar(car));
        }
        if passenger.index() >= self.passengers.len() {
            return Err(SimError::UnknownPassenger(passenger));
        }

        let (pickup, dropoff) = {
            let p = &self.passengers[passenger.index()];
            (p.pickup(), p.dropoff())
        };
        let position = self.cars[car.index()].position();

        let to_pickup = self.planner.plan(&self.topology, position, pickup)?;
        let to_dropoff = self.planner.plan(&self.topology, pickup, dropoff)?;

        let c = &mut self.cars[car.index()];
        let p = &mut self.passengers[passenger.index()];
        c.pair_with(p)?;
        c.assign_path(to_pickup, to_dropoff);
        if c.reached_pickup() {
            c.pick_up(p)?;
        }
        Ok(())
    }

    /// First-come matching sweep: pair each waiting passenger with the first
    /// idle car, both in insertion order.  Returns the number of pairings
    /// made.  Deliberately naive — optimal assignment is out of scope.
    pub fn dispatch_idle(&mut self) -> SimResult<usize> {
        let waiting: Vec<PassengerId> = self
            .passengers
            .iter()
            .filter(|p| p.status() == PassengerStatus::WaitPair)
            .map(|p| p.id())
            .collect();

        let mut dispatched = 0;
        for pid in waiting {
            let Some(cid) = self
                .cars
                .iter()
                .find(|c| c.status() == CarStatus::Idle)
                .map(|c| c.id())
            else {
                break;
            };
            self.dispatch(cid, pid)?;
            dispatched += 1;
        }
        Ok(dispatched)
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the simulation by one tick: every busy car consumes one path
    /// step, in insertion order.  Returns the number of cars that moved.
    ///
    /// Completing the pick-up leg boards the passenger; consuming the last
    /// step completes the delivery; exhausting the energy budget applies
    /// [`FAIL_PENALTY`] and releases the stranded passenger back to
    /// `WaitPair`.
    pub fn step(&mut self) -> SimResult<usize> {
        let mut moved = 0;

        // Explicit field borrows so the borrow checker sees disjoint access
        // to the car and passenger vectors.
        let Self {
            cars,
            passengers,
            total_penalty,
            delivered,
            ..
        } = self;

        for car in cars.iter_mut() {
            if !car.status().is_active() {
                continue;
            }

            match car.advance()? {
                MoveOutcome::Advanced => {
                    moved += 1;
                    if car.reached_pickup() {
                        let pid = car
                            .passenger()
                            .ok_or(SimError::MissingPassenger(car.id()))?;
                        car.pick_up(&mut passengers[pid.index()])?;
                    } else if car.status() == CarStatus::DroppingOff
                        && car.remaining_steps() == 0
                    {
                        let pid = car
                            .passenger()
                            .ok_or(SimError::MissingPassenger(car.id()))?;
                        car.drop_off(&mut passengers[pid.index()])?;
                        *delivered += 1;
                    }
                }
                MoveOutcome::Exhausted => {
                    *total_penalty += FAIL_PENALTY;
                    let pid = car
                        .passenger()
                        .ok_or(SimError::MissingPassenger(car.id()))?;
                    car.release_stranded(&mut passengers[pid.index()])?;
                }
            }
        }

        self.tick = self.tick + 1;
        Ok(moved)
    }

    /// Run from the current tick for `config.total_ticks` ticks, invoking
    /// observer hooks at tick boundaries and snapshot intervals.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        for _ in 0..self.config.total_ticks {
            self.tick_once(observer)?;
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick_once(observer)?;
        }
        Ok(())
    }

    fn tick_once<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);
        let moved = self.step()?;
        observer.on_tick_end(now, moved);
        if self.config.snapshot_interval_ticks > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(now, &self.cars, &self.passengers);
        }
        Ok(())
    }
}
