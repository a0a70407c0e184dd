//! Explicit forward-time, centered-space (FTCS) solver for the 1D heat equation.
//!
//! This module advances a rod's temperature field through `∂T/∂t = α·∂²T/∂x²`
//! using the explicit stencil:
//!
//! ```text
//! r = α·Δt/Δx²
//! T_{n+1}[i] = T_n[i] + r·(T_n[i+1] - 2·T_n[i] + T_n[i-1])
//! ```
//!
//! Every step computes the whole new field from the previous one before
//! swapping it in, then resets both boundary points. The scheme is stable
//! when `r <= 0.5`; see [`SimulationParameters::check_stability`].
//!
//! # Example
//!
//! ```
//! use rodheat_core::{Grid, SimulationParameters};
//! use rodheat_solvers::transient::ftcs::{self, RunConfig};
//!
//! let mut grid = Grid::new(1.0, 5, 0.0)?;
//! let params = SimulationParameters::new(1.0, 0.02, 100.0, 0.0)?;
//! let config = RunConfig::new(1, 1)?;
//!
//! let solution = ftcs::solve_unobserved(&mut grid, &params, &config);
//!
//! assert_eq!(solution.snapshots.len(), 2);
//! assert_eq!(grid.temperature()[0], 100.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod simulation;
mod solution;

pub mod kernel;

pub use action::Action;
pub use config::{ConfigError, RunConfig};
pub use error::Error;
pub use event::Event;
pub use simulation::{Phase, Simulation};
pub use solution::{Snapshot, Solution, Status};

use rodheat_core::{Grid, Observer, SimulationParameters};

/// Most snapshots reserved up front; longer runs grow the buffer as they go.
const MAX_RESERVED_SNAPSHOTS: usize = 1024;

/// Advances a grid with FTCS steps.
///
/// # Algorithm
///
/// 1. Apply the boundary conditions and record the initial field as step 0.
/// 2. For each step:
///    - Compute the interior of a fresh field from the previous field.
///    - Swap the fresh field into the grid.
///    - Reset both boundary points.
///    - Record a snapshot if the step falls on the recording interval or is
///      the final step.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the recorded snapshots.
///
/// On return, `grid` holds the last computed field.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial field and after every
/// step, and may return [`Action::StopEarly`] to end the run between steps.
pub fn solve<Obs>(
    grid: &mut Grid,
    params: &SimulationParameters,
    config: &RunConfig,
    observer: Obs,
) -> Solution
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    solve_from(grid, params, config, 0, observer)
}

/// Advances a grid with FTCS steps without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved(
    grid: &mut Grid,
    params: &SimulationParameters,
    config: &RunConfig,
) -> Solution {
    solve(grid, params, config, ())
}

/// Shared stepping loop, numbering steps from `start_step`.
pub(crate) fn solve_from<Obs>(
    grid: &mut Grid,
    params: &SimulationParameters,
    config: &RunConfig,
    start_step: usize,
    mut observer: Obs,
) -> Solution
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let (left, right) = (params.left(), params.right());
    let ratio = params.stability_ratio(grid.spacing());
    let time_at = |step: usize| {
        #[allow(clippy::cast_precision_loss)]
        let step = step as f64;
        step * params.time_step()
    };

    grid.apply_boundaries(left, right);

    let expected = (config.num_steps() / config.record_every()).saturating_add(2);
    let mut snapshots = Vec::with_capacity(expected.min(MAX_RESERVED_SNAPSHOTS));
    snapshots.push(Snapshot {
        step: start_step,
        time: time_at(start_step),
        temperature: grid.temperature().to_vec(),
    });

    // Emit initial event.
    let event = Event {
        step: start_step,
        time: time_at(start_step),
        temperature: grid.temperature(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Solution {
            status: Status::StoppedByObserver,
            snapshots,
            steps: 0,
        };
    }

    let mut next = grid.temperature().to_vec();

    for step in 1..=config.num_steps() {
        kernel::update_interior(grid.temperature(), &mut next, ratio);
        grid.swap_temperature(&mut next);
        grid.apply_boundaries(left, right);

        let global_step = start_step + step;
        let recorded = config.records(step);
        if recorded {
            snapshots.push(Snapshot {
                step: global_step,
                time: time_at(global_step),
                temperature: grid.temperature().to_vec(),
            });
        }

        // Emit event to observer.
        let event = Event {
            step: global_step,
            time: time_at(global_step),
            temperature: grid.temperature(),
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            if !recorded {
                snapshots.push(Snapshot {
                    step: global_step,
                    time: time_at(global_step),
                    temperature: grid.temperature().to_vec(),
                });
            }
            return Solution {
                status: Status::StoppedByObserver,
                snapshots,
                steps: step,
            };
        }
    }

    Solution {
        status: Status::Complete,
        snapshots,
        steps: config.num_steps(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rodheat_core::Boundary;

    // --- Test fixtures ---

    /// Five points on a unit rod, r = 0.32, hot left end.
    fn hot_left() -> (Grid, SimulationParameters) {
        let grid = Grid::new(1.0, 5, 0.0).unwrap();
        let params = SimulationParameters::new(1.0, 0.02, 100.0, 0.0).unwrap();
        (grid, params)
    }

    // --- Tests ---

    #[test]
    fn single_step_matches_stencil() {
        let (mut grid, params) = hot_left();
        let config = RunConfig::new(1, 1).unwrap();

        let solution = solve_unobserved(&mut grid, &params, &config);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 1);
        assert_eq!(solution.snapshots.len(), 2); // initial + 1 step

        let expected = [100.0, 32.0, 0.0, 0.0, 0.0];
        for (actual, expected) in solution.last().temperature.iter().zip(expected) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-12);
        }
        assert_eq!(grid.temperature(), solution.last().temperature.as_slice());
    }

    #[test]
    fn second_step_uses_first_step_values() {
        let (mut grid, params) = hot_left();
        let config = RunConfig::new(2, 1).unwrap();

        let solution = solve_unobserved(&mut grid, &params, &config);
        let t = &solution.last().temperature;

        // i=1: 32 + 0.32 * (0 - 64 + 100); i=2: 0 + 0.32 * 32
        assert_relative_eq!(t[1], 32.0 + 0.32 * 36.0, epsilon = 1e-12);
        assert_relative_eq!(t[2], 0.32 * 32.0, epsilon = 1e-12);
        assert_eq!(t[3], 0.0);
    }

    #[test]
    fn initial_snapshot_has_boundaries_applied() {
        let (mut grid, params) = hot_left();
        let config = RunConfig::new(0, 1).unwrap();

        let solution = solve_unobserved(&mut grid, &params, &config);

        assert_eq!(solution.steps, 0);
        assert_eq!(solution.snapshots.len(), 1);
        assert_eq!(solution.snapshots[0].step, 0);
        assert_eq!(solution.snapshots[0].temperature, vec![100.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn records_on_interval() {
        let (mut grid, params) = hot_left();
        let config = RunConfig::new(10, 3).unwrap();

        let solution = solve_unobserved(&mut grid, &params, &config);
        let steps: Vec<usize> = solution.snapshots.iter().map(|s| s.step).collect();

        assert_eq!(steps, vec![0, 3, 6, 9, 10]);
        assert_relative_eq!(solution.snapshots[2].time, 0.12);
    }

    #[test]
    fn observer_can_stop_early() {
        let (mut grid, params) = hot_left();
        let config = RunConfig::new(100, 10).unwrap();

        let observer = |event: &Event<'_>| {
            if event.step >= 5 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(&mut grid, &params, &config, observer);

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        // Initial field plus the field at the stopping step.
        let steps: Vec<usize> = solution.snapshots.iter().map(|s| s.step).collect();
        assert_eq!(steps, vec![0, 5]);
    }

    #[test]
    fn observer_sees_every_step() {
        let (mut grid, params) = hot_left();
        let config = RunConfig::new(4, 2).unwrap();

        let mut step_values = Vec::new();
        solve(&mut grid, &params, &config, |event: &Event<'_>| -> Option<Action> {
            step_values.push(event.step);
            None
        });

        assert_eq!(step_values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn huge_step_cap_with_early_stop() {
        let (mut grid, params) = hot_left();
        let config = RunConfig::new(i64::MAX, 1).unwrap();

        let solution = solve(&mut grid, &params, &config, |event: &Event<'_>| {
            (event.step >= 3).then_some(Action::StopEarly)
        });

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 3);
        assert_eq!(solution.snapshots.len(), 4);
    }

    #[test]
    fn insulated_rod_keeps_uniform_field() {
        let mut grid = Grid::new(1.0, 11, 40.0).unwrap();
        let params =
            SimulationParameters::new(1e-3, 1.0, Boundary::Insulated, Boundary::Insulated).unwrap();
        let config = RunConfig::new(50, 50).unwrap();

        let solution = solve_unobserved(&mut grid, &params, &config);

        for value in &solution.last().temperature {
            assert_relative_eq!(*value, 40.0);
        }
    }
}
