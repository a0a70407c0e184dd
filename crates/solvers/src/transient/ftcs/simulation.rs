use rodheat_core::{Grid, InitialTemperature, Observer, SimulationParameters};

use super::{Action, Error, Event, RunConfig, Solution, solve_from};

/// Lifecycle phase of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Parameters are set but there is no grid yet.
    Uninitialized,

    /// A grid is attached and its boundaries are applied.
    Initialized,

    /// A run is in progress.
    Stepping,

    /// At least one run has completed.
    Finished,
}

/// A single simulation run: one parameter set and one grid.
///
/// The lifecycle is `Uninitialized → Initialized → Stepping → Finished`.
/// Running again from `Finished` continues from the last field, with step
/// numbers and times carrying on from where the previous run stopped.
#[derive(Debug, Clone)]
pub struct Simulation {
    params: SimulationParameters,
    grid: Option<Grid>,
    phase: Phase,
    elapsed_steps: usize,
}

impl Simulation {
    /// Creates an uninitialized simulation.
    #[must_use]
    pub fn new(params: SimulationParameters) -> Self {
        Self {
            params,
            grid: None,
            phase: Phase::Uninitialized,
            elapsed_steps: 0,
        }
    }

    /// Attaches a grid and applies the boundary conditions to it.
    ///
    /// Replaces any previously attached grid and resets the step count.
    pub fn initialize(&mut self, mut grid: Grid) {
        grid.apply_boundaries(self.params.left(), self.params.right());
        self.grid = Some(grid);
        self.phase = Phase::Initialized;
        self.elapsed_steps = 0;
    }

    /// Creates a grid and attaches it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the grid cannot be created.
    pub fn create_grid(
        &mut self,
        length: f64,
        num_points: usize,
        initial: impl Into<InitialTemperature>,
    ) -> Result<(), Error> {
        let grid = Grid::new(length, num_points, initial)?;
        self.initialize(grid);
        Ok(())
    }

    /// Runs `num_steps` steps, recording every `record_every` steps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] if no grid is attached, or
    /// [`Error::InvalidParameter`] if `num_steps < 0` or `record_every <= 0`.
    pub fn run(&mut self, num_steps: i64, record_every: i64) -> Result<Solution, Error> {
        self.ensure_initialized()?;
        let config = RunConfig::new(num_steps, record_every)?;
        self.run_observed(&config, ())
    }

    /// Runs with a validated config and an observer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] if no grid is attached.
    pub fn run_observed<Obs>(&mut self, config: &RunConfig, observer: Obs) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        self.ensure_initialized()?;
        let grid = self.grid.as_mut().ok_or(Error::NotInitialized)?;

        self.phase = Phase::Stepping;
        let solution = solve_from(grid, &self.params, config, self.elapsed_steps, observer);
        self.elapsed_steps += solution.steps;
        self.phase = Phase::Finished;

        Ok(solution)
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the attached grid, if any.
    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Returns the simulation parameters.
    #[must_use]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Returns the number of steps taken since initialization.
    #[must_use]
    pub fn elapsed_steps(&self) -> usize {
        self.elapsed_steps
    }

    fn ensure_initialized(&self) -> Result<(), Error> {
        match self.phase {
            Phase::Uninitialized => Err(Error::NotInitialized),
            Phase::Initialized | Phase::Stepping | Phase::Finished => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rodheat_core::GridError;

    use crate::transient::ftcs::{ConfigError, Status};

    fn params() -> SimulationParameters {
        SimulationParameters::new(1.0, 0.02, 100.0, 0.0).unwrap()
    }

    #[test]
    fn starts_uninitialized() {
        let sim = Simulation::new(params());
        assert_eq!(sim.phase(), Phase::Uninitialized);
        assert!(sim.grid().is_none());
    }

    #[test]
    fn run_before_initialize_fails() {
        let mut sim = Simulation::new(params());
        assert_eq!(sim.run(1, 1), Err(Error::NotInitialized));
        assert_eq!(sim.phase(), Phase::Uninitialized);
    }

    #[test]
    fn initialize_applies_boundaries() {
        let mut sim = Simulation::new(params());
        sim.create_grid(1.0, 5, 20.0).unwrap();

        assert_eq!(sim.phase(), Phase::Initialized);
        assert_eq!(
            sim.grid().unwrap().temperature(),
            &[100.0, 20.0, 20.0, 20.0, 0.0]
        );
    }

    #[test]
    fn create_grid_reports_invalid_dimension() {
        let mut sim = Simulation::new(params());
        let err = sim.create_grid(1.0, 2, 0.0).unwrap_err();

        assert_eq!(
            err,
            Error::InvalidDimension(GridError::InvalidDimension {
                length: 1.0,
                num_points: 2
            })
        );
        assert_eq!(sim.phase(), Phase::Uninitialized);
    }

    #[test]
    fn rejects_negative_step_count() {
        let mut sim = Simulation::new(params());
        sim.create_grid(1.0, 5, 0.0).unwrap();

        assert_eq!(
            sim.run(-1, 1),
            Err(Error::InvalidParameter(ConfigError::NumSteps(-1)))
        );
        assert_eq!(
            sim.run(5, 0),
            Err(Error::InvalidParameter(ConfigError::RecordEvery(0)))
        );
        // Rejected before stepping: nothing changed.
        assert_eq!(sim.phase(), Phase::Initialized);
        assert_eq!(sim.elapsed_steps(), 0);
    }

    #[test]
    fn run_finishes_and_continues() {
        let mut sim = Simulation::new(params());
        sim.create_grid(1.0, 5, 0.0).unwrap();

        let first = sim.run(1, 1).unwrap();
        assert_eq!(first.status, Status::Complete);
        assert_eq!(sim.phase(), Phase::Finished);
        assert_relative_eq!(first.last().temperature[1], 32.0, epsilon = 1e-12);

        let second = sim.run(1, 1).unwrap();
        assert_eq!(sim.elapsed_steps(), 2);
        assert_eq!(second.snapshots[0].step, 1);
        assert_eq!(second.snapshots[1].step, 2);
        assert_relative_eq!(second.snapshots[1].time, 0.04);
        assert_relative_eq!(
            second.last().temperature[1],
            32.0 + 0.32 * 36.0,
            epsilon = 1e-12
        );
    }
}
