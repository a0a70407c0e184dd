use rodheat_core::{
    Boundary, Grid, GridError, InitialTemperature, ParameterError, SimulationParameters,
};
use rodheat_observers::SteadyState;
use rodheat_solvers::transient::ftcs::{ConfigError, RunConfig};
use thiserror::Error;
use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{DiffusionCoefficient, Length, Time},
    length::meter,
    ratio::ratio,
    time::second,
};

use crate::config::Config;

/// Errors that can occur when turning a [`Config`] into a runnable scenario.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScenarioError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Parameters(#[from] ParameterError),

    #[error(transparent)]
    Run(#[from] ConfigError),

    #[error("total time must be finite and non-negative")]
    TotalTime,

    #[error("steady-state tolerance must be finite and non-negative, got {0}")]
    SteadyTolerance(f64),
}

/// A fully specified rod simulation with dimensioned quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub length: Length,
    pub points: usize,
    pub diffusivity: DiffusionCoefficient,
    pub time_step: Time,
    pub total_time: Time,
    pub steps: Option<i64>,
    pub record_every: i64,
    pub left: Boundary,
    pub right: Boundary,
    pub initial: InitialTemperature,
}

/// Everything the solver needs for one run.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub grid: Grid,
    pub params: SimulationParameters,
    pub run: RunConfig,
}

impl From<&Config> for Scenario {
    fn from(config: &Config) -> Self {
        Self {
            length: Length::new::<meter>(config.rod.length_m),
            points: config.rod.points,
            diffusivity: DiffusionCoefficient::new::<square_meter_per_second>(
                config.rod.diffusivity_m2_per_s,
            ),
            time_step: Time::new::<second>(config.time.time_step_s),
            total_time: Time::new::<second>(config.time.total_time_s),
            steps: config.time.steps,
            record_every: config.time.record_every,
            left: config.boundary.left,
            right: config.boundary.right,
            initial: config.initial_c.clone(),
        }
    }
}

impl Scenario {
    /// Returns the number of steps to take.
    ///
    /// An explicit step count wins; otherwise the whole number of time steps
    /// that fit in the total time.
    ///
    /// # Errors
    ///
    /// Returns an error if the total time is negative or not finite.
    pub fn num_steps(&self) -> Result<i64, ScenarioError> {
        if let Some(steps) = self.steps {
            return Ok(steps);
        }

        let total = self.total_time.get::<second>();
        if !total.is_finite() || total < 0.0 {
            return Err(ScenarioError::TotalTime);
        }

        let count = (self.total_time / self.time_step).get::<ratio>();
        if !count.is_finite() {
            return Err(ScenarioError::Parameters(ParameterError::TimeStep));
        }

        #[allow(clippy::cast_possible_truncation)]
        Ok(count.floor() as i64)
    }

    /// Validates the scenario and builds the solver inputs.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure among grid, parameters, and step
    /// counts.
    pub fn prepare(&self) -> Result<Prepared, ScenarioError> {
        let grid = Grid::new(
            self.length.get::<meter>(),
            self.points,
            self.initial.clone(),
        )?;
        let params = SimulationParameters::new(
            self.diffusivity.get::<square_meter_per_second>(),
            self.time_step.get::<second>(),
            self.left,
            self.right,
        )?;
        let run = RunConfig::new(self.num_steps()?, self.record_every)?;

        Ok(Prepared { grid, params, run })
    }
}

/// Builds a [`SteadyState`] observer for a per-step change tolerance.
///
/// # Errors
///
/// Returns [`ScenarioError::SteadyTolerance`] if `tolerance` is negative or
/// not finite, since such an observer would never stop a run.
pub fn steady_state_observer(tolerance: f64) -> Result<SteadyState, ScenarioError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(ScenarioError::SteadyTolerance(tolerance));
    }
    Ok(SteadyState::new(tolerance))
}
