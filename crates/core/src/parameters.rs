use thiserror::Error;

use crate::Boundary;

/// Largest stability ratio for which the explicit 1D scheme stays bounded.
pub const STABILITY_LIMIT: f64 = 0.5;

/// Physical and numerical constants for a heat conduction run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationParameters {
    diffusivity: f64,
    time_step: f64,
    left: Boundary,
    right: Boundary,
}

/// Errors that can occur when validating [`SimulationParameters`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("diffusivity must be finite and positive")]
    Diffusivity,

    #[error("time_step must be finite and positive")]
    TimeStep,

    #[error("boundary values must be finite")]
    Boundary,
}

/// Returned by [`SimulationParameters::check_stability`] when the stability
/// ratio exceeds [`STABILITY_LIMIT`].
///
/// This is a warning, not a failure: the run can proceed, but its results
/// will oscillate and grow without bound.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("stability ratio {ratio} exceeds {limit}; results will diverge", limit = STABILITY_LIMIT)]
pub struct StabilityWarning {
    /// The offending ratio `diffusivity * time_step / spacing²`.
    pub ratio: f64,
}

impl SimulationParameters {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `diffusivity` or `time_step` is not a positive
    /// finite number, or if either boundary carries a non-finite value.
    pub fn new(
        diffusivity: f64,
        time_step: f64,
        left: impl Into<Boundary>,
        right: impl Into<Boundary>,
    ) -> Result<Self, ParameterError> {
        if !diffusivity.is_finite() || diffusivity <= 0.0 {
            return Err(ParameterError::Diffusivity);
        }
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(ParameterError::TimeStep);
        }

        let (left, right) = (left.into(), right.into());
        if !left.is_finite() || !right.is_finite() {
            return Err(ParameterError::Boundary);
        }

        Ok(Self {
            diffusivity,
            time_step,
            left,
            right,
        })
    }

    /// Returns the thermal diffusivity.
    #[must_use]
    pub fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    /// Returns the time step.
    #[must_use]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Returns the left boundary condition.
    #[must_use]
    pub fn left(&self) -> Boundary {
        self.left
    }

    /// Returns the right boundary condition.
    #[must_use]
    pub fn right(&self) -> Boundary {
        self.right
    }

    /// Returns the stability ratio `r = diffusivity * time_step / spacing²`.
    #[must_use]
    pub fn stability_ratio(&self, spacing: f64) -> f64 {
        self.diffusivity * self.time_step / (spacing * spacing)
    }

    /// Returns the largest time step that keeps the ratio at the limit.
    #[must_use]
    pub fn max_stable_time_step(&self, spacing: f64) -> f64 {
        STABILITY_LIMIT * spacing * spacing / self.diffusivity
    }

    /// Checks the stability condition for a grid spacing.
    ///
    /// Solvers never call this; callers may use it as a precondition.
    ///
    /// # Errors
    ///
    /// Returns a [`StabilityWarning`] if the ratio exceeds [`STABILITY_LIMIT`].
    pub fn check_stability(&self, spacing: f64) -> Result<f64, StabilityWarning> {
        let ratio = self.stability_ratio(spacing);
        if ratio > STABILITY_LIMIT {
            Err(StabilityWarning { ratio })
        } else {
            Ok(ratio)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_valid_parameters() {
        let params = SimulationParameters::new(1e-4, 0.01, 100.0, 50.0).unwrap();

        assert_relative_eq!(params.diffusivity(), 1e-4);
        assert_relative_eq!(params.time_step(), 0.01);
        assert_eq!(params.left(), Boundary::Dirichlet(100.0));
        assert_eq!(params.right(), Boundary::Dirichlet(50.0));
    }

    #[test]
    fn rejects_bad_diffusivity() {
        for alpha in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                SimulationParameters::new(alpha, 0.01, 0.0, 0.0),
                Err(ParameterError::Diffusivity)
            );
        }
    }

    #[test]
    fn rejects_bad_time_step() {
        for dt in [0.0, -0.1, f64::NAN] {
            assert_eq!(
                SimulationParameters::new(1.0, dt, 0.0, 0.0),
                Err(ParameterError::TimeStep)
            );
        }
    }

    #[test]
    fn rejects_non_finite_boundary() {
        assert_eq!(
            SimulationParameters::new(1.0, 0.01, f64::NAN, 0.0),
            Err(ParameterError::Boundary)
        );
        assert_eq!(
            SimulationParameters::new(1.0, 0.01, 0.0, Boundary::Neumann(f64::INFINITY)),
            Err(ParameterError::Boundary)
        );
    }

    #[test]
    fn stability_ratio_matches_definition() {
        let params = SimulationParameters::new(1.0, 0.02, 100.0, 0.0).unwrap();
        assert_relative_eq!(params.stability_ratio(0.25), 0.32);
        assert_relative_eq!(params.check_stability(0.25).unwrap(), 0.32);
    }

    #[test]
    fn unstable_ratio_is_a_warning() {
        let params = SimulationParameters::new(1.0, 0.05, 0.0, 0.0).unwrap();
        let warning = params.check_stability(0.25).unwrap_err();
        assert_relative_eq!(warning.ratio, 0.8);
    }

    #[test]
    fn limit_itself_is_stable() {
        let params = SimulationParameters::new(2.0, 0.25, 0.0, 0.0).unwrap();
        assert!(params.check_stability(1.0).is_ok());
        assert_relative_eq!(params.max_stable_time_step(1.0), 0.25);
    }
}
