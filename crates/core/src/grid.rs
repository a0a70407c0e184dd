use thiserror::Error;

use crate::Boundary;

/// Smallest grid that has at least one interior point.
const MIN_POINTS: usize = 3;

/// Initial temperature of the rod.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum InitialTemperature {
    /// The same temperature at every point.
    Uniform(f64),

    /// One temperature per grid point, ordered from the left end.
    Profile(Vec<f64>),
}

impl From<f64> for InitialTemperature {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<Vec<f64>> for InitialTemperature {
    fn from(values: Vec<f64>) -> Self {
        Self::Profile(values)
    }
}

/// Errors that can occur when creating a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("invalid dimension: rod length {length} with {num_points} points")]
    InvalidDimension { length: f64, num_points: usize },

    #[error("invalid dimension: initial profile has {actual} values, expected {expected}")]
    ProfileLength { expected: usize, actual: usize },
}

impl GridError {
    /// Returns `true` for errors caused by a bad grid size or rod length.
    ///
    /// Every variant currently qualifies.
    #[must_use]
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimension { .. } | Self::ProfileLength { .. }
        )
    }
}

/// The discretized rod.
///
/// A grid holds `num_points` evenly spaced temperature samples covering
/// `[0, length]`. Index 0 and index `num_points - 1` are boundary points.
/// The temperature field is never resized after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    length: f64,
    spacing: f64,
    temperature: Vec<f64>,
}

impl Grid {
    /// Creates a grid from a rod length, point count, and initial condition.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] if `num_points < 3` or `length`
    /// is not a positive finite number, and [`GridError::ProfileLength`] if a
    /// supplied profile does not have exactly `num_points` values.
    pub fn new(
        length: f64,
        num_points: usize,
        initial: impl Into<InitialTemperature>,
    ) -> Result<Self, GridError> {
        if num_points < MIN_POINTS || !length.is_finite() || length <= 0.0 {
            return Err(GridError::InvalidDimension { length, num_points });
        }

        let temperature = match initial.into() {
            InitialTemperature::Uniform(value) => vec![value; num_points],
            InitialTemperature::Profile(values) => {
                if values.len() != num_points {
                    return Err(GridError::ProfileLength {
                        expected: num_points,
                        actual: values.len(),
                    });
                }
                values
            }
        };

        #[allow(clippy::cast_precision_loss)]
        let spacing = length / (num_points - 1) as f64;

        Ok(Self {
            length,
            spacing,
            temperature,
        })
    }

    /// Sets the two boundary points from the given conditions.
    ///
    /// Only indices 0 and `num_points - 1` are written, so applying the same
    /// conditions twice has no further effect.
    pub fn apply_boundaries(&mut self, left: Boundary, right: Boundary) {
        let last = self.temperature.len() - 1;
        self.temperature[0] = left.left_value(self.temperature[1], self.spacing);
        self.temperature[last] = right.right_value(self.temperature[last - 1], self.spacing);
    }

    /// Returns the physical length of the rod.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the number of grid points, including both boundaries.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.temperature.len()
    }

    /// Returns the distance between neighboring points.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the current temperature at every point.
    #[must_use]
    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }

    /// Returns the position of every point along the rod.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn positions(&self) -> Vec<f64> {
        (0..self.num_points())
            .map(|i| i as f64 * self.spacing)
            .collect()
    }

    /// Replaces the temperature field with `next`, leaving the previous field
    /// in `next`.
    ///
    /// This is how solvers double-buffer: they compute a complete new field
    /// from [`temperature`][Grid::temperature] and swap it in.
    ///
    /// # Panics
    ///
    /// Panics if `next` does not have exactly `num_points` values.
    pub fn swap_temperature(&mut self, next: &mut Vec<f64>) {
        assert_eq!(
            next.len(),
            self.temperature.len(),
            "replacement field must have one value per grid point"
        );
        std::mem::swap(&mut self.temperature, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn uniform_initial_condition() {
        let grid = Grid::new(1.0, 5, 25.0).unwrap();

        assert_eq!(grid.num_points(), 5);
        assert_relative_eq!(grid.spacing(), 0.25);
        assert_eq!(grid.temperature(), &[25.0; 5]);
    }

    #[test]
    fn profile_initial_condition() {
        let grid = Grid::new(2.0, 3, vec![1.0, 2.0, 3.0]).unwrap();

        assert_relative_eq!(grid.spacing(), 1.0);
        assert_eq!(grid.temperature(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn rejects_too_few_points() {
        let err = Grid::new(1.0, 2, 0.0).unwrap_err();
        assert!(err.is_invalid_dimension());
        assert_eq!(
            err,
            GridError::InvalidDimension {
                length: 1.0,
                num_points: 2
            }
        );
    }

    #[test]
    fn rejects_non_positive_length() {
        assert!(Grid::new(0.0, 10, 0.0).unwrap_err().is_invalid_dimension());
        assert!(Grid::new(-1.0, 10, 0.0).unwrap_err().is_invalid_dimension());
        assert!(
            Grid::new(f64::NAN, 10, 0.0)
                .unwrap_err()
                .is_invalid_dimension()
        );
    }

    #[test]
    fn rejects_mismatched_profile() {
        let err = Grid::new(1.0, 4, vec![0.0; 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::ProfileLength {
                expected: 4,
                actual: 3
            }
        );
        assert!(err.is_invalid_dimension());
    }

    #[test]
    fn apply_dirichlet_boundaries_is_idempotent() {
        let mut grid = Grid::new(1.0, 4, 25.0).unwrap();

        grid.apply_boundaries(Boundary::Dirichlet(100.0), Boundary::Dirichlet(50.0));
        let once = grid.clone();
        grid.apply_boundaries(Boundary::Dirichlet(100.0), Boundary::Dirichlet(50.0));

        assert_eq!(grid, once);
        assert_eq!(grid.temperature(), &[100.0, 25.0, 25.0, 50.0]);
    }

    #[test]
    fn apply_insulated_boundaries_copies_neighbors() {
        let mut grid = Grid::new(1.0, 4, vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        grid.apply_boundaries(Boundary::Insulated, Boundary::Insulated);
        assert_eq!(grid.temperature(), &[1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn swap_exchanges_fields() {
        let mut grid = Grid::new(1.0, 3, 0.0).unwrap();
        let mut next = vec![1.0, 2.0, 3.0];

        grid.swap_temperature(&mut next);

        assert_eq!(grid.temperature(), &[1.0, 2.0, 3.0]);
        assert_eq!(next, vec![0.0; 3]);
    }

    #[test]
    #[should_panic(expected = "one value per grid point")]
    fn swap_rejects_resized_field() {
        let mut grid = Grid::new(1.0, 3, 0.0).unwrap();
        grid.swap_temperature(&mut vec![0.0; 4]);
    }

    #[test]
    fn positions_span_the_rod() {
        let grid = Grid::new(1.0, 5, 0.0).unwrap();
        let x = grid.positions();

        assert_eq!(x.len(), 5);
        assert_relative_eq!(x[0], 0.0);
        assert_relative_eq!(x[2], 0.5);
        assert_relative_eq!(x[4], 1.0);
    }
}
