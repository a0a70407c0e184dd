use crate::Grid;

/// Returns the steady-state profile between two fixed end temperatures.
///
/// With constant Dirichlet boundaries `left` and `right`, the field converges
/// to the straight line `left + (right - left) * x / length`.
#[must_use]
pub fn steady_state_profile(grid: &Grid, left: f64, right: f64) -> Vec<f64> {
    let length = grid.length();
    grid.positions()
        .into_iter()
        .map(|x| left + (right - left) * x / length)
        .collect()
}
