//! Core types for simulating heat conduction along a rod.
//!
//! This crate defines the shared abstractions the solvers and observers build
//! on:
//!
//! - [`Grid`]: the discretized rod and its temperature field
//! - [`Boundary`]: the condition held at each end of the rod
//! - [`SimulationParameters`]: validated physical and numerical constants
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! Nothing here logs, performs I/O, or depends on a rendering facility.

mod boundary;
mod grid;
mod observer;
mod parameters;
mod steady;

pub use boundary::Boundary;
pub use grid::{Grid, GridError, InitialTemperature};
pub use observer::Observer;
pub use parameters::{ParameterError, STABILITY_LIMIT, SimulationParameters, StabilityWarning};
pub use steady::steady_state_profile;
