//! Time-stepping solvers for heat conduction along a rod.
//!
//! # Solvers
//!
//! - [`transient::ftcs`]: explicit forward-time, centered-space stepping
//!   with fixed-value, fixed-gradient, or insulated ends

pub mod transient;
