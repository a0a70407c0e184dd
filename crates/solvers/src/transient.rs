//! Solvers that advance a temperature field through time.
//!
//! Each solver emits an event for the initial field and after every step, so
//! observers can report progress or stop the run between steps.

pub mod ftcs;
