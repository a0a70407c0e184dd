//! Capability traits for observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and used with any transient solver.
//!
//! # Event traits
//!
//! - [`HasTemperature`]: events that carry a temperature field
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rodheat_core::Observer;
//! use rodheat_observers::traits::{CanStopEarly, HasTemperature};
//!
//! struct TooHot {
//!     limit: f64,
//! }
//!
//! impl<E: HasTemperature, A: CanStopEarly> Observer<E, A> for TooHot {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.temperature().iter().any(|&t| t > self.limit) {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use rodheat_solvers::transient::ftcs;

/// An event that carries a temperature field.
pub trait HasTemperature {
    /// Returns the step number for this event.
    fn step(&self) -> usize;

    /// Returns the simulated time for this event.
    fn time(&self) -> f64;

    /// Returns the temperature at every grid point.
    fn temperature(&self) -> &[f64];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasTemperature for ftcs::Event ---

impl HasTemperature for ftcs::Event<'_> {
    fn step(&self) -> usize {
        self.step
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn temperature(&self) -> &[f64] {
        self.temperature
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for ftcs::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
