//! Reusable observers for rodheat solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the transient solvers in [`rodheat_solvers`].
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for observers
//!   ([`HasTemperature`], [`CanStopEarly`])
//! - [`Cancellation`]: stops a run between steps when a shared flag is set
//! - [`SteadyState`]: stops a run once the field stops changing
//!
//! # Features
//!
//! - `plot`: Enables [`ProfilePlot`] for viewing temperature profiles via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: rodheat_core::Observer
//! [`HasTemperature`]: traits::HasTemperature
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod cancel;
mod steady;

pub use cancel::{Cancellation, CancellationToken};
pub use steady::SteadyState;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{ProfilePlot, ShowConfig};
