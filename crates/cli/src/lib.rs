//! Library side of the `rodheat` command-line driver.
//!
//! Loads a [`config::Config`], turns it into solver inputs through
//! [`scenario::Scenario`], and formats results with [`report`].

pub mod config;
pub mod logging;
pub mod report;
pub mod scenario;
