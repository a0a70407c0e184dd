//! Interactive temperature-profile plots of rod heat conduction.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- rod
//! cargo run --example plot --features plot -- steady
//! cargo run --example plot --features plot -- steady 0.45
//! ```
//!
//! # Modes
//!
//! - **rod**: Ten seconds of a 1 m rod held at 100 °C and 50 °C, starting
//!   at 25 °C. Shows the profile at the start, a quarter, half, and the end.
//!
//! - **steady [r]**: Runs until the field stops changing and overlays the
//!   linear steady-state profile. The optional stability ratio `r` sets the
//!   time step (default 0.4). Values above 0.5 diverge.

use std::error::Error;

use rodheat_core::{Grid, Observer, SimulationParameters, steady_state_profile};
use rodheat_observers::{ProfilePlot, ShowConfig, SteadyState};
use rodheat_solvers::transient::ftcs::{self, RunConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "rod".into());
    match mode.as_str() {
        "rod" => rod(),
        "steady" => {
            let ratio = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid stability ratio, expected a number, e.g. 0.4");
                    std::process::exit(1);
                })
                .unwrap_or(0.4);
            steady(ratio)
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [rod|steady [r]]");
            std::process::exit(1);
        }
    }
}

// --- Rod ---------------------------------------------------------------------

fn rod() -> Result<(), Box<dyn Error>> {
    let steps = 1000;
    let mut grid = Grid::new(1.0, 20, 25.0)?;
    let params = SimulationParameters::new(1e-4, 0.01, 100.0, 50.0)?;
    let config = RunConfig::new(steps, 1)?;

    let mut plot = ProfilePlot::new(grid.positions(), [0, 250, 500, 999]);
    ftcs::solve(&mut grid, &params, &config, &mut plot);

    plot.show(
        ShowConfig::new()
            .title("1D Heat Conduction in a Metal Rod")
            .legend(),
    )?;

    Ok(())
}

// --- Steady ------------------------------------------------------------------

fn steady(ratio: f64) -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(1.0, 21, 25.0)?;
    let dt = ratio * grid.spacing().powi(2);
    let params = SimulationParameters::new(1.0, dt, 100.0, 50.0)?;
    if let Err(warning) = params.check_stability(grid.spacing()) {
        eprintln!("warning: {warning}");
    }

    let config = RunConfig::new(200_000, 1)?;
    let mut plot = ProfilePlot::new(grid.positions(), [0, 10, 50, 200, 1000]);
    let mut settle = SteadyState::new(1e-10);

    ftcs::solve(&mut grid, &params, &config, |event: &ftcs::Event<'_>| {
        let _: Option<ftcs::Action> = plot.observe(event);
        let action: Option<ftcs::Action> = settle.observe(event);
        action
    });

    let step = settle.settled_at().unwrap_or(config.num_steps());
    plot.record(step as f64 * dt, grid.temperature());
    plot.record_named("Steady state", &steady_state_profile(&grid, 100.0, 50.0));

    plot.show(
        ShowConfig::new()
            .title(format!("Settling to steady state (r={ratio}, step {step})"))
            .legend(),
    )?;

    Ok(())
}
