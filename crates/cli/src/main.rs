use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rodheat_cli::{
    config::Config,
    logging::init_logging,
    report::{self, Export},
    scenario::{Prepared, Scenario, steady_state_observer},
};
use rodheat_core::Observer;
use rodheat_solvers::transient::ftcs::{self, Simulation, Status};
use tracing::{debug, error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "rodheat", about = "Simulate 1D heat conduction in a rod")]
struct Args {
    /// TOML config file; defaults describe the reference rod
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of grid points
    #[arg(long)]
    points: Option<usize>,

    /// Rod length in meters
    #[arg(long)]
    length: Option<f64>,

    /// Thermal diffusivity in m²/s
    #[arg(long)]
    diffusivity: Option<f64>,

    /// Time step in seconds
    #[arg(long)]
    dt: Option<f64>,

    /// Total simulated time in seconds
    #[arg(long)]
    total_time: Option<f64>,

    /// Explicit step count, overriding the total time
    #[arg(long, allow_negative_numbers = true)]
    steps: Option<i64>,

    /// Record a snapshot every N steps
    #[arg(long, allow_negative_numbers = true)]
    record_every: Option<i64>,

    /// Stop once no point changes by more than this per step
    #[arg(long, allow_negative_numbers = true)]
    stop_at_steady: Option<f64>,

    /// Write all snapshots to this JSON file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Show the reported profiles in a plot window
    #[cfg(feature = "plot")]
    #[arg(long)]
    plot: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(points) = self.points {
            config.rod.points = points;
        }
        if let Some(length) = self.length {
            config.rod.length_m = length;
        }
        if let Some(diffusivity) = self.diffusivity {
            config.rod.diffusivity_m2_per_s = diffusivity;
        }
        if let Some(dt) = self.dt {
            config.time.time_step_s = dt;
        }
        if let Some(total_time) = self.total_time {
            config.time.total_time_s = total_time;
        }
        if self.steps.is_some() {
            config.time.steps = self.steps;
        }
        if let Some(record_every) = self.record_every {
            config.time.record_every = record_every;
        }
    }
}

fn main() {
    init_logging();

    if let Err(err) = run(&Args::parse()) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::load(path)?
        }
        None => Config::default(),
    };
    args.apply(&mut config);

    let Prepared { grid, params, run } = Scenario::from(&config)
        .prepare()
        .context("invalid simulation setup")?;

    let positions = grid.positions();
    match params.check_stability(grid.spacing()) {
        Ok(ratio) => info!("Stability ratio {ratio:.4}"),
        Err(warning) => warn!(
            "{warning}; largest stable time step is {:.3e} s",
            params.max_stable_time_step(grid.spacing())
        ),
    }
    info!(
        "Rod of {} m in {} points (dx = {:.4} m), {} steps of {} s",
        grid.length(),
        grid.num_points(),
        grid.spacing(),
        run.num_steps(),
        params.time_step()
    );

    let mut steady = args
        .stop_at_steady
        .map(steady_state_observer)
        .transpose()
        .context("invalid --stop-at-steady")?;
    let progress_every = (run.num_steps() / 10).max(1);

    let mut simulation = Simulation::new(params);
    simulation.initialize(grid);
    let solution = simulation.run_observed(&run, |event: &ftcs::Event<'_>| {
        if event.step > 0 && event.step % progress_every == 0 {
            debug!("step {} at t = {:.2} s", event.step, event.time);
        }
        let action: Option<ftcs::Action> = steady.as_mut().and_then(|steady| steady.observe(event));
        action
    })?;

    match solution.status {
        Status::Complete => info!("Completed {} steps", solution.steps),
        Status::StoppedByObserver => info!(
            "Reached steady state after {} steps (t = {:.2} s)",
            solution.steps,
            solution.last().time
        ),
    }

    // Snapshots run from step 0 through the last step taken.
    let chosen: Vec<_> = report::report_steps(solution.steps + 1)
        .into_iter()
        .filter_map(|step| report::snapshot_at(&solution, step))
        .collect();
    print!("{}", report::profile_table(&positions, &chosen));

    if let Some(path) = &args.output {
        let grid = simulation.grid().context("simulation lost its grid")?;
        Export::new(grid, simulation.params(), &solution).write(path)?;
        info!("Wrote {} snapshots to {}", solution.snapshots.len(), path.display());
    }

    #[cfg(feature = "plot")]
    if args.plot {
        use rodheat_observers::{ProfilePlot, ShowConfig};

        let mut plot = ProfilePlot::new(positions, []);
        for snapshot in &chosen {
            plot.record(snapshot.time, &snapshot.temperature);
        }
        plot.show(
            ShowConfig::new()
                .title("1D Heat Conduction in a Metal Rod")
                .legend(),
        )
        .map_err(|err| anyhow::anyhow!("failed to open plot window: {err}"))?;
    }

    Ok(())
}
