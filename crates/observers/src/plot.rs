//! Plotting observer for temperature profiles.
//!
//! See [`ProfilePlot`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use rodheat_core::Observer;

use crate::traits::HasTemperature;

/// Configuration for rendering a [`ProfilePlot`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("1D Heat Conduction in a Metal Rod").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each profile by its time.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// An observer that collects temperature profiles and displays them via egui.
///
/// Each captured profile becomes one line of temperature against position.
/// Create with [`ProfilePlot::new`], passing the grid positions and the steps
/// to capture. Record profiles by either:
///
/// - **Observer path**: Pass `&mut ProfilePlot` as the solver observer.
/// - **Direct path**: Call [`record`][ProfilePlot::record] with snapshots
///   from a finished solution.
///
/// Call [`show`][ProfilePlot::show] with a [`ShowConfig`] to render the result.
///
/// # Example
///
/// ```ignore
/// let mut plot = ProfilePlot::new(grid.positions(), [0, 250, 500, 999]);
/// ftcs::solve(&mut grid, &params, &config, &mut plot);
/// plot.show(ShowConfig::new().title("Rod").legend())?;
/// ```
pub struct ProfilePlot {
    positions: Vec<f64>,
    steps: Vec<usize>,
    profiles: Vec<(String, Vec<[f64; 2]>)>,
}

impl ProfilePlot {
    /// Creates a plot that captures the given steps.
    pub fn new(positions: Vec<f64>, steps: impl IntoIterator<Item = usize>) -> Self {
        Self {
            positions,
            steps: steps.into_iter().collect(),
            profiles: Vec::new(),
        }
    }

    /// Records a profile at the given time, regardless of step selection.
    ///
    /// Values beyond the known positions are ignored.
    pub fn record(&mut self, time: f64, temperature: &[f64]) {
        self.record_named(format!("Time = {time:.2}s"), temperature);
    }

    /// Records a profile under a custom legend name.
    pub fn record_named(&mut self, name: impl Into<String>, temperature: &[f64]) {
        let points = self
            .positions
            .iter()
            .zip(temperature)
            .map(|(&x, &t)| [x, t])
            .collect();
        self.profiles.push((name.into(), points));
    }

    /// Returns the number of captured profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` if no profile has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Opens a blocking egui window displaying all captured profiles.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let profiles = self.profiles;

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    profiles,
                    legend: config.legend,
                }))
            }),
        )
    }
}

impl<E, A> Observer<E, A> for ProfilePlot
where
    E: HasTemperature,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.steps.contains(&event.step()) {
            self.record(event.time(), event.temperature());
        }
        None
    }
}

/// Allows `&mut ProfilePlot` to be passed to solvers that take an observer by
/// value, so [`ProfilePlot::show`] can be called after the solve completes.
impl<E, A> Observer<E, A> for &mut ProfilePlot
where
    E: HasTemperature,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders captured profiles.
struct PlotApp {
    profiles: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("profile_plot")
                .x_axis_label("Position along the rod (m)")
                .y_axis_label("Temperature (°C)")
                .show_grid(true);
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.profiles {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Event {
        step: usize,
        temperature: Vec<f64>,
    }

    impl HasTemperature for Event {
        fn step(&self) -> usize {
            self.step
        }

        fn time(&self) -> f64 {
            self.step as f64 * 0.5
        }

        fn temperature(&self) -> &[f64] {
            &self.temperature
        }
    }

    // Feeds one three-point field at the given step.
    fn feed(plot: &mut ProfilePlot, step: usize) {
        let event = Event {
            step,
            temperature: vec![1.0, 2.0, 3.0],
        };
        let _: Option<()> = plot.observe(&event);
    }

    #[test]
    fn captures_only_selected_steps() {
        let mut plot = ProfilePlot::new(vec![0.0, 0.5, 1.0], [0, 2]);
        for step in 0..4 {
            feed(&mut plot, step);
        }

        assert_eq!(plot.len(), 2);
        assert_eq!(plot.profiles[0].0, "Time = 0.00s");
        assert_eq!(plot.profiles[1].0, "Time = 1.00s");
        assert_eq!(plot.profiles[1].1, vec![[0.0, 1.0], [0.5, 2.0], [1.0, 3.0]]);
    }

    #[test]
    fn record_direct_call_pairs_positions() {
        let mut plot = ProfilePlot::new(vec![0.0, 1.0], []);
        plot.record(3.0, &[10.0, 20.0, 30.0]);

        assert_eq!(plot.profiles[0].1, vec![[0.0, 10.0], [1.0, 20.0]]);
    }

    #[test]
    fn starts_empty() {
        let plot = ProfilePlot::new(vec![0.0, 1.0], [0]);
        assert!(plot.is_empty());
    }
}
