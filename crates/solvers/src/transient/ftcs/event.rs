/// Event emitted by the FTCS solver.
///
/// Step 0 is the initial field after boundaries are applied.
/// Steps 1..N are emitted after each time step, whether or not the step is
/// recorded as a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number (0 for the initial field).
    pub step: usize,

    /// Simulated time at this step.
    pub time: f64,

    /// Temperature at every grid point after this step.
    pub temperature: &'a [f64],
}
