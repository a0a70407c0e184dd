/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// A recorded copy of the temperature field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    /// The step this field was recorded at.
    pub step: usize,

    /// Simulated time at this step.
    pub time: f64,

    /// Temperature at every grid point.
    pub temperature: Vec<f64>,
}

/// The result of an FTCS run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Recorded snapshots in step order, starting with the initial field.
    pub snapshots: Vec<Snapshot>,

    /// Number of time steps completed.
    pub steps: usize,
}

impl Solution {
    /// Returns the last recorded snapshot.
    ///
    /// Every solution holds at least the initial field, so this never fails.
    #[must_use]
    pub fn last(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }
}
