use thiserror::Error;

/// Step count and recording interval for an FTCS run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    num_steps: usize,
    record_every: usize,
}

/// Errors that can occur when validating a [`RunConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("num_steps must not be negative, got {0}")]
    NumSteps(i64),

    #[error("record_every must be positive, got {0}")]
    RecordEvery(i64),
}

impl RunConfig {
    /// Creates a new config from externally supplied counts.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_steps < 0` or `record_every <= 0`.
    pub fn new(num_steps: i64, record_every: i64) -> Result<Self, ConfigError> {
        let num_steps = usize::try_from(num_steps).map_err(|_| ConfigError::NumSteps(num_steps))?;
        let record_every = usize::try_from(record_every)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(ConfigError::RecordEvery(record_every))?;

        Ok(Self {
            num_steps,
            record_every,
        })
    }

    /// Returns the number of time steps to take.
    #[must_use]
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Returns the recording interval, in steps.
    #[must_use]
    pub fn record_every(&self) -> usize {
        self.record_every
    }

    /// Returns `true` if the field after `step` should be recorded.
    ///
    /// The final step is always recorded.
    pub(super) fn records(&self, step: usize) -> bool {
        step % self.record_every == 0 || step == self.num_steps
    }
}
