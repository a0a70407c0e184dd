use rodheat_core::Observer;

use crate::traits::{CanStopEarly, HasTemperature};

/// Stops a solve once the field has settled.
///
/// After each event, compares the field with the previous one and requests an
/// early stop when no point changed by more than `tolerance`.
#[derive(Debug, Clone)]
pub struct SteadyState {
    tolerance: f64,
    previous: Option<Vec<f64>>,
    settled_at: Option<usize>,
}

impl SteadyState {
    /// Creates an observer with an absolute per-step tolerance.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            previous: None,
            settled_at: None,
        }
    }

    /// Returns the step at which the field settled, if it has.
    #[must_use]
    pub fn settled_at(&self) -> Option<usize> {
        self.settled_at
    }
}

impl<E: HasTemperature, A: CanStopEarly> Observer<E, A> for SteadyState {
    fn observe(&mut self, event: &E) -> Option<A> {
        let current = event.temperature();

        let settled = self.previous.as_deref().is_some_and(|previous| {
            previous
                .iter()
                .zip(current)
                .all(|(a, b)| (a - b).abs() <= self.tolerance)
        });

        let previous = self.previous.get_or_insert_with(Vec::new);
        previous.clear();
        previous.extend_from_slice(current);

        if settled {
            self.settled_at = Some(event.step());
            Some(A::stop_early())
        } else {
            None
        }
    }
}

/// Allows `&mut SteadyState` to be passed to solvers that take an observer by
/// value, so [`SteadyState::settled_at`] can be read after the solve.
impl<E: HasTemperature, A: CanStopEarly> Observer<E, A> for &mut SteadyState {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
