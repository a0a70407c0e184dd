use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use rodheat_core::Observer;

use crate::traits::CanStopEarly;

/// A cloneable handle used to request cancellation of a running solve.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Stops a solve between steps once its token is cancelled.
///
/// The flag is checked once per event, so a run stops after the step that
/// was in progress when cancellation was requested.
#[derive(Debug, Clone)]
pub struct Cancellation {
    token: CancellationToken,
}

impl Cancellation {
    /// Creates an observer watching the given token.
    #[must_use]
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Cancellation {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.token.is_cancelled().then(A::stop_early)
    }
}
