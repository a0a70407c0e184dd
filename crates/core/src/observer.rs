/// Watches a running solver and optionally steers it.
///
/// A solver hands every event (for the FTCS solver, the field after each
/// step) to its observer. Returning `Some(action)` asks the solver to act on
/// it, such as stopping between steps. Returning `None` keeps it going.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` observes
/// nothing.
pub trait Observer<E, A> {
    /// Inspects one event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
