/// Control actions supported by the FTCS solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current step and return the snapshots so far.
    StopEarly,
}
