/// Actions an observer can take during adaptive quadrature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop subdividing and return the current estimate.
    StopEarly,
}
