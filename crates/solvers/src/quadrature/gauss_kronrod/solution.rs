/// Indicates whether the solver met its tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Used every allowed subdivision without converging.
    MaxSubdivisions,

    /// The worst segment became too narrow to bisect without converging.
    Roundoff,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an adaptive quadrature run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the integral.
    pub value: f64,

    /// Estimated absolute error of `value`.
    pub abs_error: f64,

    /// Number of bisections performed.
    pub subdivisions: usize,

    /// Number of integrand evaluations.
    pub evaluations: usize,
}

impl Solution {
    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
