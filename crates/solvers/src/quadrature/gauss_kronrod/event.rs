use super::Segment;

/// Event emitted by the Gauss-Kronrod solver after each subdivision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Subdivision counter (1-based).
    pub subdivision: usize,

    /// The segment that was bisected, as it was before the split.
    pub split: Segment,

    /// Integral estimate over the whole domain after the split.
    pub value: f64,

    /// Summed error estimate after the split.
    pub abs_error: f64,
}
