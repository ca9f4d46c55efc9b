/// A piece of the integration interval with its local estimate.
///
/// Bounds are in the integration variable, which differs from `x` on
/// semi-infinite domains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Lower bound of the segment.
    pub lower: f64,

    /// Upper bound of the segment.
    pub upper: f64,

    /// Kronrod estimate of the integral over the segment.
    pub value: f64,

    /// Error estimate for `value`.
    pub abs_error: f64,
}

impl Segment {
    /// Returns the segment midpoint.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Returns true if the midpoint is distinct from both bounds.
    ///
    /// Segments narrower than a couple of ulps cannot be bisected further.
    #[must_use]
    pub fn is_splittable(&self) -> bool {
        let mid = self.midpoint();
        self.lower < mid && mid < self.upper
    }
}

/// Sums the estimates and error bounds of a set of segments.
pub(super) fn totals(segments: &[Segment]) -> (f64, f64) {
    segments.iter().fold((0.0, 0.0), |(value, abs_error), segment| {
        (value + segment.value, abs_error + segment.abs_error)
    })
}

/// Returns the index of the segment with the largest error estimate.
///
/// Ties keep the earliest segment so the subdivision order is reproducible.
pub(super) fn worst(segments: &[Segment]) -> Option<usize> {
    segments
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, segment)| match best {
            Some((_, err)) if err >= segment.abs_error => best,
            _ => Some((index, segment.abs_error)),
        })
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(lower: f64, upper: f64, abs_error: f64) -> Segment {
        Segment {
            lower,
            upper,
            value: upper - lower,
            abs_error,
        }
    }

    #[test]
    fn worst_picks_largest_error_then_earliest() {
        let segments = [
            segment(0.0, 1.0, 1e-3),
            segment(1.0, 2.0, 5e-3),
            segment(2.0, 3.0, 5e-3),
        ];
        assert_eq!(worst(&segments), Some(1));
        assert_eq!(worst(&[]), None);
    }

    #[test]
    fn totals_sum_values_and_errors() {
        let segments = [segment(0.0, 1.0, 1e-3), segment(1.0, 3.0, 2e-3)];
        let (value, abs_error) = totals(&segments);
        assert_eq!(value, 3.0);
        assert_eq!(abs_error, 3e-3);
    }

    #[test]
    fn tiny_segments_are_not_splittable() {
        let x = 1.0_f64;
        let next = f64::from_bits(x.to_bits() + 1);
        assert!(!segment(x, next, 0.0).is_splittable());
        assert!(segment(0.0, 1.0, 0.0).is_splittable());
    }
}
