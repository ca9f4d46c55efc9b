use super::Error;

/// The region an integral is taken over.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Domain {
    /// A bounded interval from `lower` to `upper`.
    ///
    /// Reversed bounds flip the sign of the integral.
    Finite { lower: f64, upper: f64 },

    /// The half line from `lower` to positive infinity.
    ToInfinity { lower: f64 },
}

impl Domain {
    /// Creates a bounded domain.
    #[must_use]
    pub fn finite(lower: f64, upper: f64) -> Self {
        Self::Finite { lower, upper }
    }

    /// Creates a domain extending from `lower` to positive infinity.
    #[must_use]
    pub fn to_infinity(lower: f64) -> Self {
        Self::ToInfinity { lower }
    }

    /// Checks that every bound is finite.
    pub(super) fn validate(&self) -> Result<(), Error> {
        let non_finite = match *self {
            Self::Finite { lower, upper } => [lower, upper].into_iter().find(|b| !b.is_finite()),
            Self::ToInfinity { lower } => Some(lower).filter(|b| !b.is_finite()),
        };

        match non_finite {
            Some(value) => Err(Error::NonFiniteBound { value }),
            None => Ok(()),
        }
    }

    /// Maps a point in the integration variable to `(x, dx/dt)`.
    pub(super) fn map(&self, t: f64) -> (f64, f64) {
        match self {
            Self::Finite { .. } => (t, 1.0),
            Self::ToInfinity { lower } => (lower + (1.0 - t) / t, 1.0 / (t * t)),
        }
    }

    /// Returns the ordered integration-variable interval and the sign to apply.
    pub(super) fn interval(&self) -> ([f64; 2], f64) {
        match *self {
            Self::Finite { lower, upper } if lower <= upper => ([lower, upper], 1.0),
            Self::Finite { lower, upper } => ([upper, lower], -1.0),
            Self::ToInfinity { .. } => ([0.0, 1.0], 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reversed_interval_is_ordered_and_negated() {
        let (interval, sign) = Domain::finite(3.0, 1.0).interval();
        assert_eq!(interval, [1.0, 3.0]);
        assert_eq!(sign, -1.0);
    }

    #[test]
    fn semi_infinite_map_covers_half_line() {
        let domain = Domain::to_infinity(2.0);

        let (x, jacobian) = domain.map(1.0);
        assert_relative_eq!(x, 2.0);
        assert_relative_eq!(jacobian, 1.0);

        let (x, jacobian) = domain.map(0.25);
        assert_relative_eq!(x, 5.0);
        assert_relative_eq!(jacobian, 16.0);
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(matches!(
            Domain::finite(0.0, f64::INFINITY).validate(),
            Err(Error::NonFiniteBound { .. })
        ));
        assert!(matches!(
            Domain::to_infinity(f64::NAN).validate(),
            Err(Error::NonFiniteBound { .. })
        ));
        assert!(Domain::finite(-1.0, 1.0).validate().is_ok());
    }
}
