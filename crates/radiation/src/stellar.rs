use std::fmt;

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

/// Coarse Harvard spectral class of a star, assigned from its temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    /// Cooler than every class in [`SPECTRAL_CLASSES`], or not a valid temperature.
    Unknown,
}

/// Temperature bounds in kelvin for each class, as `(lower, upper, class)`.
///
/// Lower bounds are inclusive and upper bounds exclusive.
pub const SPECTRAL_CLASSES: [(f64, f64, SpectralClass); 7] = [
    (30_000.0, f64::INFINITY, SpectralClass::O),
    (10_000.0, 30_000.0, SpectralClass::B),
    (7_500.0, 10_000.0, SpectralClass::A),
    (6_000.0, 7_500.0, SpectralClass::F),
    (5_000.0, 6_000.0, SpectralClass::G),
    (3_500.0, 5_000.0, SpectralClass::K),
    (2_500.0, 3_500.0, SpectralClass::M),
];

impl SpectralClass {
    /// Looks up the class for a temperature in kelvin.
    ///
    /// Temperatures below 2500 K, and NaN, map to [`SpectralClass::Unknown`].
    #[must_use]
    pub fn from_kelvin(value: f64) -> Self {
        SPECTRAL_CLASSES
            .iter()
            .find(|(lower, upper, _)| *lower <= value && value < *upper)
            .map_or(Self::Unknown, |&(_, _, class)| class)
    }

    /// Looks up the class for a `uom` temperature.
    #[must_use]
    pub fn from_temperature(temperature: ThermodynamicTemperature) -> Self {
        Self::from_kelvin(temperature.get::<kelvin>())
    }

    /// Returns the `[lower, upper)` temperature bounds of the class.
    ///
    /// Returns `None` for [`SpectralClass::Unknown`].
    #[must_use]
    pub fn kelvin_range(self) -> Option<(f64, f64)> {
        SPECTRAL_CLASSES
            .iter()
            .find(|(_, _, class)| *class == self)
            .map(|&(lower, upper, _)| (lower, upper))
    }

    /// Returns the label shown next to a plotted spectrum.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::O => "O",
            Self::B => "B",
            Self::A => "A",
            Self::F => "F",
            Self::G => "G",
            Self::K => "K",
            Self::M => "M",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_reference_stars() {
        assert_eq!(SpectralClass::from_kelvin(40_000.0), SpectralClass::O);
        assert_eq!(SpectralClass::from_kelvin(20_000.0), SpectralClass::B);
        assert_eq!(SpectralClass::from_kelvin(9_000.0), SpectralClass::A);
        assert_eq!(SpectralClass::from_kelvin(6_500.0), SpectralClass::F);
        assert_eq!(SpectralClass::from_kelvin(5_778.0), SpectralClass::G);
        assert_eq!(SpectralClass::from_kelvin(4_000.0), SpectralClass::K);
        assert_eq!(SpectralClass::from_kelvin(3_000.0), SpectralClass::M);

        let sirius = ThermodynamicTemperature::new::<kelvin>(9_940.0);
        assert_eq!(SpectralClass::from_temperature(sirius), SpectralClass::A);
    }

    #[test]
    fn boundaries_belong_to_the_hotter_class() {
        assert_eq!(SpectralClass::from_kelvin(30_000.0), SpectralClass::O);
        assert_eq!(SpectralClass::from_kelvin(10_000.0), SpectralClass::B);
        assert_eq!(SpectralClass::from_kelvin(5_000.0), SpectralClass::G);
        assert_eq!(SpectralClass::from_kelvin(2_500.0), SpectralClass::M);
    }

    #[test]
    fn cool_or_invalid_temperatures_are_unknown() {
        assert_eq!(SpectralClass::from_kelvin(2_499.9), SpectralClass::Unknown);
        assert_eq!(SpectralClass::from_kelvin(-10.0), SpectralClass::Unknown);
        assert_eq!(SpectralClass::from_kelvin(f64::NAN), SpectralClass::Unknown);
        assert_eq!(SpectralClass::Unknown.kelvin_range(), None);
    }

    #[test]
    fn table_is_contiguous() {
        for pair in SPECTRAL_CLASSES.windows(2) {
            assert_eq!(pair[0].0, pair[1].1);
        }
        assert_eq!(SpectralClass::G.kelvin_range(), Some((5_000.0, 6_000.0)));
    }

    #[test]
    fn displays_label() {
        assert_eq!(SpectralClass::K.to_string(), "K");
        assert_eq!(SpectralClass::Unknown.to_string(), "unknown");
    }
}
