use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::RadiationError;

/// An absolute temperature that is finite and strictly positive.
///
/// Every operation in this crate validates its temperature through this type
/// before doing any work.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Temperature(f64);

impl Temperature {
    /// Creates a temperature from a value in kelvin.
    ///
    /// # Errors
    ///
    /// Returns [`RadiationError::InvalidTemperature`] if the value is not
    /// finite or not greater than zero.
    pub fn from_kelvin(value: f64) -> Result<Self, RadiationError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(RadiationError::InvalidTemperature { kelvin: value })
        }
    }

    /// Returns the temperature in kelvin.
    #[inline]
    #[must_use]
    pub fn kelvin(self) -> f64 {
        self.0
    }

    /// Passes through a value derived from this temperature if it is finite.
    pub(crate) fn finite(self, value: f64) -> Result<f64, RadiationError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(RadiationError::Overflow { kelvin: self.0 })
        }
    }
}

impl TryFrom<ThermodynamicTemperature> for Temperature {
    type Error = RadiationError;

    fn try_from(temperature: ThermodynamicTemperature) -> Result<Self, Self::Error> {
        Self::from_kelvin(temperature.get::<kelvin>())
    }
}

impl From<Temperature> for ThermodynamicTemperature {
    fn from(temperature: Temperature) -> Self {
        ThermodynamicTemperature::new::<kelvin>(temperature.0)
    }
}
