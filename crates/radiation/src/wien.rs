use crate::{
    RadiationError, Temperature,
    constants::{NM_PER_CM, WIEN},
};

/// Returns the wavelength of peak emission in nanometres.
///
/// Uses Wien's displacement law `λ_max = b/T` with `b = 0.2898 cm·K`.
///
/// # Errors
///
/// Returns [`RadiationError::InvalidTemperature`] if `kelvin` is not finite
/// or not greater than zero, and [`RadiationError::Overflow`] for subnormal
/// temperatures whose peak lies beyond the `f64` range.
pub fn peak_wavelength(kelvin: f64) -> Result<f64, RadiationError> {
    let temperature = Temperature::from_kelvin(kelvin)?;
    peak_wavelength_at(temperature)
}

pub(crate) fn peak_wavelength_at(temperature: Temperature) -> Result<f64, RadiationError> {
    temperature.finite(WIEN / temperature.kelvin() * NM_PER_CM)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn solar_peak_is_green() {
        assert_relative_eq!(peak_wavelength(5778.0).unwrap(), 501.5576, epsilon = 1e-4);
    }

    #[test]
    fn product_with_temperature_is_constant() {
        for kelvin in [2500.0, 5778.0, 12_000.0, 45_000.0] {
            let peak = peak_wavelength(kelvin).unwrap();
            assert_relative_eq!(peak * kelvin, 2.898e6, max_relative = 1e-12);
        }
    }

    #[test]
    fn rejects_invalid_temperature() {
        assert!(matches!(
            peak_wavelength(0.0),
            Err(RadiationError::InvalidTemperature { .. })
        ));
        assert!(matches!(
            peak_wavelength(-100.0),
            Err(RadiationError::InvalidTemperature { .. })
        ));
    }

    #[test]
    fn subnormal_temperature_overflows() {
        assert!(matches!(
            peak_wavelength(1e-320),
            Err(RadiationError::Overflow { .. })
        ));
        assert!(peak_wavelength(1e-300).unwrap().is_finite());
    }
}
