use uom::si::f64::{HeatFluxDensity, Length, Ratio, ThermodynamicTemperature};

use crate::{
    BandSummary, RadiationConfig, RadiationError, SPECTRAL_REGIONS, SpectralClass, SpectralRegion,
    Spectrum, SpectrumSummary, Temperature, WavelengthRange,
    flux::{band_flux_fraction_at, total_flux_at},
    spectrum::spectral_flux_density,
    units::{
        SpectralFluxDensity, heat_flux_from_cgs, ratio_from_percent, spectral_density_from_cgs,
        wavelength_from_nm, wavelength_to_nm,
    },
    wien::peak_wavelength_at,
};

/// An ideal black body at a fixed temperature.
///
/// Offers the free functions of this crate over `uom` quantities. The
/// temperature is validated once, on construction.
///
/// # Example
///
/// ```
/// use planck_radiation::{Blackbody, SpectralClass};
/// use uom::si::{f64::Length, length::nanometer, ratio::percent};
///
/// let sun = Blackbody::from_kelvin(5778.0).unwrap();
/// assert_eq!(sun.spectral_class(), SpectralClass::G);
///
/// let visible = sun
///     .band_flux_fraction(
///         Length::new::<nanometer>(380.0),
///         Length::new::<nanometer>(780.0),
///     )
///     .unwrap();
/// assert!((visible.get::<percent>() - 46.5256).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blackbody {
    temperature: Temperature,
    config: RadiationConfig,
}

impl Blackbody {
    /// Creates a black body at the given temperature.
    ///
    /// # Errors
    ///
    /// Returns [`RadiationError::InvalidTemperature`] if the temperature is
    /// not finite or not above absolute zero.
    pub fn new(temperature: ThermodynamicTemperature) -> Result<Self, RadiationError> {
        Ok(Self {
            temperature: Temperature::try_from(temperature)?,
            config: RadiationConfig::default(),
        })
    }

    /// Creates a black body from a temperature in kelvin.
    ///
    /// # Errors
    ///
    /// Returns [`RadiationError::InvalidTemperature`] for a non-positive or
    /// non-finite value.
    pub fn from_kelvin(kelvin: f64) -> Result<Self, RadiationError> {
        Ok(Self {
            temperature: Temperature::from_kelvin(kelvin)?,
            config: RadiationConfig::default(),
        })
    }

    /// Replaces the numerical settings used by the flux integrals.
    ///
    /// # Errors
    ///
    /// Returns [`RadiationError::InvalidConfig`] if the config is invalid.
    pub fn with_config(self, config: RadiationConfig) -> Result<Self, RadiationError> {
        config.validate()?;
        Ok(Self { config, ..self })
    }

    /// Returns the temperature exactly as it was given.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature.into()
    }

    /// Returns the temperature in kelvin.
    #[must_use]
    pub fn kelvin(&self) -> f64 {
        self.temperature.kelvin()
    }

    /// Returns the numerical settings used by the flux integrals.
    #[must_use]
    pub fn config(&self) -> &RadiationConfig {
        &self.config
    }

    /// Returns the stellar class for this temperature.
    #[must_use]
    pub fn spectral_class(&self) -> SpectralClass {
        SpectralClass::from_kelvin(self.kelvin())
    }

    /// Samples the spectrum over the standard 1–4000 nm grid.
    ///
    /// # Errors
    ///
    /// Returns [`RadiationError::Overflow`] if the densities exceed the `f64`
    /// range.
    pub fn spectrum(&self) -> Result<Spectrum, RadiationError> {
        Spectrum::sample(self.temperature)
    }

    /// Evaluates Planck's law at a single wavelength.
    ///
    /// # Errors
    ///
    /// Returns [`RadiationError::Overflow`] if the density exceeds the `f64`
    /// range.
    pub fn spectral_flux_density(
        &self,
        wavelength: Length,
    ) -> Result<SpectralFluxDensity, RadiationError> {
        spectral_flux_density(wavelength_to_nm(wavelength), self.temperature)
            .map(spectral_density_from_cgs)
    }

    /// Returns the wavelength of peak emission.
    ///
    /// # Errors
    ///
    /// Returns [`RadiationError::Overflow`] if the peak exceeds the `f64` range.
    pub fn peak_wavelength(&self) -> Result<Length, RadiationError> {
        peak_wavelength_at(self.temperature).map(wavelength_from_nm)
    }

    /// Returns the total emitted energy flux.
    ///
    /// # Errors
    ///
    /// Returns an error if the quadrature fails or does not converge.
    pub fn total_flux(&self) -> Result<HeatFluxDensity, RadiationError> {
        total_flux_at(self.temperature, &self.config).map(heat_flux_from_cgs)
    }

    /// Returns the share of the total flux emitted between two wavelengths.
    ///
    /// # Errors
    ///
    /// Returns [`RadiationError::InvalidWavelengthRange`] for non-positive or
    /// non-finite wavelengths, or an error if the quadrature fails.
    pub fn band_flux_fraction(
        &self,
        lambda1: Length,
        lambda2: Length,
    ) -> Result<Ratio, RadiationError> {
        let range = WavelengthRange::new(wavelength_to_nm(lambda1), wavelength_to_nm(lambda2))?;
        self.band_percent(range).map(ratio_from_percent)
    }

    /// Returns the rounded percentage of the total flux in each of
    /// [`SPECTRAL_REGIONS`], in order of increasing wavelength.
    ///
    /// # Errors
    ///
    /// Returns an error if the quadrature fails or does not converge.
    pub fn region_fractions(&self) -> Result<Vec<(SpectralRegion, f64)>, RadiationError> {
        SPECTRAL_REGIONS
            .into_iter()
            .map(|region| {
                let range = WavelengthRange::new(region.lower_nm, region.upper_nm)?;
                Ok((region, self.band_percent(range)?))
            })
            .collect()
    }

    /// Collects the values shown alongside a plotted spectrum.
    ///
    /// # Errors
    ///
    /// Returns an error if the total flux integral fails or a value exceeds
    /// the `f64` range.
    pub fn summary(&self) -> Result<SpectrumSummary, RadiationError> {
        Ok(SpectrumSummary {
            temperature_kelvin: self.kelvin(),
            peak_wavelength_nm: peak_wavelength_at(self.temperature)?,
            total_flux: total_flux_at(self.temperature, &self.config)?,
            spectral_class: self.spectral_class(),
        })
    }

    /// Computes the band percentage for wavelengths in nanometres and
    /// packages it for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the wavelengths are invalid or the quadrature fails.
    pub fn band_summary(&self, lambda1: f64, lambda2: f64) -> Result<BandSummary, RadiationError> {
        let range = WavelengthRange::new(lambda1, lambda2)?;
        Ok(BandSummary {
            temperature_kelvin: self.kelvin(),
            range,
            percent: self.band_percent(range)?,
            spectral_class: self.spectral_class(),
        })
    }

    fn band_percent(&self, range: WavelengthRange) -> Result<f64, RadiationError> {
        band_flux_fraction_at(self.temperature, range, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use planck_solvers::quadrature::gauss_kronrod;
    use uom::si::{
        heat_flux_density::watt_per_square_meter, length::nanometer, ratio::percent,
        thermodynamic_temperature::{degree_celsius, kelvin},
    };

    use crate::{VISIBLE, peak_wavelength, total_flux};

    fn nm(value: f64) -> Length {
        Length::new::<nanometer>(value)
    }

    fn sun() -> Blackbody {
        Blackbody::from_kelvin(5778.0).unwrap()
    }

    #[test]
    fn temperature_is_kept_unmodified() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(5504.85);
        let body = Blackbody::new(t).unwrap();
        assert_relative_eq!(body.temperature().get::<kelvin>(), t.get::<kelvin>());
        assert_relative_eq!(body.kelvin(), 5778.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_invalid_temperature() {
        let zero = ThermodynamicTemperature::new::<kelvin>(0.0);
        assert!(matches!(
            Blackbody::new(zero),
            Err(RadiationError::InvalidTemperature { .. })
        ));
        assert!(Blackbody::from_kelvin(-100.0).is_err());
    }

    #[test]
    fn matches_free_functions() {
        let body = sun();
        assert_relative_eq!(
            body.peak_wavelength().unwrap().get::<nanometer>(),
            peak_wavelength(5778.0).unwrap(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            body.total_flux().unwrap().get::<watt_per_square_meter>(),
            total_flux(5778.0).unwrap() * 1e-3,
            max_relative = 1e-12
        );
    }

    #[test]
    fn visible_fraction_as_ratio() {
        let visible = sun().band_flux_fraction(nm(780.0), nm(380.0)).unwrap();
        assert_relative_eq!(visible.get::<percent>(), 46.5256, epsilon = 1e-9);
    }

    #[test]
    fn rejects_invalid_band() {
        assert!(matches!(
            sun().band_flux_fraction(nm(0.0), nm(500.0)),
            Err(RadiationError::InvalidWavelengthRange { .. })
        ));
    }

    #[test]
    fn point_density_matches_spectrum() {
        let body = sun();
        let density = body.spectral_flux_density(nm(500.0)).unwrap();
        assert_relative_eq!(density.value, 2.63727e7 * 1e6, max_relative = 1e-5);
    }

    #[test]
    fn region_fractions_at_solar_temperature() {
        let fractions = sun().region_fractions().unwrap();
        let names: Vec<&str> = fractions.iter().map(|(region, _)| region.name).collect();
        assert_eq!(names, ["UV", "Visible", "NIR", "MIR"]);

        let expected = [12.2238, 44.3095, 40.0402, 2.4533];
        for ((_, share), expected) in fractions.iter().zip(expected) {
            assert_relative_eq!(*share, expected, epsilon = 1e-3);
        }
        assert_eq!(fractions[1].0, VISIBLE);
    }

    #[test]
    fn summaries() {
        let body = sun();

        let summary = body.summary().unwrap();
        assert_eq!(summary.spectral_class, SpectralClass::G);
        assert_relative_eq!(summary.peak_wavelength_nm, 501.5576, epsilon = 1e-4);
        assert_relative_eq!(summary.total_flux, 6.3195e10, max_relative = 1e-4);

        let band = body.band_summary(780.0, 380.0).unwrap();
        assert_relative_eq!(band.range.shorter_nm(), 380.0);
        assert_relative_eq!(band.percent, 46.5256, epsilon = 1e-9);
        assert_relative_eq!(band.fraction(), 0.465256, epsilon = 1e-9);
    }

    #[test]
    fn custom_config_controls_rounding_and_budget() {
        let body = sun()
            .with_config(RadiationConfig {
                percent_decimals: 1,
                ..RadiationConfig::default()
            })
            .unwrap();
        let visible = body.band_flux_fraction(nm(380.0), nm(780.0)).unwrap();
        assert_relative_eq!(visible.get::<percent>(), 46.5, epsilon = 1e-9);

        let starved = sun()
            .with_config(RadiationConfig {
                quadrature: gauss_kronrod::Config {
                    max_subdivisions: 0,
                    ..gauss_kronrod::Config::default()
                },
                ..RadiationConfig::default()
            })
            .unwrap();
        assert!(matches!(
            starved.total_flux(),
            Err(RadiationError::IntegrationNonConvergence { .. })
        ));

        let invalid = RadiationConfig {
            percent_decimals: 99,
            ..RadiationConfig::default()
        };
        assert!(matches!(
            sun().with_config(invalid),
            Err(RadiationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn extreme_temperature_reports_overflow() {
        let body = Blackbody::from_kelvin(1e80).unwrap();
        assert!(body.peak_wavelength().unwrap().get::<nanometer>().is_finite());
        assert!(matches!(
            body.total_flux(),
            Err(RadiationError::Overflow { .. })
        ));
        assert!(matches!(body.summary(), Err(RadiationError::Overflow { .. })));

        let hotter = Blackbody::from_kelvin(1e300).unwrap();
        assert!(matches!(hotter.spectrum(), Err(RadiationError::Overflow { .. })));
    }
}
