use log::debug;
use planck_solvers::quadrature::gauss_kronrod::{self, Domain};

use crate::{
    PlanckIntegrand, RadiationConfig, RadiationError, Temperature, WavelengthRange,
    integrand::{INTEGRAND_CUTOFF, dimensionless, flux_prefactor},
};

/// Returns the total energy flux emitted by a black body, erg·s⁻¹·cm⁻².
///
/// Integrates [`planck_integrand`](crate::planck_integrand) over `x ∈ [0, ∞)`
/// and scales by `π·2(k_B·T)⁴/(h³c²)`. The result agrees with `σT⁴`.
///
/// # Errors
///
/// Returns [`RadiationError::InvalidTemperature`] for a non-positive or
/// non-finite temperature, [`RadiationError::Overflow`] if the flux exceeds
/// the `f64` range, and [`RadiationError::IntegrationNonConvergence`] if the
/// quadrature does not meet its tolerance.
pub fn total_flux(kelvin: f64) -> Result<f64, RadiationError> {
    total_flux_with(kelvin, &RadiationConfig::default())
}

/// Same as [`total_flux`], with explicit numerical settings.
///
/// # Errors
///
/// Returns an error if the temperature or config is invalid, or the
/// quadrature fails or does not converge.
pub fn total_flux_with(kelvin: f64, config: &RadiationConfig) -> Result<f64, RadiationError> {
    let temperature = Temperature::from_kelvin(kelvin)?;
    config.validate()?;
    total_flux_at(temperature, config)
}

/// Returns the energy flux emitted between two wavelengths, erg·s⁻¹·cm⁻².
///
/// This is the numerator of [`band_flux_fraction`], before normalisation.
///
/// # Errors
///
/// Returns an error if the temperature or wavelengths are invalid, or the
/// quadrature fails or does not converge.
pub fn band_flux(kelvin: f64, lambda1: f64, lambda2: f64) -> Result<f64, RadiationError> {
    let temperature = Temperature::from_kelvin(kelvin)?;
    let range = WavelengthRange::new(lambda1, lambda2)?;
    let config = RadiationConfig::default();

    temperature.finite(flux_prefactor(temperature) * band_integral(temperature, range, &config)?)
}

/// Returns the percentage of the total flux emitted between two wavelengths.
///
/// The wavelengths are in nanometres and may be given in either order.
/// Equal wavelengths give exactly `0`. The result is rounded to four decimals
/// and lies in `[0, 100]`.
///
/// # Errors
///
/// Returns [`RadiationError::InvalidTemperature`] or
/// [`RadiationError::InvalidWavelengthRange`] for invalid inputs, and
/// [`RadiationError::IntegrationNonConvergence`] if either integral does not
/// meet its tolerance.
pub fn band_flux_fraction(kelvin: f64, lambda1: f64, lambda2: f64) -> Result<f64, RadiationError> {
    band_flux_fraction_with(kelvin, lambda1, lambda2, &RadiationConfig::default())
}

/// Same as [`band_flux_fraction`], with explicit numerical settings.
///
/// # Errors
///
/// Returns an error if the temperature, wavelengths, or config are invalid,
/// or the quadrature fails or does not converge.
pub fn band_flux_fraction_with(
    kelvin: f64,
    lambda1: f64,
    lambda2: f64,
    config: &RadiationConfig,
) -> Result<f64, RadiationError> {
    let temperature = Temperature::from_kelvin(kelvin)?;
    let range = WavelengthRange::new(lambda1, lambda2)?;
    config.validate()?;
    band_flux_fraction_at(temperature, range, config)
}

pub(crate) fn total_flux_at(
    temperature: Temperature,
    config: &RadiationConfig,
) -> Result<f64, RadiationError> {
    let flux = temperature.finite(flux_prefactor(temperature) * full_integral(config)?)?;
    debug!("total flux at {} K: {flux:e} erg/s/cm²", temperature.kelvin());
    Ok(flux)
}

/// Computes the rounded band percentage for already validated inputs.
///
/// The flux prefactor multiplies both the band and the total integral, so the
/// ratio of the integrals is the ratio of the fluxes.
pub(crate) fn band_flux_fraction_at(
    temperature: Temperature,
    range: WavelengthRange,
    config: &RadiationConfig,
) -> Result<f64, RadiationError> {
    if range.is_empty() {
        return Ok(0.0);
    }

    let band = band_integral(temperature, range, config)?;
    let total = full_integral(config)?;
    let percent = config.round_percent((100.0 * band / total).clamp(0.0, 100.0));

    debug!(
        "band [{} nm, {} nm] at {} K carries {percent}% of the total flux",
        range.shorter_nm(),
        range.longer_nm(),
        temperature.kelvin(),
    );

    Ok(percent)
}

/// Integrates the Planck integrand over `[0, ∞)`; the exact value is `π⁴/15`.
fn full_integral(config: &RadiationConfig) -> Result<f64, RadiationError> {
    integrate(Domain::to_infinity(0.0), config)
}

/// Integrates the Planck integrand between the `x` images of a wavelength range.
///
/// The longer wavelength sets the lower `x` limit. The upper limit is capped at
/// [`INTEGRAND_CUTOFF`].
fn band_integral(
    temperature: Temperature,
    range: WavelengthRange,
    config: &RadiationConfig,
) -> Result<f64, RadiationError> {
    let x_lower = dimensionless(range.longer_nm(), temperature);
    let x_upper = dimensionless(range.shorter_nm(), temperature).min(INTEGRAND_CUTOFF);

    if x_lower >= x_upper {
        return Ok(0.0);
    }

    integrate(Domain::finite(x_lower, x_upper), config)
}

fn integrate(domain: Domain, config: &RadiationConfig) -> Result<f64, RadiationError> {
    let solution = gauss_kronrod::integrate_unobserved(&PlanckIntegrand, domain, &config.quadrature)?;

    if !solution.is_converged() {
        let (lower, upper) = match domain {
            Domain::Finite { lower, upper } => (lower, upper),
            Domain::ToInfinity { lower } => (lower, f64::INFINITY),
        };
        return Err(RadiationError::IntegrationNonConvergence {
            lower,
            upper,
            status: solution.status,
            estimate: solution.value,
            abs_error: solution.abs_error,
        });
    }

    Ok(solution.value)
}
