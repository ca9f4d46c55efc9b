use log::debug;

use crate::{
    RadiationError, Temperature,
    constants::{CM_PER_NM, PLANCK, SPEED_OF_LIGHT},
    integrand::dimensionless,
};

/// Number of samples in the wavelength grid.
pub const GRID_LEN: usize = 1000;

/// First wavelength of the grid, nm.
pub const GRID_START_NM: f64 = 1.0;

/// Last wavelength of the grid, nm.
pub const GRID_END_NM: f64 = 4000.0;

/// Returns the fixed evaluation grid: [`GRID_LEN`] evenly spaced wavelengths
/// from [`GRID_START_NM`] to [`GRID_END_NM`] inclusive, in nanometres.
#[must_use]
pub fn wavelength_grid() -> Vec<f64> {
    let last = GRID_LEN - 1;
    let step = (GRID_END_NM - GRID_START_NM) / last as f64;

    (0..GRID_LEN)
        .map(|i| {
            if i == last {
                GRID_END_NM
            } else {
                GRID_START_NM + i as f64 * step
            }
        })
        .collect()
}

/// Evaluates Planck's law at a single wavelength.
///
/// Computes `B(λ,T) = (2hc²/λ⁵)·1/(exp(hc/(λk_BT)) − 1)` in CGS units and
/// rescales it from per-centimetre to per-nanometre, so the result is in
/// erg·s⁻¹·cm⁻²·nm⁻¹. Returns `0` where the exponential overflows.
///
/// # Errors
///
/// Returns [`RadiationError::Overflow`] if the density itself exceeds the
/// `f64` range, which happens only at extreme temperatures.
pub fn spectral_flux_density(
    wavelength_nm: f64,
    temperature: Temperature,
) -> Result<f64, RadiationError> {
    let x = dimensionless(wavelength_nm, temperature);
    let denominator = x.exp_m1();
    if denominator.is_infinite() {
        return Ok(0.0);
    }

    let wavelength_cm = wavelength_nm * CM_PER_NM;
    let per_cm = 2.0 * PLANCK * SPEED_OF_LIGHT.powi(2) / wavelength_cm.powi(5) / denominator;
    temperature.finite(per_cm * CM_PER_NM)
}

/// A sampled black-body spectrum.
///
/// `wavelengths` and `flux` are index-aligned and always the same length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spectrum {
    /// Sample wavelengths, nm, strictly increasing.
    pub wavelengths: Vec<f64>,

    /// Spectral flux density at each wavelength, erg·s⁻¹·cm⁻²·nm⁻¹.
    pub flux: Vec<f64>,
}

impl Spectrum {
    /// Samples the spectrum of a black body over the standard grid.
    ///
    /// # Errors
    ///
    /// Returns [`RadiationError::Overflow`] if any sample exceeds the `f64`
    /// range.
    pub fn sample(temperature: Temperature) -> Result<Self, RadiationError> {
        let wavelengths = wavelength_grid();
        let flux = wavelengths
            .iter()
            .map(|&wavelength| spectral_flux_density(wavelength, temperature))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { wavelengths, flux })
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    /// Returns true if the spectrum has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// Returns `[wavelength, flux]` pairs, ready to draw as a line series.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.wavelengths
            .iter()
            .zip(&self.flux)
            .map(|(&wavelength, &flux)| [wavelength, flux])
    }

    /// Returns the sample with the largest flux as `[wavelength, flux]`.
    ///
    /// Returns `None` for an empty spectrum.
    #[must_use]
    pub fn peak(&self) -> Option<[f64; 2]> {
        self.points()
            .fold(None, |best: Option<[f64; 2]>, point| match best {
                Some(b) if b[1] >= point[1] => best,
                _ => Some(point),
            })
    }
}

/// Evaluates the Planck spectral flux density over the fixed 1–4000 nm grid.
///
/// # Errors
///
/// Returns [`RadiationError::InvalidTemperature`] if `kelvin` is not finite
/// or not greater than zero, and [`RadiationError::Overflow`] if the densities
/// exceed the `f64` range.
pub fn spectral_distribution(kelvin: f64) -> Result<Spectrum, RadiationError> {
    let temperature = Temperature::from_kelvin(kelvin)?;
    let spectrum = Spectrum::sample(temperature)?;

    debug!(
        "sampled {} spectral points at {kelvin} K, peak {:?}",
        spectrum.len(),
        spectrum.peak(),
    );

    Ok(spectrum)
}
