//! Black-body radiation from Planck's law.
//!
//! Given a temperature, this crate evaluates:
//!
//! - [`spectral_distribution`]: the Planck spectral flux density over a fixed
//!   1–4000 nm grid
//! - [`peak_wavelength`]: the wavelength of peak emission (Wien's law)
//! - [`total_flux`]: the total emitted energy flux
//! - [`band_flux_fraction`]: the percentage of that flux inside a wavelength band
//!
//! All physics runs in CGS units: wavelengths are given in nanometres,
//! flux densities in erg·s⁻¹·cm⁻²·nm⁻¹, and fluxes in erg·s⁻¹·cm⁻².
//! [`Blackbody`] offers the same operations over `uom` quantities.
//!
//! The flux integrals use the dimensionless variable `x = hc/(λ·k_B·T)`, which
//! turns Planck's law into the temperature-independent [`planck_integrand`].
//!
//! # Example
//!
//! ```
//! use planck_radiation::{band_flux_fraction, peak_wavelength, SpectralClass};
//!
//! let sun = 5778.0;
//! let peak = peak_wavelength(sun).unwrap();
//! assert!((peak - 501.56).abs() < 0.01);
//!
//! let visible = band_flux_fraction(sun, 380.0, 780.0).unwrap();
//! assert!(visible > 40.0 && visible < 50.0);
//!
//! assert_eq!(SpectralClass::from_kelvin(sun), SpectralClass::G);
//! ```

mod blackbody;
mod config;
mod error;
mod flux;
mod integrand;
mod range;
mod region;
mod spectrum;
mod stellar;
mod summary;
mod temperature;
mod wien;

pub mod constants;
pub mod units;

pub use blackbody::Blackbody;
pub use config::{ConfigError, RadiationConfig};
pub use error::RadiationError;
pub use flux::{
    band_flux, band_flux_fraction, band_flux_fraction_with, total_flux, total_flux_with,
};
pub use integrand::{INTEGRAND_CUTOFF, PlanckIntegrand, dimensionless, planck_integrand};
pub use range::WavelengthRange;
pub use region::{
    MID_INFRARED, NEAR_INFRARED, SPECTRAL_REGIONS, SpectralRegion, ULTRAVIOLET, VISIBLE,
};
pub use spectrum::{
    GRID_END_NM, GRID_LEN, GRID_START_NM, Spectrum, spectral_distribution, spectral_flux_density,
    wavelength_grid,
};
pub use stellar::{SPECTRAL_CLASSES, SpectralClass};
pub use summary::{BandSummary, SpectrumSummary};
pub use temperature::Temperature;
pub use wien::peak_wavelength;
