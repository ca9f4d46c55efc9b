//! Conversions between the CGS values used internally and `uom` quantities.

use uom::{
    si::{
        Quantity, ISQ, SI,
        f64::{HeatFluxDensity, Length, Ratio},
        heat_flux_density::watt_per_square_meter,
        length::nanometer,
        ratio::percent,
    },
    typenum::{N1, N3, P1, Z0},
};

/// Spectral flux density per unit wavelength, W/m³ in SI.
pub type SpectralFluxDensity = Quantity<ISQ<N1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// W/m² in one erg·s⁻¹·cm⁻².
pub const WATT_PER_SQUARE_METER_PER_CGS_FLUX: f64 = 1e-3;

/// W/m³ in one erg·s⁻¹·cm⁻²·nm⁻¹.
pub const WATT_PER_CUBIC_METER_PER_CGS_DENSITY: f64 = 1e6;

/// Wraps an energy flux in erg·s⁻¹·cm⁻².
#[must_use]
pub fn heat_flux_from_cgs(flux: f64) -> HeatFluxDensity {
    HeatFluxDensity::new::<watt_per_square_meter>(flux * WATT_PER_SQUARE_METER_PER_CGS_FLUX)
}

/// Returns an energy flux in erg·s⁻¹·cm⁻².
#[must_use]
pub fn heat_flux_to_cgs(flux: HeatFluxDensity) -> f64 {
    flux.get::<watt_per_square_meter>() / WATT_PER_SQUARE_METER_PER_CGS_FLUX
}

/// Wraps a spectral flux density in erg·s⁻¹·cm⁻²·nm⁻¹.
#[must_use]
pub fn spectral_density_from_cgs(density: f64) -> SpectralFluxDensity {
    SpectralFluxDensity {
        dimension: std::marker::PhantomData,
        units: std::marker::PhantomData,
        value: density * WATT_PER_CUBIC_METER_PER_CGS_DENSITY,
    }
}

#[must_use]
pub fn wavelength_from_nm(nm: f64) -> Length {
    Length::new::<nanometer>(nm)
}

#[must_use]
pub fn wavelength_to_nm(length: Length) -> f64 {
    length.get::<nanometer>()
}

/// Wraps a percentage in `[0, 100]`.
#[must_use]
pub fn ratio_from_percent(value: f64) -> Ratio {
    Ratio::new::<percent>(value)
}
