use crate::{SpectralClass, WavelengthRange};

/// Headline numbers shown alongside a plotted spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpectrumSummary {
    pub temperature_kelvin: f64,

    /// Wien peak, nm.
    pub peak_wavelength_nm: f64,

    /// Total energy flux, erg·s⁻¹·cm⁻².
    pub total_flux: f64,

    pub spectral_class: SpectralClass,
}

/// The share of a body's energy inside one wavelength band.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BandSummary {
    pub temperature_kelvin: f64,
    pub range: WavelengthRange,

    /// Rounded percentage of the total flux.
    pub percent: f64,

    pub spectral_class: SpectralClass,
}

impl BandSummary {
    /// Returns the percentage as a fraction in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.percent / 100.0
    }
}
