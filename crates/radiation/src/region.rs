/// A named stretch of the spectrum, shaded behind plotted curves.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpectralRegion {
    /// Short label, such as `"UV"`.
    pub name: &'static str,

    /// Lower bound, nm.
    pub lower_nm: f64,

    /// Upper bound, nm.
    pub upper_nm: f64,
}

pub const ULTRAVIOLET: SpectralRegion = SpectralRegion {
    name: "UV",
    lower_nm: 10.0,
    upper_nm: 400.0,
};

pub const VISIBLE: SpectralRegion = SpectralRegion {
    name: "Visible",
    lower_nm: 400.0,
    upper_nm: 780.0,
};

pub const NEAR_INFRARED: SpectralRegion = SpectralRegion {
    name: "NIR",
    lower_nm: 780.0,
    upper_nm: 2500.0,
};

pub const MID_INFRARED: SpectralRegion = SpectralRegion {
    name: "MIR",
    lower_nm: 2500.0,
    upper_nm: 4000.0,
};

/// The regions in order of increasing wavelength.
pub const SPECTRAL_REGIONS: [SpectralRegion; 4] =
    [ULTRAVIOLET, VISIBLE, NEAR_INFRARED, MID_INFRARED];

impl SpectralRegion {
    /// Returns the midpoint of the region, nm. Labels are anchored here.
    #[must_use]
    pub fn center_nm(&self) -> f64 {
        0.5 * (self.lower_nm + self.upper_nm)
    }

    /// Returns true if the wavelength lies in `[lower, upper)`.
    #[must_use]
    pub fn contains(&self, wavelength_nm: f64) -> bool {
        (self.lower_nm..self.upper_nm).contains(&wavelength_nm)
    }

    /// Returns the region containing the wavelength, if any.
    #[must_use]
    pub fn find(wavelength_nm: f64) -> Option<Self> {
        SPECTRAL_REGIONS
            .into_iter()
            .find(|region| region.contains(wavelength_nm))
    }
}
