use crate::RadiationError;

/// A validated wavelength interval in nanometres.
///
/// Endpoints may be given in either order; they are stored shortest first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WavelengthRange {
    shorter_nm: f64,
    longer_nm: f64,
}

impl WavelengthRange {
    /// Creates a range from two wavelengths in nanometres.
    ///
    /// # Errors
    ///
    /// Returns [`RadiationError::InvalidWavelengthRange`] if either endpoint
    /// is not finite or not greater than zero.
    pub fn new(lambda1: f64, lambda2: f64) -> Result<Self, RadiationError> {
        let is_valid = |value: f64| value.is_finite() && value > 0.0;
        if !is_valid(lambda1) || !is_valid(lambda2) {
            return Err(RadiationError::InvalidWavelengthRange { lambda1, lambda2 });
        }

        Ok(Self {
            shorter_nm: lambda1.min(lambda2),
            longer_nm: lambda1.max(lambda2),
        })
    }

    /// Returns the shorter endpoint, nm.
    #[must_use]
    pub fn shorter_nm(&self) -> f64 {
        self.shorter_nm
    }

    /// Returns the longer endpoint, nm.
    #[must_use]
    pub fn longer_nm(&self) -> f64 {
        self.longer_nm
    }

    /// Returns the width of the range, nm.
    #[must_use]
    pub fn width_nm(&self) -> f64 {
        self.longer_nm - self.shorter_nm
    }

    /// Returns true if both endpoints coincide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width_nm() == 0.0
    }

    /// Returns true if the wavelength lies inside the closed range.
    #[must_use]
    pub fn contains(&self, wavelength_nm: f64) -> bool {
        (self.shorter_nm..=self.longer_nm).contains(&wavelength_nm)
    }
}
