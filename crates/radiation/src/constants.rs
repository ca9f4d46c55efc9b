//! Physical constants in CGS units.
//!
//! Every formula in this crate assumes these exact values. Changing the unit
//! system means changing every conversion factor together.

/// Speed of light in vacuum, cm·s⁻¹.
pub const SPEED_OF_LIGHT: f64 = 2.9979e10;

/// Boltzmann constant, erg·K⁻¹.
pub const BOLTZMANN: f64 = 1.3806e-16;

/// Planck constant, erg·s.
pub const PLANCK: f64 = 6.626e-27;

/// Wien displacement constant, cm·K.
pub const WIEN: f64 = 0.2898;

/// Centimetres per nanometre.
pub const CM_PER_NM: f64 = 1e-7;

/// Nanometres per centimetre.
pub const NM_PER_CM: f64 = 1e7;

/// Second radiation constant `hc/k_B`, cm·K.
pub const HC_OVER_K: f64 = PLANCK * SPEED_OF_LIGHT / BOLTZMANN;

/// Stefan-Boltzmann constant `2π⁵k_B⁴/(15h³c²)` built from the values above,
/// erg·s⁻¹·cm⁻²·K⁻⁴.
#[must_use]
pub fn stefan_boltzmann() -> f64 {
    let pi = std::f64::consts::PI;
    2.0 * pi.powi(5) * BOLTZMANN.powi(4) / (15.0 * PLANCK.powi(3) * SPEED_OF_LIGHT.powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn derived_constants_match_reference_values() {
        assert_relative_eq!(HC_OVER_K, 1.4388, max_relative = 1e-4);
        assert_relative_eq!(stefan_boltzmann(), 5.6704e-5, max_relative = 1e-3);
        assert_relative_eq!(CM_PER_NM * NM_PER_CM, 1.0);
    }
}
