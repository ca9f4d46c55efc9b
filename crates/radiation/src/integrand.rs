use std::{convert::Infallible, f64::consts::PI};

use planck_core::Model;

use crate::{
    Temperature,
    constants::{BOLTZMANN, CM_PER_NM, HC_OVER_K, PLANCK, SPEED_OF_LIGHT},
};

/// Upper limit on `x` for finite band integrals.
///
/// Past this point the integrand is below 1e-37, so nothing above it can
/// change a rounded percentage. Capping the limit keeps the quadrature's
/// first samples where the integrand actually carries energy.
pub const INTEGRAND_CUTOFF: f64 = 100.0;

/// The dimensionless Planck integrand `x³/(eˣ − 1)`.
///
/// Returns `0` at and below `x = 0` (the Rayleigh-Jeans limit of the
/// expression) and wherever `eˣ` overflows (the Wien limit).
/// Integrates to `π⁴/15` over `[0, ∞)`.
#[must_use]
pub fn planck_integrand(x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }

    let denominator = x.exp_m1();
    if denominator.is_infinite() {
        return 0.0;
    }

    x.powi(3) / denominator
}

/// [`planck_integrand`] as a quadrature model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanckIntegrand;

impl Model for PlanckIntegrand {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(planck_integrand(*x))
    }
}

/// Computes `x = hc/(λ·k_B·T)` for a wavelength in nanometres.
///
/// Longer wavelengths map to smaller `x`.
#[must_use]
pub fn dimensionless(wavelength_nm: f64, temperature: Temperature) -> f64 {
    HC_OVER_K / (wavelength_nm * CM_PER_NM * temperature.kelvin())
}

/// Converts an integral of [`planck_integrand`] into an energy flux.
///
/// The factor is `π·2(k_B·T)⁴/(h³c²)`, in erg·s⁻¹·cm⁻².
pub(crate) fn flux_prefactor(temperature: Temperature) -> f64 {
    let kt = BOLTZMANN * temperature.kelvin();
    PI * 2.0 * kt.powi(4) / (PLANCK.powi(3) * SPEED_OF_LIGHT.powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn vanishes_at_both_limits() {
        assert_eq!(planck_integrand(0.0), 0.0);
        assert_eq!(planck_integrand(-1.0), 0.0);
        assert_eq!(planck_integrand(800.0), 0.0);
        assert_eq!(planck_integrand(f64::INFINITY), 0.0);
    }

    #[test]
    fn small_x_follows_rayleigh_jeans() {
        // x³/(eˣ − 1) → x² as x → 0.
        let x = 1e-6;
        assert_relative_eq!(planck_integrand(x), x * x, max_relative = 1e-6);
    }

    #[test]
    fn peaks_near_wien_root() {
        // The maximum of x³/(eˣ − 1) solves 3(1 − e⁻ˣ) = x.
        let peak = 2.821_439_372_122_079;
        let at_peak = planck_integrand(peak);
        assert!(at_peak > planck_integrand(peak - 0.01));
        assert!(at_peak > planck_integrand(peak + 0.01));
    }

    #[test]
    fn model_matches_function() {
        assert_eq!(PlanckIntegrand.call(&3.0).unwrap(), planck_integrand(3.0));
    }

    #[test]
    fn longer_wavelength_gives_smaller_x() {
        let t = Temperature::from_kelvin(5778.0).unwrap();
        let blue = dimensionless(400.0, t);
        let red = dimensionless(700.0, t);
        assert!(blue > red);
        assert_relative_eq!(blue, 6.2254, max_relative = 1e-4);
    }

    #[test]
    fn prefactor_scales_as_fourth_power() {
        let t1 = Temperature::from_kelvin(3000.0).unwrap();
        let t2 = Temperature::from_kelvin(6000.0).unwrap();
        assert_relative_eq!(flux_prefactor(t2) / flux_prefactor(t1), 16.0, epsilon = 1e-12);
    }
}
