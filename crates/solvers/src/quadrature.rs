//! Solvers for definite integrals of scalar integrands.
//!
//! An integrand is any [`Model`] that maps an `f64` abscissa to an `f64`
//! value. Solvers in this module estimate the integral of that model over a
//! [`Domain`](gauss_kronrod::Domain) together with an absolute error bound.
//!
//! # Solvers
//!
//! - [`gauss_kronrod`]: globally adaptive 15-point Gauss-Kronrod quadrature
//!
//! [`Model`]: planck_core::Model

pub mod gauss_kronrod;
