//! Numerical solvers for the Planck toolkit.
//!
//! # Modules
//!
//! - [`quadrature`]: definite integrals over finite and semi-infinite domains

pub mod quadrature;
