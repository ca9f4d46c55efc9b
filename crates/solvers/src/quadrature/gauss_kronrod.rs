//! Globally adaptive Gauss-Kronrod quadrature.
//!
//! # Algorithm
//!
//! Each segment is estimated with a 15-point Kronrod rule and its embedded
//! 7-point Gauss rule. The difference between the two gives a per-segment
//! error estimate. The solver keeps every segment it has produced and always
//! bisects the one with the largest error estimate, until the summed error
//! satisfies the configured tolerances or the subdivision budget runs out.
//!
//! Semi-infinite domains `[a, ∞)` are mapped onto `(0, 1]` with
//! `x = a + (1 − t)/t`, so the integrand is evaluated at `f(x)/t²`. The Kronrod
//! nodes never touch a segment's endpoints, so neither `t = 0` nor the lower
//! bound itself is ever evaluated directly.
//!
//! # When to Use
//!
//! - Smooth or piecewise smooth integrands
//! - Integrands that decay at least like `1/x²` on semi-infinite domains
//! - Integrable endpoint singularities, at the cost of more subdivisions
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every subdivision. Segment bounds in
//! the event are in the integration variable: `x` for finite domains and `t`
//! for semi-infinite ones. Observers can return [`Action::StopEarly`] to halt
//! and keep the current estimate.

mod action;
mod config;
mod domain;
mod error;
mod event;
mod integrand;
mod rule;
mod search;
mod segment;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use domain::Domain;
pub use error::Error;
pub use event::Event;
pub use segment::Segment;
pub use solution::{Solution, Status};

use planck_core::{Model, Observer};

/// Integrates the model over the domain.
///
/// The observer receives an [`Event`] after each subdivision.
/// See the [module docs](self) for details on event contents.
///
/// Running out of subdivisions is not an error: the returned [`Solution`]
/// carries [`Status::MaxSubdivisions`] along with the best estimate so far.
///
/// # Errors
///
/// Returns an error if the config or domain is invalid, the model fails,
/// or the model produces a non-finite value.
pub fn integrate<M, Obs>(
    model: &M,
    domain: Domain,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: Observer<Event, Action>,
{
    search::search(model, domain, config, observer)
}

/// Integrates the model over the domain without observer support.
///
/// This is a convenience wrapper around [`integrate`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the config or domain is invalid, the model fails,
/// or the model produces a non-finite value.
pub fn integrate_unobserved<M>(model: &M, domain: Domain, config: &Config) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    integrate(model, domain, config, ())
}
