use planck_core::Model;

use super::{Domain, Error};

/// Wraps a model so it can be sampled in the integration variable.
///
/// Applies the domain mapping, rejects non-finite values, and counts calls.
pub(super) struct Integrand<'a, M> {
    model: &'a M,
    domain: Domain,
    evaluations: usize,
}

impl<'a, M> Integrand<'a, M>
where
    M: Model<Input = f64, Output = f64>,
{
    pub(super) fn new(model: &'a M, domain: Domain) -> Self {
        Self {
            model,
            domain,
            evaluations: 0,
        }
    }

    /// Returns `f(x(t))·dx/dt`.
    pub(super) fn eval(&mut self, t: f64) -> Result<f64, Error> {
        let (x, jacobian) = self.domain.map(t);
        self.evaluations += 1;

        let value = self.model.call(&x).map_err(Error::model)?;
        if !value.is_finite() {
            return Err(Error::NonFiniteValue { x, value });
        }

        // A vanishing integrand stays zero even where the jacobian overflows.
        if value == 0.0 {
            return Ok(0.0);
        }

        Ok(value * jacobian)
    }

    pub(super) fn evaluations(&self) -> usize {
        self.evaluations
    }
}
