/// A callable model that maps an input to an output.
///
/// Integrands handed to the quadrature solvers are models with
/// `Input = f64` and `Output = f64`.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
