//! Core traits shared by the Planck solvers and physical models.
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Observer`]: receives solver events and optionally returns control actions

mod model;
mod observer;

pub use model::Model;
pub use observer::Observer;
