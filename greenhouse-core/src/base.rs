//! Core abstractions.
mod env;
mod policy;
mod step;
pub use env::Env;
pub use policy::Policy;
pub use step::Step;
use std::fmt::Debug;

/// An observation of an environment.
pub trait Obs: Clone + Debug {}

/// An action on an environment.
pub trait Act: Clone + Debug {}
