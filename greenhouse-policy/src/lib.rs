#![warn(missing_docs)]
//! Backend-free policies for greenhouse RL evaluation.
//!
//! Actors trained elsewhere are exported as plain weight matrices and loaded
//! here without a deep-learning backend. The forward pass is a small MLP
//! with ReLU hidden layers and a tanh-squashed output head, which is the
//! deterministic inference path of the trained actor.
mod mat;
mod mlp;
mod policy;

pub use mat::Mat;
pub use mlp::Mlp;
pub use policy::MlpPolicy;
