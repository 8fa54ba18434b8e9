#![warn(missing_docs)]
//! PyO3 binding to the Python greenhouse simulator.
//!
//! The simulator is driven purely through its black-box stepping interface:
//! `reset`, `step`, `set_seed` and a handful of attribute accessors. Numpy
//! observations and actions are converted at the boundary, and observation
//! normalization is applied Rust-side with the statistics the trainer saved,
//! so the policy sees the same inputs it was trained on.
mod act;
mod base;
mod config;
mod normalize;
mod obs;
pub mod util;

pub use act::GymAct;
pub use base::GymEnv;
pub use config::GymEnvConfig;
pub use normalize::ObsNormalizer;
pub use obs::GymObs;
