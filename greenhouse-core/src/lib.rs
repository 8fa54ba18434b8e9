#![warn(missing_docs)]
//! Core abstractions for evaluating trained greenhouse climate-control policies.
//!
//! The crate is built around two narrow capabilities: an [`Env`], the
//! black-box stepping interface of a simulated greenhouse, and a [`Policy`],
//! a frozen decision function. The [`RolloutEvaluator`] drives a policy
//! against an environment for a fixed horizon, collects a dense per-timestep
//! table of physical observations, reward and auxiliary cost/violation
//! metrics, and aggregates independent seeded rollouts into a [`ResultSet`].
//!
//! Concrete environments and policies live in separate crates; this crate
//! only depends on the contracts above.
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Env, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{rollout, RolloutEvaluator, METRIC_KEYS, OBS_CHANNELS, RESULT_COLUMNS};

mod results;
pub use results::{EpisodeRecord, ResultSet};

pub mod dummy;
