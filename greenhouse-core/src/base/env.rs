//! Environment.
use super::{Act, Obs, Step};
use anyhow::Result;

/// The black-box stepping interface of a simulated greenhouse.
///
/// The evaluator only requires these operations; construction details such as
/// the simulator backend or normalization statistics belong to the
/// implementing crate. Observations returned by [`Env::reset`] and
/// [`Env::step`] may be normalized for policy consumption;
/// [`Env::unnormalize_obs`] maps them back to physical units.
pub trait Env {
    /// Configuration of the environment.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Performs an environment step.
    fn step(&mut self, act: &Self::Act) -> Result<Step<Self>>
    where
        Self: Sized;

    /// Reseeds the random number generator of the environment.
    ///
    /// Called before every rollout so that repeated evaluations of the same
    /// policy are reproducible.
    fn set_seed(&mut self, seed: i64) -> Result<()>;

    /// The fixed number of decision steps per episode.
    fn horizon(&self) -> usize;

    /// Maps a possibly normalized observation back to physical units.
    fn unnormalize_obs(&self, obs: &Self::Obs) -> Vec<f32>;

    /// Ordered names of the physical observation channels.
    fn obs_names(&self) -> Vec<String>;
}
