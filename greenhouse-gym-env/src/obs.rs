//! Observations of the Python greenhouse.
use greenhouse_core::Obs;

/// A flat observation vector as emitted by the simulator.
///
/// Values are normalized for policy consumption; the environment's
/// `unnormalize_obs` maps them back to physical units.
#[derive(Clone, Debug)]
pub struct GymObs(pub Vec<f32>);

impl Obs for GymObs {}

impl AsRef<[f32]> for GymObs {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for GymObs {
    fn from(v: Vec<f32>) -> Self {
        Self(v)
    }
}
