//! Actions on the Python greenhouse.
use greenhouse_core::Act;

/// A flat continuous action vector.
///
/// Values are in the squashed range of the policy head; the simulator
/// rescales them to its actuator bounds.
#[derive(Clone, Debug)]
pub struct GymAct(pub Vec<f32>);

impl Act for GymAct {}

impl From<Vec<f32>> for GymAct {
    fn from(v: Vec<f32>) -> Self {
        Self(v)
    }
}
