//! Rollout evaluation of frozen policies.
//!
//! A rollout drives one fixed-horizon episode against an environment and
//! collects a dense per-timestep table: the physical observation channels,
//! the reward and the auxiliary cost/violation metrics. The
//! [`RolloutEvaluator`] repeats this across independent seeds and merges the
//! episodes into a single [`ResultSet`](crate::ResultSet).
mod rollout;
pub use rollout::{rollout, RolloutEvaluator};

/// Number of physical observation channels recorded per step.
pub const OBS_CHANNELS: usize = 23;

/// Keys of the auxiliary metrics expected in every step info payload,
/// in the order they are recorded.
pub const METRIC_KEYS: [&str; 8] = [
    "EPI",
    "revenue",
    "heat_cost",
    "co2_cost",
    "elec_cost",
    "temp_violation",
    "co2_violation",
    "rh_violation",
];

/// Column headers appended after the observation channel names.
///
/// The trailing `episode` column holds the simulation index assigned during
/// aggregation.
pub const RESULT_COLUMNS: [&str; 10] = [
    "Rewards",
    "EPI",
    "Revenue",
    "Heat costs",
    "CO2 costs",
    "Elec costs",
    "temp_violation",
    "co2_violation",
    "rh_violation",
    "episode",
];
