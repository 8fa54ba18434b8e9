//! This module is used for tests.
//!
//! [`DummyEnv`] is a deterministic stand-in for the greenhouse simulator:
//! rewards count the executed steps (`r_t = t`), observations depend on the
//! seed and the timestep, de-normalization doubles every channel, and the
//! auxiliary metrics follow a fixed formula scaled by the configuration.
use crate::{
    record::{Record, RecordValue},
    Act, Env, Obs, Policy, Step, METRIC_KEYS, OBS_CHANNELS,
};
use anyhow::Result;

/// Observation of [`DummyEnv`].
#[derive(Clone, Debug)]
pub struct DummyObs(pub Vec<f32>);

impl Obs for DummyObs {}

impl AsRef<[f32]> for DummyObs {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

/// Action of [`DummyEnv`].
#[derive(Clone, Debug)]
pub struct DummyAct(pub Vec<f32>);

impl Act for DummyAct {}

impl From<Vec<f32>> for DummyAct {
    fn from(v: Vec<f32>) -> Self {
        Self(v)
    }
}

/// Configuration of [`DummyEnv`].
#[derive(Clone, Debug)]
pub struct DummyEnvConfig {
    /// Episode horizon.
    pub horizon: usize,

    /// Number of observation channels.
    pub obs_dim: usize,

    /// Report `done` from this timestep on, instead of at the horizon.
    pub early_done: Option<usize>,

    /// Omit this metric key from every info payload.
    pub omit_metric: Option<String>,

    /// Scale of the auxiliary metric values; zero makes all metrics zero.
    pub metric_scale: f32,
}

impl Default for DummyEnvConfig {
    fn default() -> Self {
        Self {
            horizon: 3,
            obs_dim: OBS_CHANNELS,
            early_done: None,
            omit_metric: None,
            metric_scale: 0.0,
        }
    }
}

/// A deterministic environment for exercising the rollout loop.
pub struct DummyEnv {
    config: DummyEnvConfig,
    seed: i64,
    t: usize,
}

impl DummyEnv {
    fn obs_at(&self, t: usize) -> DummyObs {
        DummyObs(
            (0..self.config.obs_dim)
                .map(|i| self.seed as f32 + t as f32 + 0.01 * i as f32)
                .collect(),
        )
    }

    /// The metric value reported for metric `j` at timestep `t`.
    pub fn metric_at(&self, j: usize, t: usize) -> f32 {
        self.config.metric_scale * (j as f32 + 1.0) * (t as f32 + 1.0)
    }
}

impl Env for DummyEnv {
    type Config = DummyEnvConfig;
    type Obs = DummyObs;
    type Act = DummyAct;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            seed,
            t: 0,
        })
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.t = 0;
        Ok(self.obs_at(0))
    }

    fn step(&mut self, act: &Self::Act) -> Result<Step<Self>> {
        let t = self.t;
        self.t += 1;

        let done = match self.config.early_done {
            Some(k) => self.t >= k,
            None => self.t >= self.config.horizon,
        };

        let mut info = Record::empty();
        for (j, key) in METRIC_KEYS.iter().enumerate() {
            if Some(*key) == self.config.omit_metric.as_deref() {
                continue;
            }
            info.insert(*key, RecordValue::Scalar(self.metric_at(j, t)));
        }

        Ok(Step::new(
            act.clone(),
            self.obs_at(self.t),
            t as f32,
            done,
            info,
        ))
    }

    fn set_seed(&mut self, seed: i64) -> Result<()> {
        self.seed = seed;
        Ok(())
    }

    fn horizon(&self) -> usize {
        self.config.horizon
    }

    fn unnormalize_obs(&self, obs: &Self::Obs) -> Vec<f32> {
        obs.0.iter().map(|v| v * 2.0).collect()
    }

    fn obs_names(&self) -> Vec<String> {
        (0..self.config.obs_dim).map(|i| format!("obs_{}", i)).collect()
    }
}

/// A policy that always returns the same action.
///
/// The episode-start flags seen by [`Policy::predict`] are recorded, and a
/// step counter is threaded through the recurrent state so tests can check
/// that the evaluator threads state correctly.
pub struct DummyPolicy {
    /// The constant action.
    pub act: Vec<f32>,

    /// Episode-start flags observed, in call order.
    pub episode_starts: Vec<bool>,

    /// The last recurrent state handed back to the evaluator.
    pub last_state: Option<usize>,
}

impl DummyPolicy {
    /// Constructs a policy returning `act` on every query.
    pub fn new(act: Vec<f32>) -> Self {
        Self {
            act,
            episode_starts: Vec::new(),
            last_state: None,
        }
    }
}

impl<E: Env> Policy<E> for DummyPolicy
where
    E::Act: From<Vec<f32>>,
{
    type State = usize;

    fn predict(
        &mut self,
        _obs: &E::Obs,
        state: Option<Self::State>,
        episode_start: bool,
        _deterministic: bool,
    ) -> (E::Act, Option<Self::State>) {
        self.episode_starts.push(episode_start);
        let next = state.unwrap_or(0) + 1;
        self.last_state = Some(next);
        (E::Act::from(self.act.clone()), Some(next))
    }
}
