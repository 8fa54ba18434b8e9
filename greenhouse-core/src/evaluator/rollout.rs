//! Fixed-horizon rollout loop and seeded aggregation.
use super::{METRIC_KEYS, OBS_CHANNELS, RESULT_COLUMNS};
use crate::{error::EvalError, EpisodeRecord, Env, Policy, ResultSet};
use anyhow::Result;
use log::{info, trace};

/// Runs one fixed-horizon episode and returns the per-timestep metric table.
///
/// The environment must already be reseeded and restored into deterministic
/// inference mode by the caller. The policy is queried deterministically and
/// its recurrent state is threaded through the loop, with the episode-start
/// flag asserted only for the first query.
///
/// Row `t` of the returned record holds the first [`OBS_CHANNELS`] channels
/// of the de-normalized observation reached *after* applying the action of
/// step `t`, followed by the reward and the eight auxiliary metrics of that
/// step, copied from the info payload without any transformation.
///
/// The episode-end flag reported by the environment is recorded but never
/// acted upon: execution is fixed-horizon and the flag is advisory only.
/// A missing metric key in any info payload fails the rollout with
/// [`EvalError::ContractViolation`].
pub fn rollout<E, P>(env: &mut E, policy: &mut P) -> Result<EpisodeRecord>
where
    E: Env,
    P: Policy<E>,
{
    let n = env.horizon();
    if n == 0 {
        return Err(EvalError::Configuration("environment reports a zero horizon".to_string()).into());
    }

    // One guard slot beyond the horizon; the trailing row stays zero and is
    // dropped before the record is returned.
    let mut rewards = vec![0f32; n + 1];
    let mut metrics = vec![vec![0f32; n + 1]; METRIC_KEYS.len()];
    let mut obs_buf = vec![vec![0f32; OBS_CHANNELS]; n + 1];

    let mut obs = env.reset()?;
    let mut state: Option<P::State> = None;
    let mut episode_start = true;

    for t in 0..n {
        let (act, next_state) = policy.predict(&obs, state, episode_start, true);
        state = next_state;
        episode_start = false;

        let step = env.step(&act)?;
        trace!("t = {}, reward = {}, done = {}", t, step.reward, step.done);

        rewards[t] = step.reward;

        let phys = env.unnormalize_obs(&step.obs);
        if phys.len() < OBS_CHANNELS {
            return Err(EvalError::Configuration(format!(
                "unnormalized observation has {} channels, expected at least {}",
                phys.len(),
                OBS_CHANNELS
            ))
            .into());
        }
        obs_buf[t].copy_from_slice(&phys[..OBS_CHANNELS]);

        for (buf, key) in metrics.iter_mut().zip(METRIC_KEYS.iter()) {
            buf[t] = step.info.get_scalar(key).map_err(|_| EvalError::ContractViolation {
                key: key.to_string(),
                timestep: t,
            })?;
        }

        obs = step.obs;
    }

    // Column-stack the buffers and drop the guard row.
    let mut rows = Vec::with_capacity(n);
    for t in 0..n {
        let mut row = Vec::with_capacity(OBS_CHANNELS + 1 + METRIC_KEYS.len());
        row.extend_from_slice(&obs_buf[t]);
        row.push(rewards[t]);
        for buf in metrics.iter() {
            row.push(buf[t]);
        }
        rows.push(row);
    }

    Ok(EpisodeRecord::new(rows))
}

/// Evaluates a policy over independent seeded rollouts.
///
/// The evaluator owns the environment; each rollout reseeds it to
/// `base_seed + sim` before execution so that runs are reproducible. All
/// episodes are merged row-wise into one [`ResultSet`], each row tagged with
/// its 0-based simulation index. A failing rollout aborts the whole
/// aggregation; partial result sets are never produced.
pub struct RolloutEvaluator<E: Env> {
    env: E,
    base_seed: i64,
    n_sims: usize,
}

impl<E: Env> RolloutEvaluator<E> {
    /// Constructs a [`RolloutEvaluator`].
    ///
    /// `base_seed` seeds the environment for simulation 0; simulation `i`
    /// uses `base_seed + i`.
    pub fn new(config: &E::Config, base_seed: i64, n_sims: usize) -> Result<Self> {
        if n_sims == 0 {
            return Err(
                EvalError::Configuration("number of simulations must be positive".to_string())
                    .into(),
            );
        }
        Ok(Self {
            env: E::build(config, base_seed)?,
            base_seed,
            n_sims,
        })
    }

    /// Returns a reference to the environment.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Runs all seeded rollouts and merges them into one result set.
    pub fn evaluate<P: Policy<E>>(&mut self, policy: &mut P) -> Result<ResultSet> {
        let names = self.env.obs_names();
        if names.len() < OBS_CHANNELS {
            return Err(EvalError::Configuration(format!(
                "environment reports {} observation names, expected at least {}",
                names.len(),
                OBS_CHANNELS
            ))
            .into());
        }

        let mut columns: Vec<String> = names[..OBS_CHANNELS].to_vec();
        columns.extend(RESULT_COLUMNS.iter().map(|s| s.to_string()));
        let mut result = ResultSet::new(columns);

        for sim in 0..self.n_sims {
            self.env.set_seed(self.base_seed + sim as i64)?;
            let record = rollout(&mut self.env, policy)?;
            info!(
                "simulation {}/{}: {} steps",
                sim + 1,
                self.n_sims,
                record.len()
            );
            result.push_episode(record, sim)?;
        }

        Ok(result)
    }
}
