//! Evaluation driver.
//!
//! Replays a trained policy in the simulated greenhouse across seeded
//! rollouts and stores the per-timestep result table as CSV.
mod args;
mod config;

use anyhow::Result;
use args::{Args, Mode};
use clap::Parser;
use config::Layout;
use greenhouse_core::{error::EvalError, RolloutEvaluator};
use greenhouse_gym_env::{GymEnv, GymEnvConfig};
use greenhouse_policy::MlpPolicy;
use log::info;

/// Seed of simulation 0; simulation `i` uses `BASE_SEED + i`.
const BASE_SEED: i64 = 666;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.mode == Mode::Deterministic && args.uncertainty_scale != 0.0 {
        return Err(EvalError::Configuration(
            "uncertainty scale must be 0.0 in deterministic mode".to_string(),
        )
        .into());
    }

    let layout = Layout::new(&args);
    std::fs::create_dir_all(layout.save_dir())?;

    let env_params = layout.env_config(&args.env_id);
    if !env_params.exists() {
        return Err(EvalError::MissingResource(env_params).into());
    }

    let env_config = GymEnvConfig::default()
        .env_id(args.env_id.as_str())
        .env_config_path(env_params)
        .uncertainty_scale(args.uncertainty_scale)
        .stats_path(layout.stats(&args.model_name));

    let mut policy = MlpPolicy::load(layout.model(&args.model_name))?;
    let mut evaluator =
        RolloutEvaluator::<GymEnv>::new(&env_config, BASE_SEED, args.mode.n_sims())?;
    let result = evaluator.evaluate(&mut policy)?;

    let env = evaluator.env();
    let growth_year: i64 = env.get_attr("growth_year")?;
    let start_day: i64 = env.get_attr("start_day")?;
    let location: String = env.get_attr("location")?;

    let save_name = format!(
        "{}-{}{}-{}.csv",
        args.model_name, growth_year, start_day, location
    );
    let save_path = layout.save_dir().join(save_name);
    result.save(&save_path)?;
    info!("Saved results to {}", save_path.display());

    Ok(())
}
