//! Command line arguments of the evaluation driver.
use clap::{Parser, ValueEnum};
use std::fmt;

/// Replay a trained policy in the greenhouse simulator and store the results.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Name of the project.
    #[arg(long, default_value = "AgriControl")]
    pub project: String,

    /// Environment id.
    #[arg(long, default_value = "TomatoEnv")]
    pub env_id: String,

    /// Name of the trained model.
    #[arg(long)]
    pub model_name: String,

    /// Algorithm the model was trained with.
    #[arg(long, value_enum, default_value_t = Algorithm::Ppo)]
    pub algorithm: Algorithm,

    /// Scale of the parametric uncertainty of the simulator.
    #[arg(long)]
    pub uncertainty_scale: f32,

    /// Evaluation mode.
    #[arg(long, value_enum)]
    pub mode: Mode,
}

/// Training algorithm of the evaluated model.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Algorithm {
    /// Proximal policy optimization.
    Ppo,
    /// Soft actor-critic.
    Sac,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Ppo => write!(f, "ppo"),
            Algorithm::Sac => write!(f, "sac"),
        }
    }
}

/// Evaluation mode.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    /// One rollout with the nominal simulator parameters.
    Deterministic,
    /// Thirty seeded rollouts under parametric uncertainty.
    Stochastic,
}

impl Mode {
    /// Number of seeded simulations run in this mode.
    pub fn n_sims(&self) -> usize {
        match self {
            Mode::Deterministic => 1,
            Mode::Stochastic => 30,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Deterministic => write!(f, "deterministic"),
            Mode::Stochastic => write!(f, "stochastic"),
        }
    }
}
