//! Configuration of the simulator binding.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration of [`GymEnv`](crate::GymEnv).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GymEnvConfig {
    /// Python module exposing the `make` entry point.
    pub module: String,

    /// Environment id passed to `make`.
    pub env_id: String,

    /// YAML file with environment parameters, read by the Python side.
    pub env_config_path: Option<PathBuf>,

    /// Scale of the parametric uncertainty applied by the simulator.
    pub uncertainty_scale: f32,

    /// Normalization statistics saved by the trainer. Without it the
    /// binding falls back to an identity normalizer.
    pub stats_path: Option<PathBuf>,
}

impl Default for GymEnvConfig {
    fn default() -> Self {
        Self {
            module: "gl_gym".to_string(),
            env_id: "TomatoEnv".to_string(),
            env_config_path: None,
            uncertainty_scale: 0.0,
            stats_path: None,
        }
    }
}

impl GymEnvConfig {
    /// Sets the Python module.
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    /// Sets the environment id.
    pub fn env_id(mut self, env_id: impl Into<String>) -> Self {
        self.env_id = env_id.into();
        self
    }

    /// Sets the environment parameter file.
    pub fn env_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_config_path = Some(path.into());
        self
    }

    /// Sets the uncertainty scale.
    pub fn uncertainty_scale(mut self, scale: f32) -> Self {
        self.uncertainty_scale = scale;
        self
    }

    /// Sets the normalization statistics file.
    pub fn stats_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stats_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::GymEnvConfig;

    #[test]
    fn builder_setters_override_defaults() {
        let config = GymEnvConfig::default()
            .env_id("LettuceEnv")
            .uncertainty_scale(0.1)
            .stats_path("stats.yaml");
        assert_eq!(config.module, "gl_gym");
        assert_eq!(config.env_id, "LettuceEnv");
        assert_eq!(config.uncertainty_scale, 0.1);
        assert_eq!(config.stats_path.unwrap().to_str().unwrap(), "stats.yaml");
    }
}
