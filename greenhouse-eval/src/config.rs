//! Directory layout of training artifacts and evaluation results.
use crate::args::{Args, Mode};
use std::path::{Path, PathBuf};

/// Resolves the paths of an evaluation run.
///
/// Training artifacts live under `train_data/{project}/{algorithm}/{mode}/`;
/// results are written to `data/{project}/{mode}/{algorithm}/`, with the
/// uncertainty scale appended as an extra directory in stochastic mode so
/// that sweeps over the scale do not overwrite each other.
pub struct Layout {
    train_root: PathBuf,
    save_dir: PathBuf,
    config_root: PathBuf,
}

impl Layout {
    /// Builds the layout for the given arguments.
    pub fn new(args: &Args) -> Self {
        let train_root = PathBuf::from("train_data")
            .join(&args.project)
            .join(args.algorithm.to_string())
            .join(args.mode.to_string());

        let mut save_dir = PathBuf::from("data")
            .join(&args.project)
            .join(args.mode.to_string())
            .join(args.algorithm.to_string());
        if args.mode == Mode::Stochastic {
            save_dir = save_dir.join(format!("{}", args.uncertainty_scale));
        }

        Self {
            train_root,
            save_dir,
            config_root: PathBuf::from("configs").join("envs"),
        }
    }

    /// Exported weights of the trained model.
    pub fn model(&self, model_name: &str) -> PathBuf {
        self.train_root
            .join("models")
            .join(model_name)
            .join("best_model.bin")
    }

    /// Normalization statistics saved alongside the model.
    pub fn stats(&self, model_name: &str) -> PathBuf {
        self.train_root
            .join("envs")
            .join(model_name)
            .join("best_vecnormalize.yaml")
    }

    /// Environment parameter file of the given environment.
    pub fn env_config(&self, env_id: &str) -> PathBuf {
        self.config_root.join(format!("{}.yaml", env_id))
    }

    /// Directory the result set is written to.
    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }
}
