//! Observation normalization statistics.
use anyhow::Result;
use greenhouse_core::error::EvalError;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

fn default_epsilon() -> f32 {
    1e-8
}

fn default_clip() -> f32 {
    10.0
}

/// Per-channel running observation statistics saved by the trainer.
///
/// [`ObsNormalizer::normalize`] reproduces the transform the policy saw
/// during training, including clipping; [`ObsNormalizer::unnormalize`] is
/// the inverse affine map (without clipping) back to physical units.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObsNormalizer {
    mean: Vec<f32>,
    var: Vec<f32>,
    #[serde(default = "default_epsilon")]
    epsilon: f32,
    #[serde(default = "default_clip")]
    clip_obs: f32,
}

impl ObsNormalizer {
    /// An identity normalizer for environments evaluated on raw observations.
    pub fn identity(dim: usize) -> Self {
        Self {
            mean: vec![0.0; dim],
            var: vec![1.0; dim],
            epsilon: 0.0,
            clip_obs: f32::INFINITY,
        }
    }

    /// Loads statistics from a YAML export.
    ///
    /// Fails with [`EvalError::MissingResource`] when no file exists at the
    /// given path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EvalError::MissingResource(path.to_path_buf()).into());
        }
        let rdr = BufReader::new(File::open(path)?);
        let stats: Self = serde_yaml::from_reader(rdr)?;
        Ok(stats)
    }

    /// Number of observation channels covered by the statistics.
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Maps a raw observation into normalized units.
    pub fn normalize(&self, obs: &[f32]) -> Vec<f32> {
        debug_assert_eq!(obs.len(), self.mean.len());
        obs.iter()
            .zip(self.mean.iter().zip(self.var.iter()))
            .map(|(o, (m, v))| {
                let z = (o - m) / (v + self.epsilon).sqrt();
                z.max(-self.clip_obs).min(self.clip_obs)
            })
            .collect()
    }

    /// Maps a normalized observation back to physical units.
    pub fn unnormalize(&self, obs: &[f32]) -> Vec<f32> {
        debug_assert_eq!(obs.len(), self.mean.len());
        obs.iter()
            .zip(self.mean.iter().zip(self.var.iter()))
            .map(|(o, (m, v))| o * (v + self.epsilon).sqrt() + m)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ObsNormalizer;
    use greenhouse_core::error::EvalError;
    use std::io::Write;
    use tempdir::TempDir;

    fn normalizer() -> ObsNormalizer {
        ObsNormalizer {
            mean: vec![10.0, -2.0],
            var: vec![4.0, 1.0],
            epsilon: 0.0,
            clip_obs: 10.0,
        }
    }

    #[test]
    fn normalize_centers_and_scales() {
        let z = normalizer().normalize(&[12.0, -2.0]);
        assert_eq!(z, vec![1.0, 0.0]);
    }

    #[test]
    fn normalize_clips_outliers() {
        let z = normalizer().normalize(&[1000.0, -2.0]);
        assert_eq!(z[0], 10.0);
    }

    #[test]
    fn unnormalize_inverts_the_affine_map() {
        let n = normalizer();
        let raw = vec![12.5, -1.5];
        let back = n.unnormalize(&n.normalize(&raw));
        for (a, b) in raw.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn identity_leaves_observations_untouched() {
        let n = ObsNormalizer::identity(3);
        assert_eq!(n.normalize(&[1.0, -2.0, 3.0]), vec![1.0, -2.0, 3.0]);
    }

    #[test]
    fn load_reads_a_yaml_export() {
        let dir = TempDir::new("stats").unwrap();
        let path = dir.path().join("vecnormalize.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "mean: [1.0, 2.0]").unwrap();
        writeln!(file, "var: [1.0, 1.0]").unwrap();
        drop(file);

        let n = ObsNormalizer::load(&path).unwrap();
        assert_eq!(n.dim(), 2);
        assert_eq!(n.normalize(&[1.0, 2.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn load_fails_on_a_missing_file() {
        let dir = TempDir::new("stats").unwrap();
        let err = ObsNormalizer::load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EvalError>(),
            Some(EvalError::MissingResource(_))
        ));
    }
}
