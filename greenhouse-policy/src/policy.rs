//! Loading and querying exported actors.
use crate::{Mat, Mlp};
use anyhow::Result;
use greenhouse_core::{error::EvalError, Env, Policy};
use log::info;
use std::{fs::File, io::BufReader, path::Path};

/// A feed-forward policy backed by exported MLP weights.
///
/// Inference is always deterministic: the forward pass produces the squashed
/// mean action of the trained actor. The `deterministic` flag of
/// [`Policy::predict`] is accepted for contract parity; stochastic action
/// sampling is a training-time concern and never ships with the export.
#[derive(Debug)]
pub struct MlpPolicy {
    mlp: Mlp,
}

impl MlpPolicy {
    /// Wraps an already constructed [`Mlp`].
    pub fn new(mlp: Mlp) -> Self {
        Self { mlp }
    }

    /// Loads exported weights from `path`.
    ///
    /// Fails with [`EvalError::MissingResource`] when no file exists at the
    /// given path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EvalError::MissingResource(path.to_path_buf()).into());
        }
        let rdr = BufReader::new(File::open(path)?);
        let mlp: Mlp = bincode::deserialize_from(rdr)?;
        info!("Loaded policy weights from {}", path.display());
        Ok(Self { mlp })
    }

    /// Writes the wrapped weights to `path`.
    ///
    /// Used by export tooling and tests; the evaluation driver only loads.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let wtr = File::create(path.as_ref())?;
        bincode::serialize_into(wtr, &self.mlp)?;
        Ok(())
    }
}

impl<E> Policy<E> for MlpPolicy
where
    E: Env,
    E::Obs: AsRef<[f32]>,
    E::Act: From<Vec<f32>>,
{
    type State = ();

    fn predict(
        &mut self,
        obs: &E::Obs,
        _state: Option<Self::State>,
        _episode_start: bool,
        _deterministic: bool,
    ) -> (E::Act, Option<Self::State>) {
        let x = Mat::from(obs.as_ref().to_vec());
        let y = self.mlp.forward(&x);
        (E::Act::from(y.data), None)
    }
}

#[cfg(test)]
mod tests {
    use super::MlpPolicy;
    use crate::{Mat, Mlp};
    use greenhouse_core::{
        dummy::{DummyAct, DummyEnv, DummyObs},
        error::EvalError,
        Policy,
    };
    use tempdir::TempDir;

    fn single_layer_policy() -> MlpPolicy {
        let w = Mat {
            data: vec![1.0, 0.0, 0.0, 1.0],
            shape: vec![2, 2],
        };
        let b = Mat {
            data: vec![0.0, 0.0],
            shape: vec![2, 1],
        };
        MlpPolicy::new(Mlp::new(vec![w], vec![b]))
    }

    #[test]
    fn predict_runs_the_forward_pass() {
        let mut policy = single_layer_policy();
        let obs = DummyObs(vec![0.25, -0.75]);
        let (act, state): (DummyAct, Option<()>) =
            Policy::<DummyEnv>::predict(&mut policy, &obs, None, true, true);

        assert_eq!(act.0, vec![0.25f32.tanh(), (-0.75f32).tanh()]);
        assert!(state.is_none());
    }

    #[test]
    fn load_roundtrips_exported_weights() {
        let dir = TempDir::new("policy").unwrap();
        let path = dir.path().join("best_model.bin");

        single_layer_policy().save(&path).unwrap();
        let mut policy = MlpPolicy::load(&path).unwrap();

        let obs = DummyObs(vec![1.0, 2.0]);
        let (act, _): (DummyAct, _) =
            Policy::<DummyEnv>::predict(&mut policy, &obs, None, true, true);
        assert_eq!(act.0, vec![1.0f32.tanh(), 2.0f32.tanh()]);
    }

    #[test]
    fn load_fails_on_a_missing_file() {
        let dir = TempDir::new("policy").unwrap();
        let err = MlpPolicy::load(dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EvalError>(),
            Some(EvalError::MissingResource(_))
        ));
    }
}
