//! Wrapper of the greenhouse environment implemented in Python.
use crate::{
    util::{pyany_to_vec, vec_to_pyobj},
    GymAct, GymEnvConfig, GymObs, ObsNormalizer,
};
use anyhow::Result;
use greenhouse_core::{
    error::EvalError,
    record::{Record, RecordValue},
    Env, Step,
};
use log::{info, trace};
use pyo3::{
    types::{PyDict, PyTuple},
    FromPyObject, PyAny, PyObject, Python,
};

/// The Python greenhouse simulator behind the [`Env`] stepping interface.
///
/// The binding never looks inside the simulator: episodes are driven purely
/// through `reset`/`step`/`set_seed` calls and attribute reads. Observations
/// handed to the policy are normalized Rust-side with the statistics the
/// trainer saved; [`Env::unnormalize_obs`] inverts them back to physical
/// units.
pub struct GymEnv {
    env: PyObject,

    normalizer: ObsNormalizer,

    /// Decision steps per episode, read from the `N` attribute at build time.
    horizon: usize,

    obs_names: Vec<String>,
}

impl GymEnv {
    /// Reads an attribute of the underlying Python environment.
    pub fn get_attr<T>(&self, name: &str) -> Result<T>
    where
        T: for<'p> FromPyObject<'p>,
    {
        Python::with_gil(|py| -> Result<T> {
            let value = self.env.getattr(py, name)?;
            Ok(value.extract(py)?)
        })
    }
}

/// Copies every scalar-valued entry of the Python info dict into a [`Record`].
fn info_to_record(info: &PyAny) -> Record {
    let mut record = Record::empty();
    if let Ok(dict) = info.downcast::<PyDict>() {
        for (key, value) in dict.iter() {
            let key: String = match key.extract() {
                Ok(k) => k,
                Err(_) => continue,
            };
            if let Ok(v) = value.extract::<f32>() {
                record.insert(key, RecordValue::Scalar(v));
            }
        }
    }
    record
}

impl Env for GymEnv {
    type Config = GymEnvConfig;
    type Obs = GymObs;
    type Act = GymAct;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let (env, horizon, obs_names, obs_dim) =
            Python::with_gil(|py| -> Result<(PyObject, usize, Vec<String>, usize)> {
                info!("Initialize GymEnv");
                info!("Python version = {}", py.version());

                let module = py.import(config.module.as_str())?;
                let kwargs = PyDict::new(py);
                if let Some(path) = &config.env_config_path {
                    kwargs.set_item("config_path", path.to_string_lossy().as_ref())?;
                }
                kwargs.set_item("uncertainty_scale", config.uncertainty_scale)?;
                kwargs.set_item("training", false)?;
                let env = module
                    .getattr("make")?
                    .call((config.env_id.as_str(),), Some(kwargs))?;

                let horizon: usize = env.getattr("N")?.extract()?;
                let obs_names: Vec<String> = env.call_method0("get_obs_names")?.extract()?;
                let shape: Vec<usize> = env
                    .getattr("observation_space")?
                    .getattr("shape")?
                    .extract()?;
                let obs_dim = match shape.first() {
                    Some(d) => *d,
                    None => {
                        return Err(EvalError::Configuration(
                            "environment has a scalar observation space".to_string(),
                        )
                        .into())
                    }
                };

                env.call_method("set_seed", (seed,), None)?;

                Ok((env.into(), horizon, obs_names, obs_dim))
            })?;

        let normalizer = match &config.stats_path {
            Some(path) => ObsNormalizer::load(path)?,
            None => ObsNormalizer::identity(obs_dim),
        };
        if normalizer.dim() != obs_dim {
            return Err(EvalError::Configuration(format!(
                "normalization statistics cover {} channels, observation space has {}",
                normalizer.dim(),
                obs_dim
            ))
            .into());
        }

        Ok(Self {
            env,
            normalizer,
            horizon,
            obs_names,
        })
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        trace!("GymEnv::reset()");

        let raw = Python::with_gil(|py| -> Result<Vec<f32>> {
            let ret = self.env.call_method0(py, "reset")?;
            let any = ret.as_ref(py);
            // Newer simulators return an (obs, info) pair, older ones the
            // observation alone.
            let obs = match any.downcast::<PyTuple>() {
                Ok(tuple) => tuple.get_item(0),
                Err(_) => any,
            };
            pyany_to_vec(obs)
        })?;

        Ok(GymObs(self.normalizer.normalize(&raw)))
    }

    fn step(&mut self, act: &Self::Act) -> Result<Step<Self>> {
        trace!("GymEnv::step()");

        let (raw, reward, done, info) =
            Python::with_gil(|py| -> Result<(Vec<f32>, f32, bool, Record)> {
                let a_py = vec_to_pyobj(py, &act.0);
                let ret = self.env.call_method(py, "step", (a_py,), None)?;
                let step: &PyTuple = ret.extract(py)?;
                if step.len() != 5 {
                    return Err(EvalError::Configuration(format!(
                        "step returned a {}-tuple, expected (obs, reward, terminated, truncated, info)",
                        step.len()
                    ))
                    .into());
                }

                let raw = pyany_to_vec(step.get_item(0))?;
                let reward: f32 = step.get_item(1).extract()?;
                let terminated: bool = step.get_item(2).extract()?;
                let truncated: bool = step.get_item(3).extract()?;
                let info = info_to_record(step.get_item(4));

                Ok((raw, reward, terminated | truncated, info))
            })?;

        let obs = GymObs(self.normalizer.normalize(&raw));

        Ok(Step::new(act.clone(), obs, reward, done, info))
    }

    fn set_seed(&mut self, seed: i64) -> Result<()> {
        Python::with_gil(|py| -> Result<()> {
            self.env.call_method(py, "set_seed", (seed,), None)?;
            Ok(())
        })
    }

    fn horizon(&self) -> usize {
        self.horizon
    }

    fn unnormalize_obs(&self, obs: &Self::Obs) -> Vec<f32> {
        self.normalizer.unnormalize(&obs.0)
    }

    fn obs_names(&self) -> Vec<String> {
        self.obs_names.clone()
    }
}
