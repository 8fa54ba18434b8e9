use anyhow::Result;
use greenhouse_core::{
    dummy::{DummyEnv, DummyEnvConfig, DummyPolicy},
    error::EvalError,
    rollout, Env, RolloutEvaluator, METRIC_KEYS, OBS_CHANNELS,
};

const ROW_WIDTH: usize = OBS_CHANNELS + 1 + METRIC_KEYS.len();

fn policy() -> DummyPolicy {
    DummyPolicy::new(vec![0.5, -0.5])
}

#[test]
fn rollout_returns_one_row_per_executed_step() -> Result<()> {
    let config = DummyEnvConfig {
        horizon: 5,
        ..Default::default()
    };
    let mut env = DummyEnv::build(&config, 0)?;
    let record = rollout(&mut env, &mut policy())?;

    assert_eq!(record.len(), 5);
    for row in record.rows() {
        assert_eq!(row.len(), ROW_WIDTH);
    }
    Ok(())
}

#[test]
fn counting_rewards_and_zero_metrics() -> Result<()> {
    let config = DummyEnvConfig {
        horizon: 3,
        ..Default::default()
    };
    let mut env = DummyEnv::build(&config, 0)?;
    let record = rollout(&mut env, &mut policy())?;

    assert_eq!(record.len(), 3);
    for (t, row) in record.rows().iter().enumerate() {
        assert_eq!(row[OBS_CHANNELS], t as f32);
        for j in 0..METRIC_KEYS.len() {
            assert_eq!(row[OBS_CHANNELS + 1 + j], 0.0);
        }
    }
    Ok(())
}

#[test]
fn metrics_are_copied_without_transformation() -> Result<()> {
    let config = DummyEnvConfig {
        horizon: 4,
        metric_scale: 1.0,
        ..Default::default()
    };
    let mut env = DummyEnv::build(&config, 0)?;
    let record = rollout(&mut env, &mut policy())?;

    for (t, row) in record.rows().iter().enumerate() {
        for j in 0..METRIC_KEYS.len() {
            let expected = (j as f32 + 1.0) * (t as f32 + 1.0);
            assert_eq!(row[OBS_CHANNELS + 1 + j], expected);
        }
    }
    Ok(())
}

#[test]
fn records_the_unnormalized_post_step_observation() -> Result<()> {
    let seed = 666;
    let config = DummyEnvConfig {
        horizon: 3,
        ..Default::default()
    };
    let mut env = DummyEnv::build(&config, seed)?;
    let record = rollout(&mut env, &mut policy())?;

    for (t, row) in record.rows().iter().enumerate() {
        for i in 0..OBS_CHANNELS {
            // The observation reached after the step, doubled by the dummy
            // env's unnormalization.
            let expected = (seed as f32 + (t + 1) as f32 + 0.01 * i as f32) * 2.0;
            assert_eq!(row[i], expected);
        }
    }
    Ok(())
}

#[test]
fn aggregation_tags_contiguous_episode_indices() -> Result<()> {
    let config = DummyEnvConfig {
        horizon: 10,
        ..Default::default()
    };
    let mut evaluator = RolloutEvaluator::<DummyEnv>::new(&config, 666, 2)?;
    let result = evaluator.evaluate(&mut policy())?;

    assert_eq!(result.n_rows(), 20);
    assert_eq!(result.columns().len(), ROW_WIDTH + 1);
    assert_eq!(result.columns()[0], "obs_0");
    assert_eq!(result.columns()[OBS_CHANNELS], "Rewards");
    assert_eq!(result.columns().last().unwrap(), "episode");

    for (ix, row) in result.rows().iter().enumerate() {
        let expected = if ix < 10 { 0.0 } else { 1.0 };
        assert_eq!(*row.last().unwrap(), expected);
    }
    Ok(())
}

#[test]
fn repeated_evaluations_are_identical() -> Result<()> {
    let config = DummyEnvConfig {
        horizon: 6,
        metric_scale: 0.25,
        ..Default::default()
    };
    let result_a = RolloutEvaluator::<DummyEnv>::new(&config, 666, 2)?.evaluate(&mut policy())?;
    let result_b = RolloutEvaluator::<DummyEnv>::new(&config, 666, 2)?.evaluate(&mut policy())?;

    assert_eq!(result_a.rows(), result_b.rows());
    Ok(())
}

#[test]
fn early_done_does_not_end_the_rollout() -> Result<()> {
    let config = DummyEnvConfig {
        horizon: 4,
        early_done: Some(1),
        ..Default::default()
    };
    let mut env = DummyEnv::build(&config, 0)?;
    let record = rollout(&mut env, &mut policy())?;

    assert_eq!(record.len(), 4);
    let rewards: Vec<f32> = record.rows().iter().map(|r| r[OBS_CHANNELS]).collect();
    assert_eq!(rewards, vec![0.0, 1.0, 2.0, 3.0]);
    Ok(())
}

#[test]
fn missing_metric_key_fails_the_rollout() -> Result<()> {
    let config = DummyEnvConfig {
        horizon: 3,
        omit_metric: Some("co2_cost".to_string()),
        ..Default::default()
    };
    let mut env = DummyEnv::build(&config, 0)?;
    let err = rollout(&mut env, &mut policy()).unwrap_err();

    match err.downcast_ref::<EvalError>() {
        Some(EvalError::ContractViolation { key, timestep }) => {
            assert_eq!(key, "co2_cost");
            assert_eq!(*timestep, 0);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[test]
fn episode_start_is_asserted_once_and_state_is_threaded() -> Result<()> {
    let config = DummyEnvConfig {
        horizon: 4,
        ..Default::default()
    };
    let mut env = DummyEnv::build(&config, 0)?;
    let mut policy = policy();
    rollout(&mut env, &mut policy)?;

    assert_eq!(policy.episode_starts, vec![true, false, false, false]);
    assert_eq!(policy.last_state, Some(4));
    Ok(())
}

#[test]
fn zero_horizon_is_a_configuration_error() -> Result<()> {
    let config = DummyEnvConfig {
        horizon: 0,
        ..Default::default()
    };
    let mut env = DummyEnv::build(&config, 0)?;
    let err = rollout(&mut env, &mut policy()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EvalError>(),
        Some(EvalError::Configuration(_))
    ));
    Ok(())
}

#[test]
fn zero_simulations_is_rejected() {
    let config = DummyEnvConfig::default();
    assert!(RolloutEvaluator::<DummyEnv>::new(&config, 666, 0).is_err());
}

#[test]
fn too_few_observation_channels_is_a_configuration_error() -> Result<()> {
    let config = DummyEnvConfig {
        obs_dim: 5,
        ..Default::default()
    };
    let mut evaluator = RolloutEvaluator::<DummyEnv>::new(&config, 666, 1)?;
    let err = evaluator.evaluate(&mut policy()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EvalError>(),
        Some(EvalError::Configuration(_))
    ));
    Ok(())
}
