//! Policy.
use super::Env;

/// A frozen decision-making policy on an environment.
///
/// A policy maps an observation to an action. Recurrent policies thread a
/// state through successive queries; feed-forward policies use `State = ()`
/// and return `None`.
pub trait Policy<E: Env> {
    /// Recurrent state carried between successive queries.
    type State;

    /// Computes an action for the given observation.
    ///
    /// `episode_start` is true only for the first query of an episode.
    /// With `deterministic` set, no exploration noise is applied and the
    /// action is reproducible given the same observation and state.
    fn predict(
        &mut self,
        obs: &E::Obs,
        state: Option<Self::State>,
        episode_start: bool,
        deterministic: bool,
    ) -> (E::Act, Option<Self::State>);
}
