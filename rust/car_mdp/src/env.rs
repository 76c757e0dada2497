use crate::rewards::RewardTable;
use crate::table::TransitionTable;
use crate::*;
use rand::prelude::*;
use tracing::debug;

/// The car MDP. Built once per process; [`CarEnvironment::reset`] only moves
/// the car back to [`CarState::INITIAL`], rewards and transitions persist.
///
/// Steps and resets are not logged here; a [`Session`] reports them through
/// its observers.
#[derive(Debug)]
pub struct CarEnvironment {
    table: TransitionTable,
    rewards: RewardTable,
    state: CarState,
    rng: StdRng,
}

impl CarEnvironment {
    pub fn new(config: EnvConfig) -> Result<Self, MdpError> {
        Self::with_transitions(car::authored_transitions(), config)
    }

    pub fn with_transitions(transitions: Transitions, config: EnvConfig) -> Result<Self, MdpError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let table = TransitionTable::new(transitions, config.probability_policy)?;
        let rewards = match config.rewards {
            RewardSpec::Random => RewardTable::randomized(&mut rng),
            RewardSpec::Fixed(rewards) => RewardTable::fixed(rewards)?,
        };
        debug!(rewards = ?rewards.as_slice(), entries = table.len(), "built environment");

        let mut env = Self {
            table,
            rewards,
            state: CarState::INITIAL,
            rng,
        };
        env.reset();

        Ok(env)
    }

    /// Applies `action` to the current state.
    ///
    /// From a terminal state nothing moves and `done` is `true`. An action
    /// with no entry for the current state is a no-op with `done == false`.
    /// Otherwise the next state is drawn from the weighted outcome list and
    /// the reward is that of the state landed in.
    pub fn step(&mut self, action: CarAction) -> StepInfo {
        let s = self.state;

        if self.is_terminal(s) {
            return self.stay(StepKind::AlreadyTerminal, true);
        }

        let Some(next) = self.table.sample(&mut self.rng, s, action) else {
            return self.stay(StepKind::InvalidAction, false);
        };

        self.state = next;
        let reward = self.rewards.reward(next);

        StepInfo {
            observation: next,
            reward,
            done: self.is_terminal(next),
            kind: StepKind::Moved,
        }
    }

    pub fn reset(&mut self) -> CarState {
        self.state = self.initial_state();
        self.state
    }

    fn stay(&self, kind: StepKind, done: bool) -> StepInfo {
        StepInfo {
            observation: self.state,
            reward: self.rewards.reward(self.state),
            done,
            kind,
        }
    }

    pub fn state(&self) -> CarState {
        self.state
    }

    pub fn initial_state(&self) -> CarState {
        CarState::INITIAL
    }

    pub fn is_terminal(&self, s: CarState) -> bool {
        s.is_terminal()
    }

    pub fn reward(&self, s: CarState) -> Reward {
        self.rewards.reward(s)
    }

    pub fn rewards(&self) -> &[Reward] {
        self.rewards.as_slice()
    }

    pub fn valid_actions(&self, s: CarState) -> Vec<CarAction> {
        self.table.valid_actions(s)
    }

    pub fn outcomes(&self, s: CarState, a: CarAction) -> Option<&[Transition]> {
        self.table.outcomes(s, a)
    }
}
