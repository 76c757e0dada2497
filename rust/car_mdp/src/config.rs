use crate::Reward;
use serde::{Deserialize, Serialize};

/// What to do with outcome lists whose probabilities do not add up to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProbabilityPolicy {
    /// Keep the raw values and use them as relative weights.
    Tolerant,
    /// Rescale each list so it sums to 1.
    Normalize,
    /// Refuse to build the table.
    #[default]
    Validate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RewardSpec {
    /// Draw every reward once at construction; the terminal state is pinned.
    #[default]
    Random,
    /// One reward per state, in state index order.
    Fixed(Vec<Reward>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Seeds both the reward draw and transition sampling. `None` uses entropy.
    pub seed: Option<u64>,
    pub rewards: RewardSpec,
    pub probability_policy: ProbabilityPolicy,
}

impl EnvConfig {
    pub fn seeded(seed: u64) -> Self {
        Self::default().with_seed(seed)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_rewards(mut self, rewards: RewardSpec) -> Self {
        self.rewards = rewards;
        self
    }

    pub fn with_probability_policy(mut self, policy: ProbabilityPolicy) -> Self {
        self.probability_policy = policy;
        self
    }
}
