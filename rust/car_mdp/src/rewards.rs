use crate::{CarState, MdpError, Reward};
use rand::prelude::*;
use serde::Serialize;
use std::ops::RangeInclusive;

pub const REWARD_RANGE: RangeInclusive<Reward> = -10..=15;

pub const TERMINAL_REWARD: Reward = 50;

/// Reward for landing in each state, indexed by [`CarState::index`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardTable {
    rewards: Vec<Reward>,
}

impl RewardTable {
    pub fn randomized(rng: &mut StdRng) -> Self {
        let rewards = CarState::ALL
            .iter()
            .map(|_| rng.gen_range(REWARD_RANGE))
            .collect();

        Self::pinned(rewards)
    }

    /// Terminal entries are overwritten with [`TERMINAL_REWARD`].
    pub fn fixed(rewards: Vec<Reward>) -> Result<Self, MdpError> {
        if rewards.len() != CarState::COUNT {
            return Err(MdpError::RewardTableSize {
                expected: CarState::COUNT,
                actual: rewards.len(),
            });
        }

        Ok(Self::pinned(rewards))
    }

    fn pinned(mut rewards: Vec<Reward>) -> Self {
        for s in CarState::TERMINAL {
            rewards[s.index()] = TERMINAL_REWARD;
        }

        Self { rewards }
    }

    pub fn reward(&self, s: CarState) -> Reward {
        self.rewards[s.index()]
    }

    pub fn as_slice(&self) -> &[Reward] {
        &self.rewards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_rewards_stay_in_range() {
        let rng = &mut StdRng::from_entropy();
        for _ in 0..100 {
            let table = RewardTable::randomized(rng);
            for s in CarState::ALL {
                if s.is_terminal() {
                    assert_eq!(table.reward(s), TERMINAL_REWARD);
                } else {
                    assert!(REWARD_RANGE.contains(&table.reward(s)));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_rewards() {
        let a = RewardTable::randomized(&mut StdRng::seed_from_u64(42));
        let b = RewardTable::randomized(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_table_pins_terminal_reward() {
        let table = RewardTable::fixed((0..20).collect()).unwrap();
        assert_eq!(table.reward(CarState::Off), 0);
        assert_eq!(table.reward(CarState::TotalFailure), 15);
        assert_eq!(table.reward(CarState::NewEnergySystem), TERMINAL_REWARD);
    }

    #[test]
    fn fixed_table_must_cover_every_state() {
        assert_eq!(
            RewardTable::fixed(vec![0; 3]),
            Err(MdpError::RewardTableSize {
                expected: 20,
                actual: 3
            })
        );
    }
}
