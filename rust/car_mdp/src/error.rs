use crate::{CarAction, CarState, Probability};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MdpError {
    #[error("no state with index {0}")]
    UnknownState(usize),

    #[error("no action with index {0}")]
    UnknownAction(usize),

    #[error("cannot sample ({state}, {action}): {reason}")]
    InvalidWeights {
        state: CarState,
        action: CarAction,
        reason: String,
    },

    #[error("probabilities for ({state}, {action}) sum to {sum}, expected 1")]
    ProbabilitySum {
        state: CarState,
        action: CarAction,
        sum: Probability,
    },

    #[error("reward table has {actual} entries, expected {expected}")]
    RewardTableSize { expected: usize, actual: usize },
}
