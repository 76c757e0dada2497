use crate::*;

/// Chooses the next action for a state. `None` means the policy has nothing
/// to offer from here, which ends the episode early.
pub trait Policy {
    fn policy(&mut self, s: CarState, valid: &[CarAction]) -> Option<CarAction>;
}

pub trait EpisodeGenerator {
    fn generate(&mut self, n: usize) -> Vec<Vec<EpisodeEvent>>;
}

pub trait Weighted<S> {
    fn s(&self) -> S;

    fn p(&self) -> Probability;
}

impl Weighted<CarState> for Transition {
    fn s(&self) -> CarState {
        self.next_state
    }

    fn p(&self) -> Probability {
        self.probability
    }
}
