use crate::common::defs::*;
use crate::*;
use rand::prelude::*;

/// Presses a random button among those that do something in `s`.
#[derive(Debug)]
pub struct RandomValidPolicy {
    rng: StdRng,
}

impl RandomValidPolicy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { rng }
    }
}

impl Policy for RandomValidPolicy {
    fn policy(&mut self, _s: CarState, valid: &[CarAction]) -> Option<CarAction> {
        valid.choose(&mut self.rng).copied()
    }
}

/// Always presses the same button, valid or not.
#[derive(Debug, Clone, Copy)]
pub struct FixedPolicy(pub CarAction);

impl Policy for FixedPolicy {
    fn policy(&mut self, _s: CarState, _valid: &[CarAction]) -> Option<CarAction> {
        Some(self.0)
    }
}

/// Plays whole episodes through a [`Session`], so observers see them too.
///
/// Each episode starts with a reset and records the initial state with a
/// zero reward, then one event per step. An episode stops when the session
/// reports `done`, when the policy has no action, or after `max_steps`.
pub struct SessionEpisodeGenerator<'a, P: Policy> {
    pub session: &'a mut Session,
    pub policy: P,
    pub max_steps: usize,
}

impl<'a, P: Policy> EpisodeGenerator for SessionEpisodeGenerator<'a, P> {
    fn generate(&mut self, n: usize) -> Vec<Vec<EpisodeEvent>> {
        let mut eps = Vec::with_capacity(n);

        for _ in 0..n {
            let s = self.session.reset();
            let mut ep = vec![EpisodeEvent {
                s,
                r: Default::default(),
            }];

            for _ in 0..self.max_steps {
                let s = self.session.state();
                let valid = self.session.env().valid_actions(s);
                let Some(a) = self.policy.policy(s, &valid) else {
                    break;
                };

                let step = self.session.act(a);
                ep.push(EpisodeEvent {
                    s: step.info.observation,
                    r: step.info.reward,
                });
                if step.info.done {
                    break;
                }
            }

            eps.push(ep);
        }

        eps
    }
}
